use std::fmt;

use serde::Serialize;

/// One classified, renderable unit derived from exactly one report line.
///
/// Optional parts of a line that are missing resolve to empty strings, so a
/// renderer never has to deal with absent fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Block {
    /// A `## ` heading. `level` is always 2.
    SectionHeading { level: u8, text: String },
    /// A `### ` heading. `level` is always 3.
    SubHeading { level: u8, text: String },
    /// A line carrying the `**Verdict:` marker, split around the bolded verdict.
    VerdictStatement {
        prefix: String,
        verdict: String,
        suffix: String,
    },
    /// `1. **Title**` with nothing but an optional colon after the bold span.
    NumberedHeading { number: String, title: String },
    /// `1. **Title**: body text`.
    NumberedEntry {
        number: String,
        title: String,
        body: String,
    },
    /// `- **Brand**: "Item" - $12.34 trailing text`.
    PricedBullet {
        brand: String,
        #[serde(rename = "itemName")]
        item_name: String,
        price: String,
        trailing: String,
    },
    /// A bullet nested one level (`   - text`).
    IndentedBullet { text: String },
    /// Any other `- ` bullet.
    PlainBullet { text: String },
    /// An empty or whitespace-only line.
    Spacer,
    /// Fallback: the line verbatim, whitespace included.
    Paragraph { text: String },
}

impl Block {
    /// The variant name, e.g. `"PricedBullet"`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::SectionHeading { .. } => "SectionHeading",
            Block::SubHeading { .. } => "SubHeading",
            Block::VerdictStatement { .. } => "VerdictStatement",
            Block::NumberedHeading { .. } => "NumberedHeading",
            Block::NumberedEntry { .. } => "NumberedEntry",
            Block::PricedBullet { .. } => "PricedBullet",
            Block::IndentedBullet { .. } => "IndentedBullet",
            Block::PlainBullet { .. } => "PlainBullet",
            Block::Spacer => "Spacer",
            Block::Paragraph { .. } => "Paragraph",
        }
    }

    /// Heading level for `SectionHeading`/`SubHeading`, `None` otherwise.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Block::SectionHeading { level, .. } | Block::SubHeading { level, .. } => {
                Some(*level)
            }
            _ => None,
        }
    }

    /// Heading text for `SectionHeading`/`SubHeading`, `None` otherwise.
    pub fn heading_text(&self) -> Option<&str> {
        match self {
            Block::SectionHeading { text, .. } | Block::SubHeading { text, .. } => {
                Some(text.as_str())
            }
            _ => None,
        }
    }

    /// Named text fields in declaration order. Heading levels are not included.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Block::SectionHeading { text, .. }
            | Block::SubHeading { text, .. }
            | Block::IndentedBullet { text }
            | Block::PlainBullet { text }
            | Block::Paragraph { text } => vec![("text", text.as_str())],
            Block::VerdictStatement {
                prefix,
                verdict,
                suffix,
            } => vec![
                ("prefix", prefix.as_str()),
                ("verdict", verdict.as_str()),
                ("suffix", suffix.as_str()),
            ],
            Block::NumberedHeading { number, title } => {
                vec![("number", number.as_str()), ("title", title.as_str())]
            }
            Block::NumberedEntry {
                number,
                title,
                body,
            } => vec![
                ("number", number.as_str()),
                ("title", title.as_str()),
                ("body", body.as_str()),
            ],
            Block::PricedBullet {
                brand,
                item_name,
                price,
                trailing,
            } => vec![
                ("brand", brand.as_str()),
                ("item_name", item_name.as_str()),
                ("price", price.as_str()),
                ("trailing", trailing.as_str()),
            ],
            Block::Spacer => vec![],
        }
    }
}

/// One-line outline form: `Kind(level) field="value" ...`.
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind_name())?;
        if let Some(level) = self.heading_level() {
            write!(f, "({level})")?;
        }
        for (name, value) in self.fields() {
            write!(f, " {name}={value:?}")?;
        }
        Ok(())
    }
}

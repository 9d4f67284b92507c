use super::block::Block;
use super::kinds::{Bullet, Heading, NumberedHeading, NumberedLine, PricedItem, Verdict};
use super::lines::LineRef;

/// Classifies report lines into [`Block`]s.
///
/// Rules are tried in a fixed order and the first match wins:
///
/// | # | Rule | Block |
/// |---|------|-------|
/// | 1 | exactly `##`/`###` then a space | `SectionHeading` / `SubHeading` |
/// | 2 | contains `**Verdict:` | `VerdictStatement` |
/// | 3 | `^\d+\.\s\*\*[^*]+\*\*:?$` | `NumberedHeading` |
/// | 4 | `^\d+\.\s\*\*[^*]+\*\*:` | `NumberedEntry` |
/// | 5 | `- **` bullet with a quoted name and a decimal price | `PricedBullet` |
/// | 6 | `- ` bullet whose raw line starts with `   -` | `IndentedBullet` |
/// | 7 | any other `- ` bullet | `PlainBullet` |
/// | 8 | blank after trimming | `Spacer` |
/// | 9 | anything else, verbatim | `Paragraph` |
///
/// Rules 3 and 4 both accept `1. **Title**:`; rule 3 wins. Reordering the
/// table changes output.
///
/// The classifier remembers the most recent heading text, but that state
/// never influences how later lines are classified.
#[derive(Debug, Default)]
pub struct ReportLineClassifier {
    current_section: Option<String>,
}

impl ReportLineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent `##`/`###` heading seen, if any.
    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    /// Classifies a single line. Total: every line yields a block.
    pub fn classify(&mut self, lr: &LineRef<'_>) -> Block {
        let line = lr.text;

        if let Some((level, text)) = Heading::parse(line) {
            self.current_section = Some(text.to_string());
            let text = text.to_string();
            return if level == Heading::SECTION_LEVEL {
                Block::SectionHeading { level, text }
            } else {
                Block::SubHeading { level, text }
            };
        }

        if let Some(v) = Verdict::parse(line) {
            return Block::VerdictStatement {
                prefix: v.prefix.to_string(),
                verdict: v.verdict.to_string(),
                suffix: v.suffix.to_string(),
            };
        }

        if let Some(h) = NumberedHeading::parse(line) {
            return Block::NumberedHeading {
                number: h.number.to_string(),
                title: h.title.to_string(),
            };
        }

        if let Some(e) = NumberedLine::parse(line) {
            return Block::NumberedEntry {
                number: e.number.to_string(),
                title: e.title.to_string(),
                body: e.body.to_string(),
            };
        }

        if let Some(item) = PricedItem::parse(line) {
            return Block::PricedBullet {
                brand: item.brand.to_string(),
                item_name: item.item_name.to_string(),
                price: item.price.to_string(),
                trailing: item.trailing.to_string(),
            };
        }

        if let Some(text) = Bullet::text(line) {
            let text = text.to_string();
            return if Bullet::is_nested(line) {
                Block::IndentedBullet { text }
            } else {
                Block::PlainBullet { text }
            };
        }

        if line.trim().is_empty() {
            return Block::Spacer;
        }

        Block::Paragraph {
            text: line.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify_one(line: &str) -> Block {
        ReportLineClassifier::new().classify(&LineRef {
            index: 0,
            text: line,
        })
    }

    #[rstest]
    #[case("## Outfit Analysis", "SectionHeading")]
    #[case("### Brand Identification", "SubHeading")]
    #[case("#### Too Deep", "Paragraph")]
    #[case("🏷️ **Verdict: Zara (85% confidence)**", "VerdictStatement")]
    #[case("1. **Design Elements:**", "NumberedHeading")]
    #[case("1. **Exact Match**:", "NumberedHeading")]
    #[case("2. **Fabric**: cotton", "NumberedEntry")]
    #[case(r#"- **Zara**: "Collared Keyhole Top" - $35.90"#, "PricedBullet")]
    #[case(r#"   - **Zara**: "Collared Keyhole Top" - $35.90"#, "PricedBullet")]
    #[case("   - Light pink top", "IndentedBullet")]
    #[case("- Machine wash cold", "PlainBullet")]
    #[case("    - Four-space nesting", "PlainBullet")]
    #[case("- **Zara Collection ID**: Likely spring line", "PlainBullet")]
    #[case("", "Spacer")]
    #[case(" \t ", "Spacer")]
    #[case("This versatile top can be dressed up.", "Paragraph")]
    #[case("-no space after dash", "Paragraph")]
    #[case("1. plain numbered item", "Paragraph")]
    fn rule_chain(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(classify_one(line).kind_name(), expected);
    }

    #[test]
    fn section_heading_fields() {
        assert_eq!(
            classify_one("## Brand Identification"),
            Block::SectionHeading {
                level: 2,
                text: "Brand Identification".into()
            }
        );
    }

    #[test]
    fn verdict_beats_bullet_rules() {
        let block = classify_one("- **Verdict: H&M** maybe");
        assert_eq!(
            block,
            Block::VerdictStatement {
                prefix: "- ".into(),
                verdict: "H&M".into(),
                suffix: " maybe".into(),
            }
        );
    }

    #[test]
    fn numbered_heading_wins_tie_with_entry() {
        assert_eq!(
            classify_one("4. **Premium Versions**:"),
            Block::NumberedHeading {
                number: "4".into(),
                title: "Premium Versions".into(),
            }
        );
    }

    #[test]
    fn numbered_entry_fields() {
        assert_eq!(
            classify_one("3. **Color Profile**: Soft blush pink"),
            Block::NumberedEntry {
                number: "3".into(),
                title: "Color Profile".into(),
                body: "Soft blush pink".into(),
            }
        );
    }

    #[test]
    fn indented_bullet_text_is_trimmed_of_marker() {
        assert_eq!(
            classify_one("   - Gentle cycle recommended"),
            Block::IndentedBullet {
                text: "Gentle cycle recommended".into()
            }
        );
    }

    #[test]
    fn paragraph_is_verbatim() {
        assert_eq!(
            classify_one("  indented prose  "),
            Block::Paragraph {
                text: "  indented prose  ".into()
            }
        );
    }

    #[test]
    fn headings_update_current_section() {
        let mut classifier = ReportLineClassifier::new();
        assert_eq!(classifier.current_section(), None);

        classifier.classify(&LineRef {
            index: 0,
            text: "### Care Instructions",
        });
        assert_eq!(classifier.current_section(), Some("Care Instructions"));

        let block = classifier.classify(&LineRef {
            index: 1,
            text: "- Cool iron if needed",
        });
        assert_eq!(
            block,
            Block::PlainBullet {
                text: "Cool iron if needed".into()
            }
        );
        assert_eq!(classifier.current_section(), Some("Care Instructions"));
    }
}

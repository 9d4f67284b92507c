use std::sync::OnceLock;

use regex::Regex;

use super::group;

/// Dash-bullet syntax.
pub struct Bullet;

impl Bullet {
    /// Marker a trimmed line must start with to be a bullet.
    pub const MARKER: &'static str = "- ";
    /// Raw prefix of a bullet nested one level: three spaces then `-`.
    pub const NESTED_PREFIX: &'static str = "   -";

    /// Returns the bullet text (trimmed line minus the `- ` marker).
    ///
    /// Only leading whitespace before the marker and trailing whitespace are
    /// dropped; spacing after the marker is kept.
    pub fn text(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::MARKER)
    }

    /// Whether the raw line is nested exactly one level.
    ///
    /// Deeper indentation does not match and is treated as a top-level bullet.
    pub fn is_nested(line: &str) -> bool {
        line.starts_with(Self::NESTED_PREFIX)
    }
}

/// A bullet naming a brand, a quoted item and a price.
///
/// `- **Zara**: "Collared Keyhole Top" - $35.90 - Available online`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedItem<'a> {
    /// First bolded span, or empty.
    pub brand: &'a str,
    /// First double-quoted span.
    pub item_name: &'a str,
    /// First `$<digits>.<digits>` token, dollar sign included.
    pub price: &'a str,
    /// Text after the first price token, up to any repeat of that token.
    pub trailing: &'a str,
}

impl<'a> PricedItem<'a> {
    /// Opener a trimmed line must start with to be a priced bullet.
    pub const OPENER: &'static str = "- **";

    /// Parses a priced bullet. The line must open with [`Self::OPENER`] and
    /// contain both a quoted item name and a decimal price.
    pub fn parse(line: &'a str) -> Option<Self> {
        static BOLD_RE: OnceLock<Regex> = OnceLock::new();
        static QUOTED_RE: OnceLock<Regex> = OnceLock::new();
        static PRICE_RE: OnceLock<Regex> = OnceLock::new();
        let bold_re =
            BOLD_RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid bold regex"));
        let quoted_re =
            QUOTED_RE.get_or_init(|| Regex::new(r#""([^"]+)""#).expect("Invalid quote regex"));
        let price_re =
            PRICE_RE.get_or_init(|| Regex::new(r"\$[0-9]+\.[0-9]+").expect("Invalid price regex"));

        if !line.trim().starts_with(Self::OPENER) {
            return None;
        }
        let item = quoted_re.captures(line)?;
        let price = price_re.find(line)?;
        let brand = bold_re.captures(line);
        let after_price = &line[price.end()..];
        let trailing = after_price
            .split(price.as_str())
            .next()
            .unwrap_or_default();

        Some(Self {
            brand: brand.as_ref().map_or("", |caps| group(caps, 1)),
            item_name: group(&item, 1),
            price: price.as_str(),
            trailing,
        })
    }
}

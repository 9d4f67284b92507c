use std::sync::OnceLock;

use regex::Regex;

use super::group;

/// `1. **Title**` or `1. **Title**:` with nothing else on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedHeading<'a> {
    pub number: &'a str,
    pub title: &'a str,
}

/// `1. **Title**: body`, the numbered form that carries descriptive text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedLine<'a> {
    pub number: &'a str,
    pub title: &'a str,
    /// Text after the colon, trimmed. May be empty.
    pub body: &'a str,
}

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.\s\*\*([^*]+)\*\*:?$").expect("Invalid numbered heading regex")
    })
}

fn entry_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.\s\*\*([^*]+)\*\*:(.*)$").expect("Invalid numbered entry regex")
    })
}

impl<'a> NumberedHeading<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = heading_re().captures(line)?;
        Some(Self {
            number: group(&caps, 1),
            title: group(&caps, 2),
        })
    }
}

impl<'a> NumberedLine<'a> {
    /// Matches every line [`NumberedHeading::parse`] accepts with a trailing
    /// colon too, so the heading form must be tried first.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = entry_re().captures(line)?;
        Some(Self {
            number: group(&caps, 1),
            title: group(&caps, 2),
            body: group(&caps, 3).trim(),
        })
    }
}

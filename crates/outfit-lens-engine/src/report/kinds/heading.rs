/// ATX heading syntax, limited to the two levels reports use.
///
/// All heading-related syntax knowledge lives here, not in the classifier.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    /// Level produced by `## `.
    pub const SECTION_LEVEL: u8 = 2;
    /// Level produced by `### `.
    pub const SUB_LEVEL: u8 = 3;

    /// Parses a heading line, returning `(level, text)`.
    ///
    /// The level is the exact count of leading `#` characters, which must be
    /// followed by a space. Only levels 2 and 3 are headings; `#` and `####`
    /// and deeper are not. The text is trimmed.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARKER).count();
        let text = line[hashes..].strip_prefix(' ')?;
        let level = u8::try_from(hashes).ok()?;
        match level {
            Self::SECTION_LEVEL | Self::SUB_LEVEL => Some((level, text.trim())),
            _ => None,
        }
    }
}

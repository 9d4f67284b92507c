/// A verdict line split around its bolded `**Verdict: ...**` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict<'a> {
    /// Text before the marker, verbatim (often an emoji).
    pub prefix: &'a str,
    /// Text between the marker and the next `**`, trimmed.
    pub verdict: &'a str,
    /// Text between the closing `**` and the next `**`; empty when missing.
    pub suffix: &'a str,
}

impl<'a> Verdict<'a> {
    /// The literal marker that identifies a verdict line.
    pub const MARKER: &'static str = "**Verdict:";
    /// Bold delimiter that ends the verdict and the suffix.
    const BOLD: &'static str = "**";

    /// Splits a line containing [`Self::MARKER`].
    ///
    /// The first marker occurrence wins. The text after it is split on `**`:
    /// the first segment is the verdict, the second the suffix, and any later
    /// segments are dropped.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (prefix, rest) = line.split_once(Self::MARKER)?;
        let mut segments = rest.split(Self::BOLD);
        let verdict = segments.next().unwrap_or_default().trim();
        let suffix = segments.next().unwrap_or_default();
        Some(Self {
            prefix,
            verdict,
            suffix,
        })
    }
}

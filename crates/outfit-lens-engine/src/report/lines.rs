/// A reference to a single line of a report with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Zero-based index of the line in the report.
    pub index: usize,
    /// Line text without its `\n` terminator. A `\r` from CRLF input is kept.
    pub text: &'a str,
}

/// Returns an iterator over the `\n`-delimited lines of a report.
///
/// Unlike [`str::lines`], empty input yields one empty line and a trailing
/// newline yields a trailing empty line, so the line count is always
/// `text.matches('\n').count() + 1`.
pub fn lines_with_index(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(index, text)| LineRef { index, text })
}

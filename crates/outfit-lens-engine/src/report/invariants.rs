use super::block::Block;
use super::lines::lines_with_index;

/// Validates classifier output against its source text.
///
/// Asserts that:
/// - There is exactly one block per `\n`-delimited line
/// - Every `Paragraph` reproduces its source line verbatim
/// - Only blank lines produce `Spacer`
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, blocks: &[Block]) {
    let lines: Vec<_> = lines_with_index(text).collect();
    assert_eq!(
        lines.len(),
        blocks.len(),
        "block count {} does not match line count {}",
        blocks.len(),
        lines.len()
    );

    for (lr, block) in lines.iter().zip(blocks) {
        match block {
            Block::Paragraph { text } => assert_eq!(
                text, lr.text,
                "paragraph on line {} is not verbatim",
                lr.index
            ),
            Block::Spacer => assert!(
                lr.text.trim().is_empty(),
                "spacer on non-blank line {}: {:?}",
                lr.index,
                lr.text
            ),
            _ => {}
        }
    }
}

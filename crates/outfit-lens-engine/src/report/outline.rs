use super::block::Block;

/// Renders blocks one per line as `<line>: <block>`.
///
/// Line numbers are 1-based to match what editors show.
pub fn outline(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        out.push_str(&format!("{}: {block}\n", i + 1));
    }
    out
}

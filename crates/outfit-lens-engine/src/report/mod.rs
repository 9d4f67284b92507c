//! # Report Classification
//!
//! Turns the free-text report returned by the vision model into a flat
//! sequence of typed [`Block`]s, one per line.
//!
//! ## Modules
//!
//! - **`lines`**: splits a report on `\n` without merging or dropping lines
//! - **`kinds`**: syntax owned by each block kind (headings, verdicts,
//!   numbered lines, bullets) with its constants and regexes
//! - **`classify`**: `ReportLineClassifier` runs the ordered rule chain
//! - **`block`**: the `Block` enum consumers match on
//! - **`outline`**: one-line-per-block text form for terminals and snapshots
//! - **`invariants`**: assertions on classifier output used by tests
//!
//! ## Key Invariants
//!
//! - Exactly one block per input line, in input order
//! - Classification is total; unrecognised lines become `Paragraph`
//! - No state survives between calls to [`classify`]

pub mod block;
pub mod classify;
pub mod invariants;
pub mod kinds;
pub mod lines;
pub mod outline;

#[cfg(test)]
mod tests;

pub use block::Block;
pub use classify::ReportLineClassifier;
pub use lines::{LineRef, lines_with_index};
pub use outline::outline;

/// Classifies every line of `text`.
///
/// Empty input is a single empty line and yields one `Spacer`.
pub fn classify(text: &str) -> Vec<Block> {
    let mut classifier = ReportLineClassifier::new();
    let blocks: Vec<Block> = lines_with_index(text)
        .map(|lr| classifier.classify(&lr))
        .collect();
    log::debug!("classified {} report lines", blocks.len());
    blocks
}

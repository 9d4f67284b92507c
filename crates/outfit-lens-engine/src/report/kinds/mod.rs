pub mod bullet;
pub mod heading;
pub mod numbered;
pub mod verdict;

pub use bullet::{Bullet, PricedItem};
pub use heading::Heading;
pub use numbered::{NumberedHeading, NumberedLine};
pub use verdict::Verdict;

/// Text of capture group `i`, or `""` when the group did not participate.
pub(crate) fn group<'t>(caps: &regex::Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

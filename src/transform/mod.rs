//! Normalization, pattern expansion and matching of rack spaces.

mod matcher;
mod normalize;
mod pattern;

pub use matcher::*;
pub use normalize::*;
pub use pattern::*;

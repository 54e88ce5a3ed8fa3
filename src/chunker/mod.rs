mod splitter;


pub use splitter::{partition, Part};

/// 1-based position of a part in the output
pub type PartIndex = usize;

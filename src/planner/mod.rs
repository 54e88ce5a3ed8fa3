mod plan;
mod policy;


pub use plan::PartPlan;
pub use policy::{paragraph_part_count, WordPolicy};

/// Target number of words per part in word mode
pub const DEFAULT_TARGET_WORDS: usize = 2500;

/// Fewest parts a word-mode run produces
pub const DEFAULT_MIN_PARTS: usize = 2;

/// Most parts a word-mode run produces
pub const DEFAULT_MAX_PARTS: usize = 10;

/// Paragraph count at which paragraph mode moves from 2 to 3 parts
pub const PARAGRAPH_MEDIUM_THRESHOLD: usize = 50;

/// Paragraph count at which paragraph mode moves from 3 to 4 parts
pub const PARAGRAPH_LARGE_THRESHOLD: usize = 150;

/// Upper bound of the paragraph step function
pub const PARAGRAPH_MAX_PARTS: usize = 4;

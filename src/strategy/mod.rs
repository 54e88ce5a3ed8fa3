mod paragraphs;
mod words;


pub use paragraphs::ParagraphStrategy;
pub use words::WordStrategy;

use crate::planner::PartPlan;
use serde::Serialize;

/// How a transcript is broken into atomic units, counted into parts, and
/// written back out
pub trait ChunkStrategy {
    /// Human-readable name of the unit ("words", "paragraphs")
    fn unit_name(&self) -> &'static str;

    /// Extract the ordered unit sequence from normalized text
    fn units<'a>(&self, normalized: &'a str) -> Vec<&'a str>;

    /// Decide how many parts `total` units become
    fn plan(&self, total: usize) -> PartPlan;

    /// Serialize one group of units back into text
    fn join(&self, units: &[&str]) -> String;
}

/// Selects which strategy a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Whitespace-delimited words, joined with single spaces
    #[default]
    Words,
    /// Blank-line separated blocks, joined with a blank line
    Paragraphs,
}

impl Mode {
    pub fn strategy(self) -> Box<dyn ChunkStrategy> {
        match self {
            Mode::Words => Box::new(WordStrategy::default()),
            Mode::Paragraphs => Box::new(ParagraphStrategy),
        }
    }
}

/// Collapse `\r\n` and lone `\r` into `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

use super::ChunkStrategy;
use crate::planner::{paragraph_part_count, PartPlan, PARAGRAPH_MAX_PARTS};

/// Blank-line separator between paragraph blocks (after normalization)
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Splits on blank lines and sizes parts with the paragraph step function
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphStrategy;

impl ChunkStrategy for ParagraphStrategy {
    fn unit_name(&self) -> &'static str {
        "paragraphs"
    }

    fn units<'a>(&self, normalized: &'a str) -> Vec<&'a str> {
        normalized
            .split(PARAGRAPH_SEPARATOR)
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .collect()
    }

    fn plan(&self, total: usize) -> PartPlan {
        let parts = paragraph_part_count(total);
        PartPlan {
            parts,
            estimated: parts,
            max_parts: PARAGRAPH_MAX_PARTS,
            target_size: None,
        }
    }

    fn join(&self, units: &[&str]) -> String {
        units.join(PARAGRAPH_SEPARATOR)
    }
}

use super::ChunkStrategy;
use crate::planner::{PartPlan, WordPolicy};

/// Splits on whitespace runs and sizes parts by word count
#[derive(Debug, Clone, Copy, Default)]
pub struct WordStrategy {
    pub policy: WordPolicy,
}

impl ChunkStrategy for WordStrategy {
    fn unit_name(&self) -> &'static str {
        "words"
    }

    fn units<'a>(&self, normalized: &'a str) -> Vec<&'a str> {
        normalized.split_whitespace().collect()
    }

    fn plan(&self, total: usize) -> PartPlan {
        self.policy.plan(total)
    }

    fn join(&self, units: &[&str]) -> String {
        units.join(" ")
    }
}

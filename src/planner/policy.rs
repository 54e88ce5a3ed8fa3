use super::{
    PartPlan, DEFAULT_MAX_PARTS, DEFAULT_MIN_PARTS, DEFAULT_TARGET_WORDS,
    PARAGRAPH_LARGE_THRESHOLD, PARAGRAPH_MAX_PARTS, PARAGRAPH_MEDIUM_THRESHOLD,
};

/// Word-count policy: scale the part count with volume, then clamp it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPolicy {
    /// Desired words per part. Zero is treated as one.
    pub target_size: usize,
    pub min_parts: usize,
    pub max_parts: usize,
}

impl Default for WordPolicy {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_WORDS,
            min_parts: DEFAULT_MIN_PARTS,
            max_parts: DEFAULT_MAX_PARTS,
        }
    }
}

impl WordPolicy {
    /// Plan the part count for `total` words:
    /// - estimated = ceil(total / target_size), 0 when total is 0
    /// - parts = max(min_parts, min(estimated, max_parts)), never below 1
    pub fn plan(&self, total: usize) -> PartPlan {
        let estimated = total.div_ceil(self.target_size.max(1));
        let parts = estimated.min(self.max_parts).max(self.min_parts).max(1);

        PartPlan {
            parts,
            estimated,
            max_parts: self.max_parts,
            target_size: Some(self.target_size),
        }
    }
}

/// Paragraph-count policy: a fixed step function of volume
pub fn paragraph_part_count(total: usize) -> usize {
    if total < PARAGRAPH_MEDIUM_THRESHOLD {
        2
    } else if total < PARAGRAPH_LARGE_THRESHOLD {
        3
    } else {
        PARAGRAPH_MAX_PARTS
    }
}

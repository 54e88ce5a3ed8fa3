use serde::Serialize;

/// Outcome of part-count planning, kept around for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartPlan {
    /// Number of parts the partitioner will produce (always >= 1)
    pub parts: usize,
    /// Raw estimate before clamping
    pub estimated: usize,
    /// Configured ceiling on the part count
    pub max_parts: usize,
    /// Desired units per part, only meaningful in word mode
    pub target_size: Option<usize>,
}

use super::PartIndex;

/// One contiguous run of units destined for a single output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part<'a, T> {
    /// 1-based ordinal of this part
    pub index: PartIndex,
    /// Units in source order
    pub units: &'a [T],
}

impl<T> Part<'_, T> {
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Split `units` into exactly `parts` contiguous groups of near-equal size:
/// - base = len / parts, remainder = len % parts
/// - the first `remainder` groups hold base + 1 units, the rest hold base
/// - groups keep source order, so concatenating them reproduces `units`
///
/// When `parts` exceeds `units.len()` the trailing groups are empty.
/// A `parts` of zero produces no groups.
pub fn partition<T>(units: &[T], parts: usize) -> Vec<Part<'_, T>> {
    if parts == 0 {
        return vec![];
    }

    let base = units.len() / parts;
    let remainder = units.len() % parts;

    let mut groups = Vec::with_capacity(parts);
    let mut rest = units;

    for i in 0..parts {
        let size = base + usize::from(i < remainder);
        let (head, tail) = rest.split_at(size);
        groups.push(Part {
            index: i + 1,
            units: head,
        });
        rest = tail;
    }

    groups
}

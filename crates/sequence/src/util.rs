use std::ops::Range;

/// Resolves `(start, delete_count)` against a sequence of length `len`.
///
/// - `start` is clamped to `[0, len]`.
/// - The end boundary `start + delete_count` is clamped to `[start, len]`,
///   so a negative count removes nothing.
#[inline]
pub(crate) fn clamp_splice_range(len: usize, start: isize, delete_count: isize) -> Range<usize> {
    let start = clamp_index(len, start);
    let end = if delete_count <= 0 {
        start
    } else {
        start.saturating_add(delete_count as usize).min(len)
    };
    start..end
}

#[inline(always)]
fn clamp_index(len: usize, index: isize) -> usize {
    if index <= 0 {
        0
    } else {
        (index as usize).min(len)
    }
}

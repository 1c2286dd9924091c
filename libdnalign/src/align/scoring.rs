pub const MATCH_SCORE: isize = 1;
pub const MISMATCH_SCORE: isize = -1;
pub const GAP_SCORE: isize = -2;

/// The score contribution of a single aligned column, where `None` is a gap.
///
/// A column with a gap on both sides is not a legal alignment column, but it
/// is scored as a gap so that callers validating a result can still sum it.
pub fn column_score<T: PartialEq>(top: Option<&T>, bottom: Option<&T>) -> isize {
    match (top, bottom) {
        (Some(a), Some(b)) if a == b => MATCH_SCORE,
        (Some(_), Some(_)) => MISMATCH_SCORE,
        _ => GAP_SCORE,
    }
}

/// The score of aligning `length` symbols entirely against gaps.
pub fn all_gap_score(length: usize) -> isize {
    length as isize * GAP_SCORE
}

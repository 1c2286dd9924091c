use super::scoring::{all_gap_score, GAP_SCORE, MATCH_SCORE, MISMATCH_SCORE};
use crate::structs::AlignmentResult;

/// Compute an optimal alignment with the plain three-way recursion and no
/// memo table.
///
/// This takes exponential time, so it is only practical for short
/// sequences. It makes the same choices as [`align`](super::align) and
/// exists to check that memoization never changes a result.
pub fn align_naive<T: PartialEq + Clone>(seq_1: &[T], seq_2: &[T]) -> AlignmentResult<T> {
    let mut result = align_naive_reversed(seq_1, seq_2);
    result.top.reverse();
    result.bottom.reverse();
    result
}

/// The rows are built back to front, so prepending a column is a push.
fn align_naive_reversed<T: PartialEq + Clone>(seq_1: &[T], seq_2: &[T]) -> AlignmentResult<T> {
    let ((head_1, tail_1), (head_2, tail_2)) = match (seq_1.split_first(), seq_2.split_first()) {
        (Some(split_1), Some(split_2)) => (split_1, split_2),
        (None, _) => {
            return AlignmentResult {
                top: vec![None; seq_2.len()],
                bottom: seq_2.iter().rev().cloned().map(Some).collect(),
                score: all_gap_score(seq_2.len()),
            }
        }
        (_, None) => {
            return AlignmentResult {
                top: seq_1.iter().rev().cloned().map(Some).collect(),
                bottom: vec![None; seq_1.len()],
                score: all_gap_score(seq_1.len()),
            }
        }
    };

    let mut best = align_naive_reversed(tail_1, tail_2);
    best.top.push(Some(head_1.clone()));
    best.bottom.push(Some(head_2.clone()));

    if head_1 == head_2 {
        best.score += MATCH_SCORE;
        return best;
    }
    best.score += MISMATCH_SCORE;

    let mut left = align_naive_reversed(seq_1, tail_2);
    left.score += GAP_SCORE;
    if left.score > best.score {
        left.top.push(None);
        left.bottom.push(Some(head_2.clone()));
        best = left;
    }

    let mut up = align_naive_reversed(tail_1, seq_2);
    up.score += GAP_SCORE;
    if up.score > best.score {
        up.top.push(Some(head_1.clone()));
        up.bottom.push(None);
        best = up;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_naive() {
        let result = align_naive(b"GCCAA", b"GTCCTAA");
        assert_eq!(result.top_string(), "G CC AA");
        assert_eq!(result.bottom_string(), "GTCCTAA");
        assert_eq!(result.score, 1);

        let result = align_naive(b"", b"GC");
        assert_eq!(result.top_string(), "  ");
        assert_eq!(result.bottom_string(), "GC");
        assert_eq!(result.score, -4);
    }
}

use super::scoring::{GAP_SCORE, MATCH_SCORE, MISMATCH_SCORE};

/// Compute the optimal global alignment score by filling the full
/// dynamic programming table bottom-up.
///
/// This uses the same scoring constants as [`align`](super::align) but
/// shares none of its code, so it serves as an independent check that the
/// memoized recurrence finds an optimal score.
pub fn needleman_wunsch_score<T: PartialEq>(seq_1: &[T], seq_2: &[T]) -> isize {
    let mut dp_matrix: Vec<Vec<isize>> = vec![vec![0; seq_2.len() + 1]; seq_1.len() + 1];

    for seq_2_idx in 0..=seq_2.len() {
        dp_matrix[0][seq_2_idx] = (seq_2_idx as isize) * GAP_SCORE;
    }

    for seq_1_idx in 1..=seq_1.len() {
        let seq_1_residue = &seq_1[seq_1_idx - 1];
        dp_matrix[seq_1_idx][0] = (seq_1_idx as isize) * GAP_SCORE;

        for seq_2_idx in 1..=seq_2.len() {
            let seq_2_residue = &seq_2[seq_2_idx - 1];
            let match_score = if seq_1_residue == seq_2_residue {
                MATCH_SCORE
            } else {
                MISMATCH_SCORE
            };
            let diag_score = dp_matrix[seq_1_idx - 1][seq_2_idx - 1] + match_score;
            let up_score = dp_matrix[seq_1_idx - 1][seq_2_idx] + GAP_SCORE;
            let left_score = dp_matrix[seq_1_idx][seq_2_idx - 1] + GAP_SCORE;

            dp_matrix[seq_1_idx][seq_2_idx] = diag_score.max(up_score.max(left_score));
        }
    }

    dp_matrix[seq_1.len()][seq_2.len()]
}

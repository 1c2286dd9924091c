use std::collections::HashMap;
use std::iter::repeat;

use log::debug;

use super::scoring::{all_gap_score, GAP_SCORE, MATCH_SCORE, MISMATCH_SCORE};
use crate::structs::AlignmentResult;

/// The continuation that was chosen for a suffix pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleTraceStep {
    /// At least one suffix is empty, so the rest is padded with gaps
    End,
    /// Both heads are consumed and aligned to each other
    Diagonal,
    /// The head of the second suffix is aligned to a gap
    Left,
    /// The head of the first suffix is aligned to a gap
    Up,
}

/// The optimal score of a suffix pair and the step that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoEntry {
    pub score: isize,
    pub step: SimpleTraceStep,
}

/// Completed sub-alignments, keyed by the start indices of the suffix pair
/// `(seq_1[seq_1_idx..], seq_2[seq_2_idx..])`.
///
/// Entries only ever hold a score and a step, never the aligned rows, so a
/// result handed to a caller can't alias anything in the table.
#[derive(Debug, Default)]
pub struct MemoTable {
    entries: HashMap<(usize, usize), MemoEntry>,
    hits: usize,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of suffix pairs that have been solved.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, seq_1_idx: usize, seq_2_idx: usize) -> Option<&MemoEntry> {
        self.entries.get(&(seq_1_idx, seq_2_idx))
    }

    /// The number of sub-alignment requests that were served from the table.
    pub fn hits(&self) -> usize {
        self.hits
    }

    fn contains(&self, key: (usize, usize)) -> bool {
        self.entries.contains_key(&key)
    }

    fn score(&self, key: (usize, usize)) -> isize {
        self.entries[&key].score
    }

    fn step(&self, key: (usize, usize)) -> SimpleTraceStep {
        self.entries[&key].step
    }
}

/// A pending suffix pair on the work stack. A frame is visited twice: once
/// to request its sub-alignments, and once more to combine them.
struct Frame {
    key: (usize, usize),
    expanded: bool,
}

/// Computes optimal alignments of two fixed sequences.
///
/// The recurrence is evaluated top-down from the full pair of sequences, so
/// only suffix pairs reachable from `(0, 0)` are ever solved. The call graph
/// is driven by an explicit work stack, which keeps the native stack depth
/// constant no matter how long the sequences are.
pub struct Aligner<'a, T> {
    seq_1: &'a [T],
    seq_2: &'a [T],
    memo: MemoTable,
}

impl<'a, T: PartialEq + Clone> Aligner<'a, T> {
    pub fn new(seq_1: &'a [T], seq_2: &'a [T]) -> Self {
        Self {
            seq_1,
            seq_2,
            memo: MemoTable::new(),
        }
    }

    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }

    /// Align the two full sequences.
    pub fn align(&mut self) -> AlignmentResult<T> {
        self.align_from(0, 0)
    }

    /// Align the suffixes `seq_1[seq_1_idx..]` and `seq_2[seq_2_idx..]`,
    /// reusing everything already in the memo table.
    ///
    /// # Panics
    ///
    /// Panics if either index is past the end of its sequence.
    pub fn align_from(&mut self, seq_1_idx: usize, seq_2_idx: usize) -> AlignmentResult<T> {
        assert!(
            seq_1_idx <= self.seq_1.len() && seq_2_idx <= self.seq_2.len(),
            "suffix start ({seq_1_idx}, {seq_2_idx}) is out of bounds for sequences of length ({}, {})",
            self.seq_1.len(),
            self.seq_2.len()
        );

        self.solve((seq_1_idx, seq_2_idx));

        debug!(
            "aligned {}x{} symbols: {} memo entries, {} memo hits",
            self.seq_1.len() - seq_1_idx,
            self.seq_2.len() - seq_2_idx,
            self.memo.len(),
            self.memo.hits()
        );

        self.traceback((seq_1_idx, seq_2_idx))
    }

    /// Fill in the memo table for `root` and every suffix pair it depends on.
    fn solve(&mut self, root: (usize, usize)) {
        let mut stack = vec![Frame {
            key: root,
            expanded: false,
        }];

        while let Some(frame) = stack.last_mut() {
            let key = frame.key;

            if frame.expanded {
                let entry = self.combine(key);
                self.memo.entries.insert(key, entry);
                stack.pop();
                continue;
            }

            if self.memo.contains(key) {
                self.memo.hits += 1;
                stack.pop();
                continue;
            }

            let (seq_1_idx, seq_2_idx) = key;
            let seq_1_remaining = self.seq_1.len() - seq_1_idx;
            let seq_2_remaining = self.seq_2.len() - seq_2_idx;

            if seq_1_remaining == 0 || seq_2_remaining == 0 {
                let entry = MemoEntry {
                    score: all_gap_score(seq_1_remaining + seq_2_remaining),
                    step: SimpleTraceStep::End,
                };
                self.memo.entries.insert(key, entry);
                stack.pop();
                continue;
            }

            frame.expanded = true;

            // a match is never worth skipping, so it only needs the diagonal
            let dependencies = if self.seq_1[seq_1_idx] == self.seq_2[seq_2_idx] {
                vec![(seq_1_idx + 1, seq_2_idx + 1)]
            } else {
                vec![
                    (seq_1_idx + 1, seq_2_idx + 1),
                    (seq_1_idx, seq_2_idx + 1),
                    (seq_1_idx + 1, seq_2_idx),
                ]
            };

            // pushed in reverse so they are solved in candidate order
            for dependency in dependencies.into_iter().rev() {
                if self.memo.contains(dependency) {
                    self.memo.hits += 1;
                } else {
                    stack.push(Frame {
                        key: dependency,
                        expanded: false,
                    });
                }
            }
        }
    }

    /// Pick the best continuation for a suffix pair whose
    /// sub-alignments are all in the memo table.
    ///
    /// Candidates are considered in the order diagonal, left, up, and a later
    /// candidate only replaces the best so far if it scores strictly higher.
    fn combine(&self, key: (usize, usize)) -> MemoEntry {
        let (seq_1_idx, seq_2_idx) = key;
        let diagonal_score = self.memo.score((seq_1_idx + 1, seq_2_idx + 1));

        if self.seq_1[seq_1_idx] == self.seq_2[seq_2_idx] {
            return MemoEntry {
                score: diagonal_score + MATCH_SCORE,
                step: SimpleTraceStep::Diagonal,
            };
        }

        let mut best = MemoEntry {
            score: diagonal_score + MISMATCH_SCORE,
            step: SimpleTraceStep::Diagonal,
        };

        let left_score = self.memo.score((seq_1_idx, seq_2_idx + 1)) + GAP_SCORE;
        if left_score > best.score {
            best = MemoEntry {
                score: left_score,
                step: SimpleTraceStep::Left,
            };
        }

        let up_score = self.memo.score((seq_1_idx + 1, seq_2_idx)) + GAP_SCORE;
        if up_score > best.score {
            best = MemoEntry {
                score: up_score,
                step: SimpleTraceStep::Up,
            };
        }

        best
    }

    /// Follow the chosen steps forward from `root`, appending to the rows.
    fn traceback(&self, root: (usize, usize)) -> AlignmentResult<T> {
        let (mut seq_1_idx, mut seq_2_idx) = root;
        let capacity = (self.seq_1.len() - seq_1_idx) + (self.seq_2.len() - seq_2_idx);
        let mut top: Vec<Option<T>> = Vec::with_capacity(capacity);
        let mut bottom: Vec<Option<T>> = Vec::with_capacity(capacity);

        loop {
            match self.memo.step((seq_1_idx, seq_2_idx)) {
                SimpleTraceStep::End => {
                    // at most one of these suffixes is non-empty
                    let seq_1_rest = &self.seq_1[seq_1_idx..];
                    let seq_2_rest = &self.seq_2[seq_2_idx..];
                    top.extend(seq_1_rest.iter().cloned().map(Some));
                    top.extend(repeat(None).take(seq_2_rest.len()));
                    bottom.extend(repeat(None).take(seq_1_rest.len()));
                    bottom.extend(seq_2_rest.iter().cloned().map(Some));
                    break;
                }
                SimpleTraceStep::Diagonal => {
                    top.push(Some(self.seq_1[seq_1_idx].clone()));
                    bottom.push(Some(self.seq_2[seq_2_idx].clone()));
                    seq_1_idx += 1;
                    seq_2_idx += 1;
                }
                SimpleTraceStep::Left => {
                    top.push(None);
                    bottom.push(Some(self.seq_2[seq_2_idx].clone()));
                    seq_2_idx += 1;
                }
                SimpleTraceStep::Up => {
                    top.push(Some(self.seq_1[seq_1_idx].clone()));
                    bottom.push(None);
                    seq_1_idx += 1;
                }
            }
        }

        AlignmentResult {
            top,
            bottom,
            score: self.memo.score(root),
        }
    }
}

/// Compute an optimal alignment of two sequences.
///
/// Ties between equally good continuations are broken in a fixed order, so
/// the returned rows are fully determined by the inputs.
pub fn align<T: PartialEq + Clone>(seq_1: &[T], seq_2: &[T]) -> AlignmentResult<T> {
    Aligner::new(seq_1, seq_2).align()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{align_naive, needleman_wunsch_score};
    use crate::generate::random_dna_strand;

    use assert2::{assert, check};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn check_vector(seq_1: &str, seq_2: &str, top: &str, bottom: &str, score: isize) {
        let result = align(seq_1.as_bytes(), seq_2.as_bytes());
        check!(result.top_string() == top);
        check!(result.bottom_string() == bottom);
        check!(result.score == score);
    }

    fn random_pairs(seed: u64, count: usize, max_length: usize) -> Vec<(Vec<u8>, Vec<u8>)> {
        let mut rng = Pcg64::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let seq_1 = random_dna_strand(&mut rng, 1, max_length).unwrap();
                let seq_2 = random_dna_strand(&mut rng, 1, max_length).unwrap();
                (seq_1.as_bytes().to_vec(), seq_2.as_bytes().to_vec())
            })
            .collect()
    }

    #[test]
    fn test_known_alignments() {
        check_vector("", "GC", "  ", "GC", -4);
        check_vector("GACG", "", "GACG", "    ", -8);
        check_vector("ACAG", "ACG", "ACAG", "AC G", 1);
        check_vector("ACGACG", "ACAGACAG", "AC GAC G", "ACAGACAG", 2);
        check_vector("GCCAA", "GTCCTAA", "G CC AA", "GTCCTAA", 1);
    }

    #[test]
    fn test_both_empty() {
        let result = align::<u8>(&[], &[]);
        check!(result.is_empty());
        check!(result.score == 0);
    }

    #[test]
    fn test_ties_prefer_earlier_candidates() {
        // every candidate ties at -2; the diagonal mismatch is kept
        check_vector("AT", "TA", "AT", "TA", -2);
        check_vector("A", "T", "A", "T", -1);
    }

    #[test]
    fn test_alphabet_agnostic() {
        let seq_1 = [3u32, 1, 4, 1, 5];
        let seq_2 = [3u32, 4, 1, 5];
        let result = align(&seq_1, &seq_2);

        check!(result.score == 2);
        check!(result.top == vec![Some(3), Some(1), Some(4), Some(1), Some(5)]);
        check!(result.bottom == vec![Some(3), None, Some(4), Some(1), Some(5)]);
    }

    #[test]
    fn test_base_cases() {
        for strand in ["A", "GATTACA", "CCCCCCCCCC"] {
            let bytes = strand.as_bytes();
            let expected_score = -2 * strand.len() as isize;

            let result = align(&[], bytes);
            check!(result.top_string() == " ".repeat(strand.len()));
            check!(result.bottom_string() == strand);
            check!(result.score == expected_score);

            let result = align(bytes, &[]);
            check!(result.top_string() == strand);
            check!(result.bottom_string() == " ".repeat(strand.len()));
            check!(result.score == expected_score);
        }
    }

    #[test]
    fn test_results_are_well_formed() {
        for (seq_1, seq_2) in random_pairs(1, 200, 30) {
            let result = align(&seq_1, &seq_2);
            assert!(result.is_valid());
            check!(result.ungapped_top() == seq_1);
            check!(result.ungapped_bottom() == seq_2);
        }
    }

    #[test]
    fn test_symmetric_score() {
        for (seq_1, seq_2) in random_pairs(2, 200, 30) {
            check!(align(&seq_1, &seq_2).score == align(&seq_2, &seq_1).score);
        }
    }

    #[test]
    fn test_score_bounds() {
        for (seq_1, seq_2) in random_pairs(3, 200, 30) {
            let score = align(&seq_1, &seq_2).score;
            let shorter = seq_1.len().min(seq_2.len()) as isize;
            let longer = seq_1.len().max(seq_2.len()) as isize;
            check!(score <= shorter);
            check!(score >= -2 * longer);
        }
    }

    #[test]
    fn test_memoization_is_transparent() {
        for (seq_1, seq_2) in random_pairs(4, 300, 7) {
            check!(align(&seq_1, &seq_2) == align_naive(&seq_1, &seq_2));
        }
    }

    #[test]
    fn test_score_is_optimal() {
        for (seq_1, seq_2) in random_pairs(5, 100, 60) {
            check!(align(&seq_1, &seq_2).score == needleman_wunsch_score(&seq_1, &seq_2));
        }
    }

    #[test]
    fn test_memo_table_size() {
        let seq_1 = b"ACGTTGCAAC";
        let seq_2 = b"TTGACGGA";
        let mut aligner = Aligner::new(seq_1, seq_2);
        let result = aligner.align();

        check!(aligner.memo().len() <= (seq_1.len() + 1) * (seq_2.len() + 1));
        check!(aligner.memo().hits() > 0);
        check!(aligner.memo().get(0, 0).map(|e| e.score) == Some(result.score));
        check!(aligner.memo().get(seq_1.len() + 1, 0).is_none());
    }

    #[test]
    fn test_matching_heads_skip_other_candidates() {
        // identical strands only ever follow the diagonal
        let strand = b"GATTACA";
        let mut aligner = Aligner::new(strand, strand);
        let result = aligner.align();

        check!(result.score == strand.len() as isize);
        check!(aligner.memo().len() == strand.len() + 1);
        check!(aligner.memo().hits() == 0);
    }

    #[test]
    fn test_repeated_requests_reuse_the_table() {
        let (seq_1, seq_2) = (b"GCCAATGCA".to_vec(), b"GTCCTAAGA".to_vec());
        let mut aligner = Aligner::new(&seq_1, &seq_2);

        let first = aligner.align();
        let entries = aligner.memo().len();
        let second = aligner.align();

        check!(first == second);
        check!(aligner.memo().len() == entries);
    }

    #[test]
    fn test_align_from_matches_fresh_suffix_alignment() {
        let (seq_1, seq_2) = (b"ACGACGTTAG".to_vec(), b"ACAGACAGTA".to_vec());
        let mut aligner = Aligner::new(&seq_1, &seq_2);
        aligner.align();

        for seq_1_idx in 0..=seq_1.len() {
            for seq_2_idx in 0..=seq_2.len() {
                check!(
                    aligner.align_from(seq_1_idx, seq_2_idx)
                        == align(&seq_1[seq_1_idx..], &seq_2[seq_2_idx..])
                );
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_align_from_out_of_bounds() {
        let mut aligner = Aligner::new(b"ACG", b"AC");
        aligner.align_from(4, 0);
    }

    #[test]
    fn test_long_sequences_do_not_overflow_the_stack() {
        let mut rng = Pcg64::seed_from_u64(6);
        let seq_1 = random_dna_strand(&mut rng, 20_000, 20_000).unwrap();
        let seq_2 = b"GATTACA";

        let result = align(seq_1.as_bytes(), seq_2);
        assert!(result.is_valid());
        check!(result.len() >= seq_1.len());
    }
}

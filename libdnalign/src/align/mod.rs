mod scoring;
pub use scoring::{all_gap_score, column_score, GAP_SCORE, MATCH_SCORE, MISMATCH_SCORE};

mod memoized;
pub use memoized::{align, Aligner, MemoEntry, MemoTable, SimpleTraceStep};

mod naive;
pub use naive::align_naive;

mod needleman_wunsch;
pub use needleman_wunsch::needleman_wunsch_score;

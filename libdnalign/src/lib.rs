//! Optimal pairwise alignment of DNA strands.
//!
//! The core is [`align::align`], which solves the classic three-way
//! match/mismatch/gap recurrence top-down with a memo table of solved suffix
//! pairs. Matches score +1, mismatches -1, and every gap column -2.

pub mod align;
pub mod alphabet;
pub mod generate;
pub mod output;
pub mod structs;

mod util;

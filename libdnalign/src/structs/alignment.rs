use crate::align::column_score;
use crate::alphabet::{UTF8_ONE, UTF8_PLUS, UTF8_SPACE, UTF8_TWO};
use std::cmp::min;

use serde::Serialize;

/// The number of alignment columns written per block of `ali_string()`.
pub const ALI_LINE_WIDTH: usize = 80;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlignmentStats {
    /// Columns where both symbols are present and equal
    pub matches: usize,
    /// Columns where both symbols are present and differ
    pub mismatches: usize,
    /// Columns with a gap on one side
    pub gaps: usize,
}

/// An alignment of two sequences as two equal-length padded rows.
///
/// A `None` in either row is a gap. A well-formed result never has a
/// gap in both rows of the same column, and its `score` is the sum of
/// the per-column contributions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult<T> {
    /// The first sequence, padded with gaps
    pub top: Vec<Option<T>>,
    /// The second sequence, padded with gaps
    pub bottom: Vec<Option<T>>,
    /// The total alignment score
    pub score: isize,
}

impl<T> AlignmentResult<T> {
    /// The number of columns in the alignment.
    pub fn len(&self) -> usize {
        self.top.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (Option<&T>, Option<&T>)> + '_ {
        self.top
            .iter()
            .zip(self.bottom.iter())
            .map(|(t, b)| (t.as_ref(), b.as_ref()))
    }
}

impl<T: PartialEq + Clone> AlignmentResult<T> {
    /// Recompute the score from the aligned columns.
    pub fn rescore(&self) -> isize {
        self.columns().map(|(t, b)| column_score(t, b)).sum()
    }

    pub fn stats(&self) -> AlignmentStats {
        let mut stats = AlignmentStats::default();
        for column in self.columns() {
            match column {
                (Some(a), Some(b)) if a == b => stats.matches += 1,
                (Some(_), Some(_)) => stats.mismatches += 1,
                _ => stats.gaps += 1,
            }
        }
        stats
    }

    /// Check the structural invariants: equal row lengths, no column
    /// that is a gap on both sides, and a score that matches the columns.
    pub fn is_valid(&self) -> bool {
        self.top.len() == self.bottom.len()
            && self.columns().all(|c| !matches!(c, (None, None)))
            && self.score == self.rescore()
    }

    /// The same alignment with the rows exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            top: self.bottom.clone(),
            bottom: self.top.clone(),
            score: self.score,
        }
    }

    /// The top row with its gaps removed, i.e. the first input sequence.
    pub fn ungapped_top(&self) -> Vec<T> {
        self.top.iter().flatten().cloned().collect()
    }

    /// The bottom row with its gaps removed, i.e. the second input sequence.
    pub fn ungapped_bottom(&self) -> Vec<T> {
        self.bottom.iter().flatten().cloned().collect()
    }
}

fn row_bytes(row: &[Option<u8>]) -> Vec<u8> {
    row.iter().map(|b| b.unwrap_or(UTF8_SPACE)).collect()
}

fn bytes_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// This selects the character for the "+" track: a plus under true matches.
fn select_plus_character(top: Option<&u8>, bottom: Option<&u8>) -> u8 {
    match (top, bottom) {
        (Some(a), Some(b)) if a == b => UTF8_PLUS,
        _ => UTF8_SPACE,
    }
}

/// This selects the character for the "-" track: the size of the penalty
/// paid by the column, so a 2 under gaps and a 1 under mismatches.
fn select_minus_character(top: Option<&u8>, bottom: Option<&u8>) -> u8 {
    match (top, bottom) {
        (Some(a), Some(b)) if a == b => UTF8_SPACE,
        (Some(_), Some(_)) => UTF8_ONE,
        _ => UTF8_TWO,
    }
}

impl AlignmentResult<u8> {
    /// The top row, with gaps rendered as spaces.
    pub fn top_string(&self) -> String {
        bytes_to_string(&row_bytes(&self.top))
    }

    /// The bottom row, with gaps rendered as spaces.
    pub fn bottom_string(&self) -> String {
        bytes_to_string(&row_bytes(&self.bottom))
    }

    pub fn ali_string(&self) -> String {
        let top_bytes = row_bytes(&self.top);
        let bottom_bytes = row_bytes(&self.bottom);
        let (plus_bytes, minus_bytes): (Vec<u8>, Vec<u8>) = self
            .columns()
            .map(|(t, b)| (select_plus_character(t, b), select_minus_character(t, b)))
            .unzip();

        let mut ali_string = String::new();
        let mut start_offset: usize = 0;

        while start_offset < self.len() {
            let end_offset = min(start_offset + ALI_LINE_WIDTH, self.len());
            let range = start_offset..end_offset;

            // the marker tracks don't need to carry trailing blanks
            ali_string.push_str(bytes_to_string(&plus_bytes[range.clone()]).trim_end());
            ali_string.push('\n');
            ali_string.push_str(&bytes_to_string(&top_bytes[range.clone()]));
            ali_string.push('\n');
            ali_string.push_str(&bytes_to_string(&bottom_bytes[range.clone()]));
            ali_string.push('\n');
            ali_string.push_str(bytes_to_string(&minus_bytes[range]).trim_end());
            ali_string.push_str("\n\n");

            start_offset = end_offset;
        }

        ali_string
    }
}

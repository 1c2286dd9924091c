use crate::structs::{AlignmentResult, AlignmentStats, Sequence};

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// A flattened, serializable view of one alignment request and its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentRecord {
    pub index: usize,
    pub seq_1: String,
    pub seq_2: String,
    pub top: String,
    pub bottom: String,
    pub score: isize,
    pub stats: AlignmentStats,
}

impl AlignmentRecord {
    pub fn new(
        index: usize,
        seq_1: &Sequence,
        seq_2: &Sequence,
        alignment: &AlignmentResult<u8>,
    ) -> Self {
        Self {
            index,
            seq_1: seq_1.as_str().to_string(),
            seq_2: seq_2.as_str().to_string(),
            top: alignment.top_string(),
            bottom: alignment.bottom_string(),
            score: alignment.score,
            stats: alignment.stats(),
        }
    }
}

pub fn write_json_output(records: &[AlignmentRecord], out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)
        .context("failed to serialize alignment records")?;
    writeln!(out)?;
    Ok(())
}

pub mod align;
pub use align::*;

pub mod batch;
pub use batch::*;

pub mod interactive;
pub use interactive::*;

use std::io::Write;

use anyhow::Result;
use libdnalign::output::{
    write_json_output, write_standard_output, write_tabular_output, AlignmentRecord,
};
use libdnalign::structs::{AlignmentResult, Sequence};

use crate::args::OutputFormat;

/// Two strands and their optimal alignment.
pub struct AlignedPair {
    pub seq_1: Sequence,
    pub seq_2: Sequence,
    pub alignment: AlignmentResult<u8>,
}

impl AlignedPair {
    pub fn new(seq_1: Sequence, seq_2: Sequence) -> Self {
        let alignment = libdnalign::align::align(seq_1.as_bytes(), seq_2.as_bytes());
        Self {
            seq_1,
            seq_2,
            alignment,
        }
    }

    pub fn record(&self, index: usize) -> AlignmentRecord {
        AlignmentRecord::new(index, &self.seq_1, &self.seq_2, &self.alignment)
    }
}

pub fn write_pair(pair: &AlignedPair, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Aligning these two strands: {}", pair.seq_1.as_str())?;
    writeln!(out, "                            {}", pair.seq_2.as_str())?;
    write_standard_output(&pair.alignment, out)
}

pub fn write_output(pairs: &[AlignedPair], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Standard => {
            for pair in pairs {
                write_pair(pair, out)?;
            }
        }
        OutputFormat::Tabular | OutputFormat::Json => {
            let records: Vec<AlignmentRecord> = pairs
                .iter()
                .enumerate()
                .map(|(idx, pair)| pair.record(idx))
                .collect();

            match format {
                OutputFormat::Tabular => write_tabular_output(&records, out)?,
                _ => write_json_output(&records, out)?,
            }
        }
    }
    out.flush()?;
    Ok(())
}

use anyhow::{Context, Result};
use libdnalign::structs::Sequence;
use log::info;
use thiserror::Error;

use super::{write_output, AlignedPair};
use crate::args::AlignArgs;

#[derive(Error, Debug)]
#[error("expected at least two records in fasta file: {path}, found {count}")]
pub struct TooFewRecordsError {
    path: String,
    count: usize,
}

pub fn align(args: &AlignArgs) -> Result<()> {
    let (seq_1, seq_2) = load_strands(args)?;
    info!(
        "aligning strands of length {} and {}",
        seq_1.len(),
        seq_2.len()
    );

    let pair = AlignedPair::new(seq_1, seq_2);
    let mut out = args.output_args.writer()?;
    write_output(&[pair], args.output_args.format, &mut out)
}

/// Read the two strands to align, either from the first two records of
/// the fasta file or from the positional arguments.
pub fn load_strands(args: &AlignArgs) -> Result<(Sequence, Sequence)> {
    if let Some(path) = &args.fasta_path {
        let seqs = Sequence::dna_from_fasta(path)?;
        let count = seqs.len();
        let mut seqs_iter = seqs.into_iter();

        return match (seqs_iter.next(), seqs_iter.next()) {
            (Some(seq_1), Some(seq_2)) => Ok((seq_1, seq_2)),
            _ => Err(TooFewRecordsError {
                path: path.to_string_lossy().to_string(),
                count,
            }
            .into()),
        };
    }

    let seq_1 = Sequence::from_utf8(args.seq_1.as_deref().unwrap_or_default().as_bytes())
        .context("failed to parse the first strand")?
        .with_name("seq1");
    let seq_2 = Sequence::from_utf8(args.seq_2.as_deref().unwrap_or_default().as_bytes())
        .context("failed to parse the second strand")?
        .with_name("seq2");

    Ok((seq_1, seq_2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::OutputArgs;
    use std::io::Write;
    use std::path::PathBuf;

    fn args(seq_1: Option<&str>, seq_2: Option<&str>, fasta_path: Option<PathBuf>) -> AlignArgs {
        AlignArgs {
            seq_1: seq_1.map(String::from),
            seq_2: seq_2.map(String::from),
            fasta_path,
            output_args: OutputArgs::default(),
        }
    }

    #[test]
    fn test_load_strands_from_args() -> Result<()> {
        let (seq_1, seq_2) = load_strands(&args(Some("acgacg"), Some("ACAGACAG"), None))?;
        assert_eq!(seq_1.as_str(), "ACGACG");
        assert_eq!(seq_2.as_str(), "ACAGACAG");

        let (seq_1, seq_2) = load_strands(&args(Some(""), Some("GC"), None))?;
        assert!(seq_1.is_empty());
        assert_eq!(seq_2.as_str(), "GC");

        assert!(load_strands(&args(Some("ACGX"), Some("ACG"), None)).is_err());
        Ok(())
    }

    #[test]
    fn test_load_strands_from_fasta() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, ">a\nGCCAA\n>b\nGTCCTAA\n>c\nA\n")?;

        let (seq_1, seq_2) = load_strands(&args(None, None, Some(file.path().to_path_buf())))?;
        assert_eq!(seq_1.name, "a");
        assert_eq!(seq_1.as_str(), "GCCAA");
        assert_eq!(seq_2.name, "b");
        assert_eq!(seq_2.as_str(), "GTCCTAA");
        Ok(())
    }

    #[test]
    fn test_load_strands_from_short_fasta() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, ">a\nGCCAA\n")?;

        let err = load_strands(&args(None, None, Some(file.path().to_path_buf())))
            .err()
            .context("a single record should not load")?;
        assert!(err.downcast_ref::<TooFewRecordsError>().is_some());
        Ok(())
    }

    #[test]
    fn test_align_writes_output_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let output_path = dir.path().join("ali.txt");
        let mut align_args = args(Some("ACAG"), Some("ACG"), None);
        align_args.output_args.output_path = Some(output_path.clone());

        align(&align_args)?;

        let text = std::fs::read_to_string(&output_path)?;
        assert!(text.contains("Optimal alignment score is 1"));
        assert!(text.contains("AC G\n"));

        // the output file already exists
        assert!(align(&align_args).is_err());
        Ok(())
    }
}

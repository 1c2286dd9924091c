use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use crate::alphabet::{UTF8_SPACE, UTF8_TO_CANONICAL_DNA};
use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown UTF8 sequence byte: {byte}")]
pub struct UnknownUtf8SequenceByteError {
    byte: u8,
}

/// A DNA strand over the bases {A, C, G, T}.
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The upper case UTF8 bases of the sequence
    pub utf8_bytes: Vec<u8>,
}

fn canonicalize(bytes: &[u8]) -> std::result::Result<Vec<u8>, UnknownUtf8SequenceByteError> {
    bytes
        .iter()
        .map(|utf8_byte| {
            UTF8_TO_CANONICAL_DNA
                .get(utf8_byte)
                .copied()
                .ok_or(UnknownUtf8SequenceByteError { byte: *utf8_byte })
        })
        .collect()
}

impl Sequence {
    pub fn dna_from_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let mut seqs: Vec<Self> = vec![];

        let mut reader = Reader::from_path(&path).with_context(|| {
            format!(
                "failed to open fasta file: {}",
                path.as_ref().to_string_lossy()
            )
        })?;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let mut header_bytes = record.head().to_vec();
            let first_space_idx = header_bytes.iter().position(|&b| b == UTF8_SPACE);

            let error_context: fn() -> &'static str =
                || "failed to create String from fasta header bytes";

            let (name, details) = match first_space_idx {
                Some(idx) => {
                    let details_bytes = header_bytes.split_off(idx + 1);
                    header_bytes.pop();
                    (
                        String::from_utf8(header_bytes).with_context(error_context)?,
                        Some(String::from_utf8(details_bytes).with_context(error_context)?),
                    )
                }
                None => (
                    String::from_utf8(header_bytes).with_context(error_context)?,
                    None,
                ),
            };

            let mut utf8_bytes: Vec<u8> = vec![];
            for line in record.seq_lines() {
                utf8_bytes.extend(
                    canonicalize(line).with_context(|| format!("invalid base in record: {name}"))?,
                );
            }

            seqs.push(Sequence {
                name,
                details,
                utf8_bytes,
            });
        }
        Ok(seqs)
    }

    pub fn from_utf8(bytes: &[u8]) -> std::result::Result<Self, UnknownUtf8SequenceByteError> {
        Ok(Sequence {
            name: "".to_string(),
            details: None,
            utf8_bytes: canonicalize(bytes)?,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.utf8_bytes
    }

    /// The bases as a string slice.
    pub fn as_str(&self) -> &str {
        // every byte is one of the four canonical bases
        std::str::from_utf8(&self.utf8_bytes).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.utf8_bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utf8_bytes.is_empty()
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, ">{}", self.name)?;

        if let Some(ref details) = self.details {
            write!(f, " {details}")?
        };

        writeln!(f)?;

        let mut iter = self.utf8_bytes.chunks(80).peekable();

        while let Some(byte_chunk) = iter.next() {
            match std::str::from_utf8(byte_chunk) {
                Ok(seq_line) => {
                    write!(f, "{}", seq_line)?;
                    if iter.peek().is_some() {
                        // if we're not on the last
                        // line, add a linebreak
                        writeln!(f)?;
                    }
                }
                Err(_) => return Err(std::fmt::Error),
            }
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

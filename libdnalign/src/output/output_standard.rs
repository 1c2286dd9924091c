use crate::structs::AlignmentResult;

use anyhow::Result;
use std::io::Write;

/// Write the score of an alignment followed by its marker tracks and rows.
pub fn write_standard_output(alignment: &AlignmentResult<u8>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Optimal alignment score is {}", alignment.score)?;
    writeln!(out)?;
    write!(out, "{}", alignment.ali_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align;

    #[test]
    fn test_write_standard_output() -> Result<()> {
        let alignment = align(b"GCCAA", b"GTCCTAA");
        let mut out: Vec<u8> = vec![];
        write_standard_output(&alignment, &mut out)?;

        let expected = "Optimal alignment score is 1\n\n\
                        + ++ ++\n\
                        G CC AA\n\
                        GTCCTAA\n \
                        2  2\n\n";
        assert_eq!(String::from_utf8(out)?, expected);
        Ok(())
    }

    #[test]
    fn test_write_standard_output_empty() -> Result<()> {
        let alignment = align::<u8>(&[], &[]);
        let mut out: Vec<u8> = vec![];
        write_standard_output(&alignment, &mut out)?;

        assert_eq!(String::from_utf8(out)?, "Optimal alignment score is 0\n\n");
        Ok(())
    }
}

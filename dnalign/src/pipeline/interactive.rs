use std::io::{BufRead, Write};

use anyhow::Result;
use libdnalign::generate::random_dna_strand;
use log::info;
use rand::Rng;

use super::{write_pair, AlignedPair};
use crate::args::{GenerateArgs, InteractiveArgs};

pub const PROMPT: &str = "Generate random DNA strands? ";

fn is_negative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "no" | "n")
}

pub fn interactive(args: &InteractiveArgs) -> Result<()> {
    let mut rng = args.generate_args.rng();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let rounds = run_interactive(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut rng,
        &args.generate_args,
    )?;

    info!("aligned {rounds} random strand pairs");
    Ok(())
}

/// Prompt until the answer is "no" (or the input ends), aligning a fresh
/// pair of random strands after every other answer.
///
/// Returns the number of pairs that were aligned.
pub fn run_interactive<R: Rng + ?Sized>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    rng: &mut R,
    generate_args: &GenerateArgs,
) -> Result<usize> {
    let mut rounds = 0;

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            writeln!(out)?;
            break;
        }

        if is_negative(&answer) {
            break;
        }

        let seq_1 = random_dna_strand(rng, generate_args.min_length, generate_args.max_length)?;
        let seq_2 = random_dna_strand(rng, generate_args.min_length, generate_args.max_length)?;

        write_pair(&AlignedPair::new(seq_1, seq_2), out)?;
        rounds += 1;
    }

    Ok(rounds)
}

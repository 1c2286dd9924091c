use anyhow::Result;
use libdnalign::generate::{random_dna_strand, InvalidRangeError};
use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use super::{write_output, AlignedPair};
use crate::args::BatchArgs;

pub fn batch(args: &BatchArgs) -> Result<()> {
    let base_seed = args
        .generate_args
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen());

    info!(
        "aligning {} random strand pairs (lengths {}..={}, seed {})",
        args.num_pairs, args.generate_args.min_length, args.generate_args.max_length, base_seed
    );

    let pairs = align_random_pairs(
        args.num_pairs,
        base_seed,
        args.generate_args.min_length,
        args.generate_args.max_length,
    )?;

    let mut out = args.output_args.writer()?;
    write_output(&pairs, args.output_args.format, &mut out)
}

/// Generate and align `num_pairs` random strand pairs in parallel.
///
/// Pair `k` draws from its own generator seeded with `base_seed + k`, so
/// the output does not depend on how the work is split across threads.
/// Each alignment uses its own memo table.
pub fn align_random_pairs(
    num_pairs: usize,
    base_seed: u64,
    min_length: usize,
    max_length: usize,
) -> Result<Vec<AlignedPair>, InvalidRangeError> {
    (0..num_pairs)
        .into_par_iter()
        .map(|pair_idx| {
            let mut rng = Pcg64::seed_from_u64(base_seed.wrapping_add(pair_idx as u64));
            let seq_1 = random_dna_strand(&mut rng, min_length, max_length)?
                .with_name(format!("pair{pair_idx}_1"));
            let seq_2 = random_dna_strand(&mut rng, min_length, max_length)?
                .with_name(format!("pair{pair_idx}_2"));
            Ok(AlignedPair::new(seq_1, seq_2))
        })
        .collect()
}

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::alphabet::DNA_ALPHABET;
use crate::structs::Sequence;

/// The default length bounds for randomly generated strands.
pub const DEFAULT_MIN_LENGTH: usize = 40;
pub const DEFAULT_MAX_LENGTH: usize = 60;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRangeError {
    #[error("the minimum strand length must be a positive number")]
    ZeroMinimum,
    #[error("the maximum strand length ({max_length}) must be at least as large as the minimum strand length ({min_length})")]
    MaximumBelowMinimum {
        min_length: usize,
        max_length: usize,
    },
}

/// Generate a random DNA strand with a length drawn uniformly from
/// `[min_length, max_length]` and bases drawn uniformly from {A, T, G, C}.
pub fn random_dna_strand<R: Rng + ?Sized>(
    rng: &mut R,
    min_length: usize,
    max_length: usize,
) -> Result<Sequence, InvalidRangeError> {
    if min_length == 0 {
        return Err(InvalidRangeError::ZeroMinimum);
    }
    if max_length < min_length {
        return Err(InvalidRangeError::MaximumBelowMinimum {
            min_length,
            max_length,
        });
    }

    let length = rng.gen_range(min_length..=max_length);
    let utf8_bytes = (0..length)
        .map(|_| *DNA_ALPHABET.choose(rng).unwrap_or(&DNA_ALPHABET[0]))
        .collect();

    Ok(Sequence {
        name: "".to_string(),
        details: None,
        utf8_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_lengths_within_bounds() {
        let mut rng = Pcg64::seed_from_u64(0);
        for _ in 0..500 {
            let strand = random_dna_strand(&mut rng, 8, 10).unwrap();
            check!((8..=10).contains(&strand.len()));
            check!(strand.as_bytes().iter().all(|b| DNA_ALPHABET.contains(b)));
        }

        let strand = random_dna_strand(&mut rng, 5, 5).unwrap();
        check!(strand.len() == 5);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut rng_a = Pcg64::seed_from_u64(42);
        let mut rng_b = Pcg64::seed_from_u64(42);
        for _ in 0..10 {
            check!(
                random_dna_strand(&mut rng_a, 1, 100).unwrap()
                    == random_dna_strand(&mut rng_b, 1, 100).unwrap()
            );
        }
    }

    #[test]
    fn test_every_base_is_drawn() {
        let mut rng = Pcg64::seed_from_u64(7);
        let strand = random_dna_strand(&mut rng, 400, 400).unwrap();
        for base in DNA_ALPHABET {
            check!(strand.as_bytes().contains(&base));
        }
    }

    #[test]
    fn test_invalid_ranges() {
        let mut rng = Pcg64::seed_from_u64(0);

        let_assert!(Err(err) = random_dna_strand(&mut rng, 0, 10));
        check!(err == InvalidRangeError::ZeroMinimum);

        let_assert!(Err(err) = random_dna_strand(&mut rng, 10, 9));
        check!(
            err == InvalidRangeError::MaximumBelowMinimum {
                min_length: 10,
                max_length: 9
            }
        );
    }
}

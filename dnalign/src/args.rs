use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use libdnalign::generate::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use rand::SeedableRng;
use rand_pcg::Pcg64;

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    #[command(about = "Repeatedly generate two random strands and align them (the default)")]
    Interactive(InteractiveArgs),
    #[command(about = "Align two strands given on the command line or in a fasta file")]
    Align(AlignArgs),
    #[command(about = "Generate and align many random strand pairs in parallel")]
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
#[command(name = "dnalign")]
#[command(about = "Compute optimal alignments of DNA strands with a memoized recurrence")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<SubCommands>,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// The number of threads that dnalign will use
    #[arg(
        short = 't',
        long = "threads",
        default_value_t = 8usize,
        value_name = "n"
    )]
    pub num_threads: usize,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// The minimum length of a generated strand
    #[arg(long = "min-length", default_value_t = DEFAULT_MIN_LENGTH, value_name = "n")]
    pub min_length: usize,

    /// The maximum length of a generated strand
    #[arg(long = "max-length", default_value_t = DEFAULT_MAX_LENGTH, value_name = "n")]
    pub max_length: usize,

    /// The random seed (drawn from system entropy if not provided)
    #[arg(short = 's', long = "seed", value_name = "n")]
    pub seed: Option<u64>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            seed: None,
        }
    }
}

impl GenerateArgs {
    pub fn rng(&self) -> Pcg64 {
        match self.seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_entropy(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The score followed by the aligned strands and their marker tracks
    #[default]
    Standard,
    /// A fixed-width table with one row per alignment
    Tabular,
    /// A JSON array with one object per alignment
    Json,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// The output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Standard)]
    pub format: OutputFormat,

    /// Where to place output (stdout if not provided)
    #[arg(short = 'O', long = "output", value_name = "path")]
    pub output_path: Option<PathBuf>,

    /// Allow dnalign to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InteractiveArgs {
    /// Arguments that control random strand generation
    #[command(flatten)]
    pub generate_args: GenerateArgs,
}

#[derive(Args, Debug, Clone)]
pub struct AlignArgs {
    /// The first strand
    #[arg(value_name = "SEQ1", required_unless_present = "fasta_path", requires = "seq_2")]
    pub seq_1: Option<String>,

    /// The second strand
    #[arg(value_name = "SEQ2")]
    pub seq_2: Option<String>,

    /// Align the first two records of a fasta file instead
    #[arg(
        short = 'i',
        long = "fasta",
        value_name = "path",
        conflicts_with_all = ["seq_1", "seq_2"]
    )]
    pub fasta_path: Option<PathBuf>,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// The number of random strand pairs to align
    #[arg(short = 'n', long = "pairs", default_value_t = 100usize, value_name = "n")]
    pub num_pairs: usize,

    /// Arguments that control random strand generation
    #[command(flatten)]
    pub generate_args: GenerateArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,

    /// Arguments that are common across all dnalign subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

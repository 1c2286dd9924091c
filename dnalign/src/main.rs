mod args;
mod pipeline;
mod util;

use args::{Cli, InteractiveArgs, SubCommands};
use pipeline::{align, batch, interactive};
use util::set_threads;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Cli::parse().command {
        None => interactive(&InteractiveArgs::default())?,
        Some(SubCommands::Interactive(args)) => interactive(&args)?,
        Some(SubCommands::Align(args)) => align(&args)?,
        Some(SubCommands::Batch(args)) => {
            set_threads(args.common_args.num_threads)?;
            batch(&args)?;
        }
    }
    Ok(())
}

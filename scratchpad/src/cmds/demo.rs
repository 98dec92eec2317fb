use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use scratchpad_utils::config_file::read_config_or_default;
use scratchpad_utils::sampling::rng_from_seed;

#[derive(Debug, Parser)]
#[command(about = "Run every walkthrough in order")]
pub struct Opts {
    #[clap(long)]
    pub seed: Option<u64>,

    #[clap(long)]
    pub config: Option<PathBuf>,
}

pub fn run(opts: &Opts) -> Result<()> {
    let config = read_config_or_default(opts.config.as_deref())?;
    // one rng for the whole run so a seed pins every draw
    let mut rng = rng_from_seed(opts.seed.or(config.seed));

    super::shape::run(&super::shape::Opts {
        grid: super::shape::DEFAULT_GRID.to_string(),
    })?;
    super::path::run(&super::path::Opts {
        file_name: "sample_file.txt".to_string(),
    })?;
    super::sample::sample_mapping(&mut rng, &config, config.sample_count())?;
    super::sample::sample_items(&mut rng, &config, config.sample_count())?;
    super::choice::choose_items(&mut rng, &config, config.choice_count())?;

    Ok(())
}

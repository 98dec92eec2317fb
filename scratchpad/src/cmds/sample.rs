use anyhow::Result;
use clap::Parser;
use rand::Rng;
use std::path::PathBuf;

use scratchpad_utils::config_file::{read_config_or_default, Config};
use scratchpad_utils::sampling::{rng_from_seed, sample_unique, values_of};

#[derive(Debug, Parser)]
#[command(about = "Draw distinct elements without replacement")]
pub struct Opts {
    /// Number of elements to draw
    #[clap(long)]
    pub count: Option<usize>,

    /// Seed for a reproducible draw
    #[clap(long)]
    pub seed: Option<u64>,

    /// Sample the mapping's values instead of the item list
    #[clap(long)]
    pub from_mapping: bool,

    #[clap(long)]
    pub config: Option<PathBuf>,
}

pub fn run(opts: &Opts) -> Result<()> {
    let config = read_config_or_default(opts.config.as_deref())?;
    let mut rng = rng_from_seed(opts.seed.or(config.seed));
    let count = opts.count.unwrap_or_else(|| config.sample_count());

    if opts.from_mapping {
        sample_mapping(&mut rng, &config, count)
    } else {
        sample_items(&mut rng, &config, count)
    }
}

pub fn sample_mapping<R: Rng>(rng: &mut R, config: &Config, count: usize) -> Result<()> {
    let values = values_of(config.mapping());
    let sample = sample_unique(rng, &values, count)?;
    log::info!("Sampled {} of {} mapping values", sample.len(), values.len());
    println!("Unique sample of mapping values: {}", super::display_values(&sample));
    Ok(())
}

pub fn sample_items<R: Rng>(rng: &mut R, config: &Config, count: usize) -> Result<()> {
    let items = config.items();
    let sample = sample_unique(rng, &items, count)?;
    log::info!("Sampled {} of {} items", sample.len(), items.len());
    println!("Unique sample of items: {}", super::display_values(&sample));
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use rand::Rng;
use std::path::PathBuf;

use scratchpad_utils::config_file::{read_config_or_default, Config};
use scratchpad_utils::sampling::{repeated_choice, rng_from_seed};

#[derive(Debug, Parser)]
#[command(about = "Draw elements with replacement; values may repeat")]
pub struct Opts {
    /// Number of independent draws
    #[clap(long)]
    pub count: Option<usize>,

    #[clap(long)]
    pub seed: Option<u64>,

    #[clap(long)]
    pub config: Option<PathBuf>,
}

pub fn run(opts: &Opts) -> Result<()> {
    let config = read_config_or_default(opts.config.as_deref())?;
    let mut rng = rng_from_seed(opts.seed.or(config.seed));
    let count = opts.count.unwrap_or_else(|| config.choice_count());

    choose_items(&mut rng, &config, count)
}

pub fn choose_items<R: Rng>(rng: &mut R, config: &Config, count: usize) -> Result<()> {
    let items = config.items();
    let draws = repeated_choice(rng, &items, count)?;
    log::info!("Made {} draws from {} items", draws.len(), items.len());
    println!("Repeated choice of items: {}", super::display_values(&draws));
    Ok(())
}

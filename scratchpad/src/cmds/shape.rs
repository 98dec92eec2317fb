use anyhow::{Context, Result};
use clap::Parser;

use scratchpad_utils::grid::Grid;

pub const DEFAULT_GRID: &str = "[[1, 2, 3, 4, 5], [6, 7, 8, 9, 10]]";

#[derive(Debug, Parser)]
#[command(about = "Report element size and axis lengths of an integer grid")]
pub struct Opts {
    /// Grid as nested JSON arrays of integers
    #[clap(long, default_value = DEFAULT_GRID)]
    pub grid: String,
}

pub fn run(opts: &Opts) -> Result<()> {
    let rows: Vec<Vec<i64>> = serde_json::from_str(&opts.grid)
        .context("Grid must be a JSON array of integer arrays")?;
    let grid = Grid::from_rows(rows)?;
    log::info!("Built grid with shape {:?}", grid.shape());

    println!("{}", grid.report());

    Ok(())
}

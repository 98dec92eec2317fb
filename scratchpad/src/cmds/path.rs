use anyhow::Result;
use clap::Parser;

use scratchpad_utils::path_parts::{file_in_cwd, PathParts};

#[derive(Debug, Parser)]
#[command(about = "Split a file under the current directory into name, stem and extension")]
pub struct Opts {
    #[clap(long, default_value = "sample_file.txt")]
    pub file_name: String,
}

pub fn run(opts: &Opts) -> Result<()> {
    let filepath = file_in_cwd(&opts.file_name)?;
    log::debug!("Decomposing {}", filepath.display());

    let parts = PathParts::from_path(&filepath)?;
    println!(
        "File: Name = {}, Stem = {}, Extension = {}",
        parts.name, parts.stem, parts.extension
    );

    Ok(())
}

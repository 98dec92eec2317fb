mod cmds;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scratchpad")]
#[command(version = "0.1.0")]
#[command(about = "Grid shapes, path parts and random sampling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Shape(cmds::shape::Opts),

    Path(cmds::path::Opts),

    Sample(cmds::sample::Opts),

    Choice(cmds::choice::Opts),

    Demo(cmds::demo::Opts),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Shape(opts) => cmds::shape::run(opts)?,
        Commands::Path(opts) => cmds::path::run(opts)?,
        Commands::Sample(opts) => cmds::sample::run(opts)?,
        Commands::Choice(opts) => cmds::choice::run(opts)?,
        Commands::Demo(opts) => cmds::demo::run(opts)?,
    }

    Ok(())
}

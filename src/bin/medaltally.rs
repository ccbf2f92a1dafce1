use std::path::PathBuf;

use clap::Parser;
use medaltally::interpreter::{self, Config};
use medaltally::Error;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Database file to load before reading any command
    #[arg(short, long, env = "MEDALTALLY_DATABASE")]
    load: Option<PathBuf>,

    /// Read commands from this file instead of standard input
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Most verbose level of diagnostics written to standard error
    #[arg(long, env = "MEDALTALLY_LOG", default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    interpreter::run(Config {
        preload: args.load,
        script: args.script,
        log_level: args.log_level,
    })?;

    Ok(())
}

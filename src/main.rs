mod cli;
mod config;
mod handlers;
mod remover;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use handlers::remove::handle_remove;
use log::debug;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = handle_remove(cli)?;
    debug!("Finished: {:?}", outcome);
    Ok(())
}

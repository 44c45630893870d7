mod cli;
mod config;
mod model;
mod sheet;
mod submit;
mod tracker;
mod util;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    cli::run(cli).await
}

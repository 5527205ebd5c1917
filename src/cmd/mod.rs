use clap::{Parser, Subcommand};
use jobsweep::{conf::Settings, pkg::server::listen, prelude::Result};

mod scrape;

#[derive(Parser)]
#[command(about = "aggregates job postings across locations and serves them over http")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Listen,
    /// run one aggregation and print the jobs as json
    Scrape,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    let conf = Settings::new()?;
    match args.command {
        Some(SubCommandType::Listen) => {
            listen(&conf).await?;
        }
        Some(SubCommandType::Scrape) => {
            scrape::once(&conf).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}

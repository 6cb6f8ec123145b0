use clap::Parser;
use signup_contract::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => cli::generate::run(args),
        Command::Probe(args) => cli::probe::run(args).await,
        Command::Verify(args) => cli::verify::run(args).await,
    }
}

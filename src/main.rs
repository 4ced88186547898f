use clap::Parser;
use slug_lookup_gateway::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Schema(args) => cli::schema::run(args).await,
    }
}

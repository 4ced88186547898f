//! Schema command - prints the generated GraphQL SDL

use std::path::PathBuf;

use clap::Args;
use tracing::info;


#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Write the SDL to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Build the schema from the configured content types and print it
pub async fn run(args: SchemaArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = super::serve::load_config_with_logging();

    let state = crate::create_app_state(&config).await?;
    let sdl = state.schema.sdl();

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, sdl).await?;
            info!(path = %path.display(), "Wrote GraphQL schema");
        }
        None => println!("{}", sdl),
    }

    Ok(())
}

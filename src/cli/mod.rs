//! CLI module for the slug lookup gateway
//!
//! Provides subcommands:
//! - `serve`: run the HTTP server
//! - `schema`: print the generated GraphQL SDL

pub mod schema;
pub mod serve;

use clap::{Parser, Subcommand};

/// Slug Lookup Gateway - Polymorphic `findSlug` over registered content types
#[derive(Parser)]
#[command(name = "slug-lookup-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the GraphQL + REST server
    Serve,

    /// Print the GraphQL schema in SDL form
    Schema(schema::SchemaArgs),
}

mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use igniters_core::source::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(name = "igniters")]
#[command(about = "Browse Igniters Academy events and message the school office")]
struct Cli {
    /// Base URL of the site backend
    #[arg(long, global = true)]
    base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the upcoming event schedule
    Events,
    /// Send a message to the school office
    Contact {
        /// Your name
        #[arg(long)]
        name: String,

        /// Your email address
        #[arg(long)]
        email: String,

        /// The message body
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let base = cli.base.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    match cli.command {
        Commands::Events => commands::events::run(&base).await,
        Commands::Contact {
            name,
            email,
            message,
        } => commands::contact::run(&base, name, email, message).await,
    }
}

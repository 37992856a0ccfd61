mod commands;
mod loader;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tablecheck")]
#[command(version, about = "Validate tabular datasets against data contracts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a dataset against a contract and write report artifacts
    Validate {
        /// Path to the contract file (YAML or TOML)
        #[arg(short, long)]
        contract: String,

        /// Path to the dataset CSV file
        #[arg(short, long)]
        data: String,

        /// Directory for the report artifacts
        #[arg(short, long, default_value = "reports")]
        out_dir: String,

        /// Run tag used for report labeling only
        #[arg(short, long, default_value = "default")]
        tag: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a contract file without validating data
    Check {
        /// Path to the contract file (YAML or TOML)
        contract: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            contract,
            data,
            out_dir,
            tag,
            format,
        } => commands::validate::execute(&contract, &data, &out_dir, &tag, &format),

        Commands::Check { contract } => commands::check::execute(&contract),
    }
}

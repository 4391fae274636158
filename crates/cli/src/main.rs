use clap::{Parser, Subcommand};
use siteward_domain::CliOverrides;
use std::path::PathBuf;

mod bootstrap;
mod commands;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "siteward")]
#[command(version)]
#[command(about = "Siteward - time-windowed site blocking for the browser")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Rules store (JSON) path
    #[arg(short = 's', long, value_name = "FILE", global = true)]
    store: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API, block page and notification job
    Serve {
        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// HTTP port
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },

    /// Evaluate a URL against the stored rules
    Check {
        url: String,

        /// Evaluate at this RFC 3339 instant instead of now
        #[arg(long, value_name = "RFC3339")]
        at: Option<String>,
    },

    /// List blocking windows ending soon
    Upcoming,

    /// Write the rules as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Write the effective settings to a TOML file
    Init {
        #[arg(short = 'o', long, value_name = "FILE", default_value = "siteward.toml")]
        output: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Replace the rules with an exported JSON document
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (bind, port) = match &cli.command {
        Commands::Serve { bind, port } => (bind.clone(), *port),
        _ => (None, None),
    };
    let cli_overrides = CliOverrides {
        port,
        bind_address: bind,
        storage_path: cli.store.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config)?;

    match cli.command {
        Commands::Serve { .. } => commands::serve::run(config).await,
        Commands::Check { url, at } => commands::check::run(&config, &url, at.as_deref()).await,
        Commands::Upcoming => commands::upcoming::run(&config).await,
        Commands::Export { output } => commands::export::run(&config, output.as_deref()).await,
        Commands::Import { file } => commands::import::run(&config, &file).await,
        Commands::Init { output, force } => commands::init::run(&config, &output, force),
    }
}

//! hsq: Haven Seek Query - CLI for trying inventory search queries.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hsq")]
#[command(about = "Haven Seek Query - evaluate inventory search queries against item snapshots")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: $SEEK_CONFIG or the user config dir)
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print its canonical form
    #[command(visible_alias = "p")]
    Parse {
        /// Query string (e.g., lp:>100, fep:str, bronze)
        query: String,

        /// Output format: text or json
        #[arg(short = 'f', long = "format", default_value = "text")]
        format: String,
    },

    /// List items in a snapshot that a query highlights
    #[command(visible_alias = "m")]
    Match {
        /// Query string (e.g., lp:>100, fep:str, bronze)
        query: String,

        /// Inventory snapshot (.json or .toml)
        #[arg(short = 'i', long = "inventory")]
        inventory: PathBuf,

        /// Match items on their own metadata only, ignoring stacks
        #[arg(short = 'd', long = "direct")]
        direct: bool,

        /// Output format: text or json
        #[arg(short = 'f', long = "format", default_value = "text")]
        format: String,
    },

    /// Show the items and stacks of a snapshot
    Inspect {
        /// Inventory snapshot (.json or .toml)
        #[arg(short = 'i', long = "inventory")]
        inventory: PathBuf,

        /// Output format: text or json
        #[arg(short = 'f', long = "format", default_value = "text")]
        format: String,
    },

    /// Show the resolved configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long = "init")]
        init: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Parse { query, format } => commands::parse(&query, &format),
        Commands::Match { query, inventory, direct, format } => {
            commands::match_items(config, &query, &inventory, direct, &format)
        }
        Commands::Inspect { inventory, format } => commands::inspect(&inventory, &format),
        Commands::Config { init } => commands::config(config, init),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Themekit CLI - inspect and materialize theme assets on the local side

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::project::ProjectArgs;
use commands::{files, get, pack, unpack};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "theme")]
#[command(about = "Map a local theme directory onto remote theme assets", long_about = None)]
#[command(version)]
struct Cli {
    /// Log scanning and writing details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the keys that would be uploaded
    Files {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Print the project's assets as a JSON array
    Pack {
        #[command(flatten)]
        project: ProjectArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print a single asset as JSON
    Get {
        /// Root-relative key (e.g., templates/index.liquid)
        key: String,

        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Write assets from a JSON array onto disk
    Unpack {
        /// JSON file holding `[{"key": .., "value"|"attachment": ..}]`
        input: String,

        /// Theme root to write into
        #[arg(long, default_value = ".")]
        dir: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Files { project } => files::run(&project),
        Commands::Pack { project, pretty } => pack::run(&project, pretty),
        Commands::Get { key, project } => get::run(&key, &project),
        Commands::Unpack { input, dir } => unpack::run(&input, &dir),
    }
}

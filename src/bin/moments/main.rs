mod commands;
mod config;
mod output;

use std::path::PathBuf;

use animemoments::Client;
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use commands::{CreateArgs, ListArgs};

/// Command-line companion for a local AnimeMoments store.
#[derive(Parser)]
#[command(name = "moments")]
#[command(version)]
#[command(about = "Browse and edit a local AnimeMoments store")]
#[command(after_help = "Environment variables:\n  \
    MOMENTS_DATA_DIR  Storage directory (overrides moments.toml)\n  \
    RUST_LOG          Log filter passed to env_logger")]
struct Cli {
    /// Storage directory holding the data and session keys
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Populate an empty store with the demo catalog
    Seed,
    /// List moments, newest first by default
    List(ListArgs),
    /// Show one moment with its comments
    Show { id: String },
    /// Share a new moment
    Create(CreateArgs),
    /// Comment on a moment (requires login)
    Comment { moment_id: String, content: String },
    /// Like a moment as the current user (requires login)
    Like { moment_id: String },
    /// Remove the current user's like from a moment (requires login)
    Unlike { moment_id: String },
    /// Delete a moment and its comments
    Delete { id: String },
    /// Log in (demo identity unless --email/--name are given)
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Log out
    Logout,
    /// Print the current identity
    Whoami,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir)?;
    let client = Client::open(&data_dir)?;

    match cli.command {
        Commands::Seed => commands::seed(&client),
        Commands::List(args) => commands::list(&client, args),
        Commands::Show { id } => commands::show(&client, &id),
        Commands::Create(args) => commands::create(&client, args),
        Commands::Comment { moment_id, content } => commands::comment(&client, &moment_id, content),
        Commands::Like { moment_id } => commands::like(&client, &moment_id),
        Commands::Unlike { moment_id } => commands::unlike(&client, &moment_id),
        Commands::Delete { id } => commands::delete(&client, &id),
        Commands::Login { email, name } => commands::login(&client, email, name),
        Commands::Logout => commands::logout(&client),
        Commands::Whoami => commands::whoami(&client),
    }
}

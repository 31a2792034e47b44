//! Pomade CLI - salon booking demo
//!
//! Usage: pomade [COMMAND]
//!
//! Commands:
//!   book      Run the interactive booking wizard (default)
//!   bookings  List the bookings of an account
//!   call      Send a raw request envelope to the service
//!   init      Create a seeded database file

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pomade::commands::{cmd_book, cmd_bookings, cmd_call, cmd_init};
use pomade::config::Config;
use pomade::presentation::factory::resolve_store_path;
use pomade::presentation::create_client;

/// Pomade - salon booking demo
#[derive(Parser, Debug)]
#[command(name = "pomade")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Machine-readable output where supported
    #[arg(long, global = true, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive booking wizard
    Book,

    /// List the bookings of an account
    Bookings {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Send a raw request envelope to the service
    Call {
        /// Operation name (getSalons, createBooking, login, ...)
        operation: String,

        /// Operation arguments as a JSON object
        args: Option<String>,
    },

    /// Create a seeded database file
    Init {
        /// Database path (defaults to the configured store path)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing database
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = Config::load_or_default(Some(&cwd));

    if cli.verbose > 0 {
        eprintln!("store: {}", resolve_store_path(&config).display());
        if config.latency_ms > 0 {
            eprintln!("latency: {}ms per call", config.latency_ms);
        }
    }

    match cli.command {
        Some(Commands::Init { path, force }) => cmd_init(&config, path, force, cli.json),
        Some(Commands::Call { operation, args }) => {
            cmd_call(&create_client(&config), &operation, args.as_deref())
        }
        Some(Commands::Bookings { email, password }) => {
            cmd_bookings(&create_client(&config), &email, &password, cli.json)
        }
        Some(Commands::Book) | None => cmd_book(&create_client(&config)),
    }
}

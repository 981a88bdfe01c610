//! # Campus Assist CLI (`campus`)
//!
//! ## Usage
//!
//! ```bash
//! campus --config ./config/campus.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `campus serve` | Load the workbook and start the HTTP server |
//! | `campus ask "<question>"` | Answer one question and exit |
//! | `campus tables` | List loaded tables with row and column counts |
//! | `campus verify` | Check that every key in the data resolves |
//! | `campus completions <shell>` | Print shell completions |

use campus_assist::{ask, config, loader, server, tables, verify};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Campus Assist CLI: answers questions about student records from a
/// spreadsheet workbook.
#[derive(Parser)]
#[command(
    name = "campus",
    about = "Campus Assist: a spreadsheet-backed student records chatbot",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/campus.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    ///
    /// Loads every configured sheet first; a missing workbook or sheet
    /// stops the process before anything is served.
    Serve,

    /// Answer a single question.
    Ask {
        /// The question, e.g. "attendance for 123456789012".
        question: String,
    },

    /// List loaded tables.
    Tables,

    /// Look up every key in the loaded data and report any that do not resolve.
    Verify,

    /// Print shell completions.
    Completions {
        shell: Shell,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Commands that don't require config
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "campus", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Serve => {
            let router = loader::build_router(&cfg)?;
            server::run_server(&cfg, router).await?;
        }
        Commands::Ask { question } => {
            ask::run_ask(&cfg, &question)?;
        }
        Commands::Tables => {
            tables::list_tables(&cfg)?;
        }
        Commands::Verify => {
            verify::run_verify(&cfg)?;
        }
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}

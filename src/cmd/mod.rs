mod arrange;
mod clear;
mod export;
mod stats;
mod validate;

use crate::store::{FileStore, SchemaStore};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schema-flow")]
#[command(version)]
#[command(about = "Design database schemas and export them to SQL, JSON, or Markdown", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export the saved schema as SQL, JSON, or Markdown
    Export {
        /// Output format: sql, json, or documentation
        #[arg(short, long, default_value = "sql")]
        format: String,

        /// SQL dialect label: mysql, postgresql, sqlite, mssql, oracle
        #[arg(short, long, default_value = "mysql")]
        dialect: String,

        /// Output file (default: stdout; use `-o auto` for `<name>.<ext>`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include DROP TABLE IF EXISTS statements before each CREATE
        #[arg(long)]
        drop_statements: bool,

        /// Store directory (default: platform data dir)
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },

    /// Validate the saved schema for structural issues
    Validate {
        /// Output results as JSON instead of human-readable text
        #[arg(long)]
        json: bool,

        /// Treat warnings as errors (non-zero exit on any warning)
        #[arg(long)]
        strict: bool,

        /// Store directory (default: platform data dir)
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },

    /// Re-arrange table positions with a layout algorithm
    Arrange {
        /// Layout algorithm: grid
        #[arg(short, long, default_value = "grid")]
        algorithm: String,

        /// Preview positions without saving (dry run)
        #[arg(long)]
        dry_run: bool,

        /// Store directory (default: platform data dir)
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },

    /// Show statistics about the saved schema
    Stats {
        /// Output results as JSON instead of human-readable text
        #[arg(long)]
        json: bool,

        /// Store directory (default: platform data dir)
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },

    /// Delete the saved schema
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,

        /// Store directory (default: platform data dir)
        #[arg(long)]
        store_dir: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Export {
            format,
            dialect,
            output,
            drop_statements,
            store_dir,
        } => export::run(format, dialect, output, drop_statements, store_dir),
        Commands::Validate {
            json,
            strict,
            store_dir,
        } => validate::run(json, strict, store_dir),
        Commands::Arrange {
            algorithm,
            dry_run,
            store_dir,
        } => arrange::run(algorithm, dry_run, store_dir),
        Commands::Stats { json, store_dir } => stats::run(json, store_dir),
        Commands::Clear { force, store_dir } => clear::run(force, store_dir),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Open the schema store at the given directory, defaulting to the
/// platform data directory.
pub(crate) fn open_store(dir: Option<PathBuf>) -> anyhow::Result<SchemaStore<FileStore>> {
    let dir = match dir {
        Some(dir) => dir,
        None => FileStore::default_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine a data directory; pass --store-dir"))?,
    };
    Ok(SchemaStore::new(FileStore::new(dir)))
}

/// Load the saved schema or fail with a uniform message.
pub(crate) fn load_required(
    store: &SchemaStore<FileStore>,
) -> anyhow::Result<crate::schema::Schema> {
    store
        .load()?
        .ok_or_else(|| anyhow::anyhow!("no saved schema found; nothing to do"))
}

//! `padron` — command-line front end for the Padrón company registry.
//!
//! # Usage
//!
//! ```
//! padron empresa create --razon-social "Acme SA" --cuit 30-11111111-2 \
//!   --calle Main --numero 100 --ciudad BA --provincia BA --pais AR
//! padron empresa get 1
//! padron --plain empresa list
//! padron --store ~/padron.db domicilio delete 3
//! ```
//!
//! Exit codes: 0 success, 1 storage failure, 2 invalid input, 3 not found.

mod commands;
mod output;
mod settings;

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use commands::{DomicilioCommand, EmpresaCommand, Missing};
use output::Output;
use padron_core::ErrorKind;
use padron_store_sqlite::SqliteStore;
use settings::{Settings, expand_tilde};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "padron", version, about = "Company and fiscal address registry")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "padron.toml")]
  config: PathBuf,

  /// SQLite database file; overrides `store_path` from the config.
  #[arg(long, value_name = "FILE")]
  store: Option<PathBuf>,

  /// Print one line per record instead of JSON.
  #[arg(long, global = true)]
  plain: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Manage empresas.
  #[command(subcommand)]
  Empresa(EmpresaCommand),
  /// Manage fiscal addresses.
  #[command(subcommand)]
  Domicilio(DomicilioCommand),
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  match run(cli).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {err:#}");
      ExitCode::from(exit_code(&err))
    }
  }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
  let settings = Settings::load(&cli.config)?;
  let store_path = expand_tilde(&cli.store.unwrap_or(settings.store_path));

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::debug!(?store_path, "store opened");

  let out = Output { plain: cli.plain };
  match cli.command {
    Command::Empresa(cmd) => commands::empresa(&store.empresas(), cmd, out).await,
    Command::Domicilio(cmd) => commands::domicilio(&store.domicilios(), cmd, out).await,
  }
}

fn exit_code(err: &anyhow::Error) -> u8 {
  let kind = if err.downcast_ref::<Missing>().is_some() {
    Some(ErrorKind::NotFound)
  } else {
    err
      .downcast_ref::<padron_store_sqlite::Error>()
      .map(padron_store_sqlite::Error::kind)
  };
  match kind {
    Some(ErrorKind::Validation) => 2,
    Some(ErrorKind::NotFound) => 3,
    Some(ErrorKind::Storage) | None => 1,
  }
}

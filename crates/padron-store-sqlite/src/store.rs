//! [`SqliteStore`] — connection handling and the transaction boundary.

use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::{DomiciliosFiscales, Empresas, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Padrón registry backed by a single SQLite file. Clones share one
/// connection thread, so every service call is serialised on it.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open the registry database at `path`, creating the `empresa` and
  /// `domicilio_fiscal` tables on first use.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open a private registry that lives only as long as this handle and its
  /// clones.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Apply [`SCHEMA`]; safe to run against an existing registry.
  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// The [`EmpresaService`](padron_core::service::EmpresaService) view of
  /// this store.
  pub fn empresas(&self) -> Empresas { Empresas::new(self.clone()) }

  /// The
  /// [`DomicilioFiscalService`](padron_core::service::DomicilioFiscalService)
  /// view of this store.
  pub fn domicilios(&self) -> DomiciliosFiscales {
    DomiciliosFiscales::new(self.clone())
  }

  // ── Sessions ──────────────────────────────────────────────────────────────

  /// Run `f` against the connection without opening a transaction.
  ///
  /// The connection is held only for the duration of `f`.
  pub(crate) async fn session<T, F>(&self, f: F) -> Result<T>
  where
    T: Send + 'static,
    F: FnOnce(&Connection) -> Result<T> + Send + 'static,
  {
    self.conn.call(move |conn| Ok(f(&*conn))).await?
  }

  /// Run `f` inside a transaction: commit if it returns `Ok`, roll back
  /// otherwise. The error from `f` is returned unchanged.
  pub(crate) async fn transaction<T, F>(&self, op: &'static str, f: F) -> Result<T>
  where
    T: Send + 'static,
    F: FnOnce(&Connection) -> Result<T> + Send + 'static,
  {
    self
      .conn
      .call(move |conn| Ok(run_in_transaction(conn, op, f)))
      .await?
  }
}

fn run_in_transaction<T>(
  conn: &mut Connection,
  op: &'static str,
  f: impl FnOnce(&Connection) -> Result<T>,
) -> Result<T> {
  let tx = conn.transaction()?;
  match f(&*tx) {
    Ok(value) => {
      tx.commit()?;
      debug!(op, "transaction committed");
      Ok(value)
    }
    Err(err) => {
      if let Err(rollback_err) = tx.rollback() {
        warn!(op, error = %rollback_err, "rollback failed");
      }
      warn!(op, error = %err, "transaction rolled back");
      Err(err)
    }
  }
}

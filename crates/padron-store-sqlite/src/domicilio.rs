//! [`DomiciliosFiscales`] — the SQLite [`DomicilioFiscalService`].

use padron_core::{
  ValidationError,
  domicilio::DomicilioFiscal,
  service::DomicilioFiscalService,
  validate,
};
use tracing::info;

use crate::{Error, Result, SqliteStore, dao::domicilio as dao};

/// Fiscal-address operations over a [`SqliteStore`].
#[derive(Clone)]
pub struct DomiciliosFiscales {
  store: SqliteStore,
}

impl DomiciliosFiscales {
  pub(crate) fn new(store: SqliteStore) -> Self { Self { store } }
}

impl DomicilioFiscalService for DomiciliosFiscales {
  type Error = Error;

  async fn insertar(&self, domicilio: DomicilioFiscal) -> Result<i64> {
    validate::domicilio_fiscal(&domicilio)?;

    let id = self
      .store
      .transaction("domicilio.insertar", move |conn| dao::crear(conn, &domicilio))
      .await?;

    info!(id, "domicilio fiscal created");
    Ok(id)
  }

  async fn actualizar(&self, domicilio: DomicilioFiscal) -> Result<()> {
    let id = domicilio.id.ok_or_else(|| ValidationError::required("id"))?;
    validate::domicilio_fiscal(&domicilio)?;

    self
      .store
      .transaction("domicilio.actualizar", move |conn| {
        if dao::leer(conn, id)?.is_none() {
          return Err(Error::DomicilioNotFound(id));
        }
        dao::actualizar(conn, &domicilio)
      })
      .await
  }

  async fn eliminar(&self, id: i64) -> Result<()> {
    self
      .store
      .transaction("domicilio.eliminar", move |conn| {
        if dao::leer(conn, id)?.is_none() {
          return Err(Error::DomicilioNotFound(id));
        }
        dao::eliminar(conn, id)
      })
      .await?;

    info!(id, "domicilio fiscal soft-deleted");
    Ok(())
  }

  async fn get_by_id(&self, id: i64) -> Result<Option<DomicilioFiscal>> {
    self.store.session(move |conn| dao::leer(conn, id)).await
  }

  async fn get_all(&self) -> Result<Vec<DomicilioFiscal>> {
    self.store.session(dao::leer_todos).await
  }
}

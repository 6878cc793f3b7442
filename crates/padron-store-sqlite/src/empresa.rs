//! [`Empresas`] — the SQLite [`EmpresaService`].
//!
//! Owns the 1:1 protocol with `domicilio_fiscal`: an attached address is
//! created and linked in the same transaction as its empresa, and deleting
//! an empresa soft-deletes its address too.

use padron_core::{
  ValidationError,
  empresa::Empresa,
  service::EmpresaService,
  validate,
};
use rusqlite::Connection;
use tracing::info;

use crate::{
  Error, Result, SqliteStore,
  dao::{domicilio as domicilio_dao, empresa as empresa_dao},
};

/// Empresa operations over a [`SqliteStore`].
#[derive(Clone)]
pub struct Empresas {
  store: SqliteStore,
}

impl Empresas {
  pub(crate) fn new(store: SqliteStore) -> Self { Self { store } }
}

// ─── Uniqueness ──────────────────────────────────────────────────────────────

/// Fail if another live empresa (other than `propia`) already uses `cuit`.
fn verificar_cuit(conn: &Connection, cuit: &str, propia: Option<i64>) -> Result<()> {
  match empresa_dao::buscar_por_cuit(conn, cuit)? {
    Some(otra) if otra.id != propia => Err(ValidationError::duplicate("cuit", cuit).into()),
    _ => Ok(()),
  }
}

/// Fail if another live empresa (other than `propia`) already uses
/// `razon_social`.
fn verificar_razon_social(
  conn: &Connection,
  razon_social: &str,
  propia: Option<i64>,
) -> Result<()> {
  match empresa_dao::buscar_por_razon_social(conn, razon_social)? {
    Some(otra) if otra.id != propia => {
      Err(ValidationError::duplicate("razon_social", razon_social).into())
    }
    _ => Ok(()),
  }
}

// ─── EmpresaService impl ─────────────────────────────────────────────────────

impl EmpresaService for Empresas {
  type Error = Error;

  async fn insertar(&self, empresa: Empresa) -> Result<i64> {
    validate::empresa(&empresa)?;
    if let Some(domicilio) = &empresa.domicilio_fiscal {
      validate::domicilio_fiscal(domicilio)?;
    }

    let id = self
      .store
      .transaction("empresa.insertar", move |conn| {
        verificar_cuit(conn, &empresa.cuit, None)?;
        verificar_razon_social(conn, &empresa.razon_social, None)?;

        let empresa_id = empresa_dao::crear(conn, &empresa)?;

        if let Some(domicilio) = &empresa.domicilio_fiscal {
          // Vacuous for a brand-new row; guards callers that split creation
          // from linking.
          if domicilio_dao::leer_por_empresa_id(conn, empresa_id)?.is_some() {
            return Err(Error::DomicilioAlreadyLinked(empresa_id));
          }
          let domicilio_id = domicilio_dao::crear(conn, domicilio)?;
          domicilio_dao::establecer_relacion_empresa(conn, domicilio_id, empresa_id)?;
        }

        Ok(empresa_id)
      })
      .await?;

    info!(id, "empresa created");
    Ok(id)
  }

  async fn actualizar(&self, empresa: Empresa) -> Result<()> {
    let id = empresa.id.ok_or_else(|| ValidationError::required("id"))?;
    validate::empresa(&empresa)?;
    if let Some(domicilio) = empresa.domicilio_fiscal.as_ref().filter(|d| d.id.is_some()) {
      validate::domicilio_fiscal(domicilio)?;
    }

    self
      .store
      .transaction("empresa.actualizar", move |conn| {
        let existente =
          empresa_dao::leer(conn, id)?.ok_or(Error::EmpresaNotFound(id))?;

        if existente.cuit != empresa.cuit {
          verificar_cuit(conn, &empresa.cuit, Some(id))?;
        }
        if existente.razon_social != empresa.razon_social {
          verificar_razon_social(conn, &empresa.razon_social, Some(id))?;
        }

        empresa_dao::actualizar(conn, &empresa)?;

        // An address without an id has nothing to update. One with an id must
        // be the address this empresa already owns.
        if let Some(domicilio) = empresa.domicilio_fiscal.as_ref()
          && let Some(domicilio_id) = domicilio.id
        {
          let propio = existente.domicilio_fiscal.as_ref().and_then(|d| d.id);
          if propio != Some(domicilio_id) {
            return Err(Error::DomicilioNotFound(domicilio_id));
          }
          domicilio_dao::actualizar(conn, domicilio)?;
        }

        Ok(())
      })
      .await
  }

  async fn eliminar(&self, id: i64) -> Result<()> {
    self
      .store
      .transaction("empresa.eliminar", move |conn| {
        let existente =
          empresa_dao::leer(conn, id)?.ok_or(Error::EmpresaNotFound(id))?;

        empresa_dao::eliminar(conn, id)?;
        if let Some(domicilio_id) = existente.domicilio_fiscal.and_then(|d| d.id) {
          domicilio_dao::eliminar(conn, domicilio_id)?;
        }

        Ok(())
      })
      .await?;

    info!(id, "empresa soft-deleted");
    Ok(())
  }

  async fn get_by_id(&self, id: i64) -> Result<Option<Empresa>> {
    self.store.session(move |conn| empresa_dao::leer(conn, id)).await
  }

  async fn get_all(&self) -> Result<Vec<Empresa>> {
    self.store.session(empresa_dao::leer_todos).await
  }

  async fn buscar_por_cuit(&self, cuit: &str) -> Result<Option<Empresa>> {
    let cuit = validate::search_key("cuit", cuit)?.to_owned();
    self
      .store
      .session(move |conn| empresa_dao::buscar_por_cuit(conn, &cuit))
      .await
  }

  async fn buscar_por_razon_social(&self, razon_social: &str) -> Result<Option<Empresa>> {
    let razon_social = validate::search_key("razon_social", razon_social)?.to_owned();
    self
      .store
      .session(move |conn| empresa_dao::buscar_por_razon_social(conn, &razon_social))
      .await
  }
}

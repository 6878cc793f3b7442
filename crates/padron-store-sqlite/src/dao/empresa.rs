//! Statements against the `empresa` table.
//!
//! Every read hydrates `domicilio_fiscal` through
//! [`domicilio::leer_por_empresa_id`], so callers always receive a complete
//! [`Empresa`].

use padron_core::{ValidationError, empresa::Empresa};
use rusqlite::{Connection, OptionalExtension as _, Row, ToSql, params};

use super::domicilio;
use crate::{Error, Result};

const COLUMNS: &str = "id, eliminado, razon_social, cuit, actividad_principal, email";

fn select_activos(filter: Option<&str>) -> String {
  match filter {
    Some(f) => format!("SELECT {COLUMNS} FROM empresa WHERE eliminado = 0 AND {f}"),
    None => format!("SELECT {COLUMNS} FROM empresa WHERE eliminado = 0"),
  }
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<Empresa> {
  Ok(Empresa {
    id:                  row.get(0)?,
    eliminado:           row.get(1)?,
    razon_social:        row.get(2)?,
    cuit:                row.get(3)?,
    actividad_principal: row.get(4)?,
    email:               row.get(5)?,
    domicilio_fiscal:    None,
  })
}

fn hidratar(conn: &Connection, mut empresa: Empresa) -> Result<Empresa> {
  if let Some(id) = empresa.id {
    empresa.domicilio_fiscal = domicilio::leer_por_empresa_id(conn, id)?;
  }
  Ok(empresa)
}

/// Run a single-row lookup and hydrate the result.
fn leer_uno(
  conn: &Connection,
  filter: &str,
  param: impl ToSql,
) -> Result<Option<Empresa>> {
  let found = conn
    .query_row(&select_activos(Some(filter)), params![param], from_row)
    .optional()?;
  found.map(|e| hidratar(conn, e)).transpose()
}

/// Insert the empresa row only; an attached address is the caller's concern.
/// New rows are always live, whatever `eliminado` says.
pub fn crear(conn: &Connection, empresa: &Empresa) -> Result<i64> {
  conn.execute(
    "INSERT INTO empresa (eliminado, razon_social, cuit, actividad_principal, email)
     VALUES (0, ?1, ?2, ?3, ?4)",
    params![
      empresa.razon_social,
      empresa.cuit,
      empresa.actividad_principal,
      empresa.email,
    ],
  )?;
  Ok(conn.last_insert_rowid())
}

pub fn leer(conn: &Connection, id: i64) -> Result<Option<Empresa>> {
  leer_uno(conn, "id = ?1", id)
}

pub fn leer_todos(conn: &Connection) -> Result<Vec<Empresa>> {
  let mut stmt = conn.prepare(&format!("{} ORDER BY id", select_activos(None)))?;
  let rows = stmt
    .query_map([], from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  rows.into_iter().map(|e| hidratar(conn, e)).collect()
}

pub fn actualizar(conn: &Connection, empresa: &Empresa) -> Result<()> {
  let id = empresa.id.ok_or_else(|| ValidationError::required("id"))?;
  let changed = conn.execute(
    "UPDATE empresa
        SET razon_social = ?1, cuit = ?2, actividad_principal = ?3, email = ?4
      WHERE id = ?5 AND eliminado = 0",
    params![
      empresa.razon_social,
      empresa.cuit,
      empresa.actividad_principal,
      empresa.email,
      id,
    ],
  )?;
  if changed == 0 {
    return Err(Error::EmpresaNotFound(id));
  }
  Ok(())
}

pub fn eliminar(conn: &Connection, id: i64) -> Result<()> {
  conn.execute("UPDATE empresa SET eliminado = 1 WHERE id = ?1", params![id])?;
  Ok(())
}

pub fn buscar_por_cuit(conn: &Connection, cuit: &str) -> Result<Option<Empresa>> {
  leer_uno(conn, "cuit = ?1", cuit)
}

pub fn buscar_por_razon_social(
  conn: &Connection,
  razon_social: &str,
) -> Result<Option<Empresa>> {
  leer_uno(conn, "razon_social = ?1", razon_social)
}

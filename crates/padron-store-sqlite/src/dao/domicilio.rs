//! Statements against the `domicilio_fiscal` table.

use padron_core::{ValidationError, domicilio::DomicilioFiscal};
use rusqlite::{Connection, OptionalExtension as _, Row, params};

use crate::{Error, Result};

const COLUMNS: &str =
  "id, eliminado, calle, numero, ciudad, provincia, codigo_postal, pais, empresa_id";

/// Every read goes through here so the soft-delete predicate is never lost.
fn select_activos(filter: Option<&str>) -> String {
  match filter {
    Some(f) => {
      format!("SELECT {COLUMNS} FROM domicilio_fiscal WHERE eliminado = 0 AND {f}")
    }
    None => format!("SELECT {COLUMNS} FROM domicilio_fiscal WHERE eliminado = 0"),
  }
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<DomicilioFiscal> {
  Ok(DomicilioFiscal {
    id:            row.get(0)?,
    eliminado:     row.get(1)?,
    calle:         row.get(2)?,
    numero:        row.get(3)?,
    ciudad:        row.get(4)?,
    provincia:     row.get(5)?,
    codigo_postal: row.get(6)?,
    pais:          row.get(7)?,
    empresa_id:    row.get(8)?,
  })
}

/// Insert a new live row and return its generated id. `empresa_id` is always
/// stored as `NULL`; see [`establecer_relacion_empresa`].
pub fn crear(conn: &Connection, domicilio: &DomicilioFiscal) -> Result<i64> {
  conn.execute(
    "INSERT INTO domicilio_fiscal (
       eliminado, calle, numero, ciudad, provincia, codigo_postal, pais, empresa_id
     ) VALUES (0, ?1, ?2, ?3, ?4, ?5, ?6, NULL)",
    params![
      domicilio.calle,
      domicilio.numero,
      domicilio.ciudad,
      domicilio.provincia,
      domicilio.codigo_postal,
      domicilio.pais,
    ],
  )?;
  Ok(conn.last_insert_rowid())
}

pub fn leer(conn: &Connection, id: i64) -> Result<Option<DomicilioFiscal>> {
  Ok(
    conn
      .query_row(&select_activos(Some("id = ?1")), params![id], from_row)
      .optional()?,
  )
}

pub fn leer_todos(conn: &Connection) -> Result<Vec<DomicilioFiscal>> {
  let mut stmt = conn.prepare(&format!("{} ORDER BY id", select_activos(None)))?;
  let rows = stmt
    .query_map([], from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

/// Replace the address fields of a live row. Neither `eliminado` nor
/// `empresa_id` is touched.
pub fn actualizar(conn: &Connection, domicilio: &DomicilioFiscal) -> Result<()> {
  let id = domicilio.id.ok_or_else(|| ValidationError::required("id"))?;
  let changed = conn.execute(
    "UPDATE domicilio_fiscal
        SET calle = ?1, numero = ?2, ciudad = ?3, provincia = ?4,
            codigo_postal = ?5, pais = ?6
      WHERE id = ?7 AND eliminado = 0",
    params![
      domicilio.calle,
      domicilio.numero,
      domicilio.ciudad,
      domicilio.provincia,
      domicilio.codigo_postal,
      domicilio.pais,
      id,
    ],
  )?;
  if changed == 0 {
    return Err(Error::DomicilioNotFound(id));
  }
  Ok(())
}

/// Mark a row as deleted. Unconditional: an absent id is not an error here.
pub fn eliminar(conn: &Connection, id: i64) -> Result<()> {
  conn.execute(
    "UPDATE domicilio_fiscal SET eliminado = 1 WHERE id = ?1",
    params![id],
  )?;
  Ok(())
}

/// The live address owned by `empresa_id`, if any.
pub fn leer_por_empresa_id(
  conn: &Connection,
  empresa_id: i64,
) -> Result<Option<DomicilioFiscal>> {
  Ok(
    conn
      .query_row(
        &select_activos(Some("empresa_id = ?1")),
        params![empresa_id],
        from_row,
      )
      .optional()?,
  )
}

/// Point an existing address at its owning empresa.
pub fn establecer_relacion_empresa(
  conn: &Connection,
  domicilio_id: i64,
  empresa_id: i64,
) -> Result<()> {
  let changed = conn.execute(
    "UPDATE domicilio_fiscal SET empresa_id = ?1 WHERE id = ?2",
    params![empresa_id, domicilio_id],
  )?;
  if changed == 0 {
    return Err(Error::DomicilioNotFound(domicilio_id));
  }
  Ok(())
}

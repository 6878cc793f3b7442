//! Per-entity data access.
//!
//! Functions take a borrowed [`rusqlite::Connection`]; a
//! [`rusqlite::Transaction`] derefs to one, so the same calls serve reads and
//! transactional writes. All user values are bound parameters.

pub mod domicilio;
pub mod empresa;

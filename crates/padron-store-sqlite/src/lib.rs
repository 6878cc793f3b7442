//! SQLite backend for the Padrón registry.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Data access lives in `dao`; the service
//! traits from `padron-core` are implemented by [`Empresas`] and
//! [`DomiciliosFiscales`], both obtained from a [`SqliteStore`].

mod dao;
mod domicilio;
mod empresa;
mod schema;
mod store;

pub mod error;

pub use domicilio::DomiciliosFiscales;
pub use empresa::Empresas;
pub use error::{Error, Result};
pub use store::SqliteStore;

//! Core types and trait definitions for the Padrón company registry.
//!
//! This crate is deliberately free of database dependencies. It holds the
//! entity model, the field validation rules, and the service traits that
//! storage backends implement.

// The service traits spell out `impl Future + Send`; backends implement them
// with plain `async fn`.
#![allow(async_fn_in_trait)]

pub mod domicilio;
pub mod empresa;
pub mod error;
pub mod service;
pub mod validate;

pub use error::{ErrorKind, Result, ValidationError, Violation};

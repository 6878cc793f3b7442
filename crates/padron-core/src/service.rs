//! Service traits: the public surface of the registry.
//!
//! The traits are implemented by storage backends (e.g.
//! `padron-store-sqlite`). Presentation layers depend on this abstraction, not
//! on any concrete backend.
//!
//! Every mutating operation runs as one transaction: begin, act, commit, with
//! a rollback on any error. Reads use a single session and no transaction.

use std::future::Future;

use crate::{domicilio::DomicilioFiscal, empresa::Empresa};

/// Operations on empresas, including maintenance of the 1:1 relationship with
/// their fiscal address.
pub trait EmpresaService: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Validate and create an empresa, returning its new id.
  ///
  /// Fails with a validation error if the CUIT or razón social is already
  /// used by a non-deleted empresa. An attached [`DomicilioFiscal`] is created
  /// and linked in the same transaction.
  fn insertar(
    &self,
    empresa: Empresa,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Replace every field except `id` and `eliminado`.
  ///
  /// An attached address that carries an id is updated in the same
  /// transaction, and must be the address this empresa already owns; one
  /// without an id is ignored.
  fn actualizar(
    &self,
    empresa: Empresa,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Soft-delete an empresa and, if present, its fiscal address.
  fn eliminar(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Retrieve a non-deleted empresa. Returns `None` if not found.
  fn get_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Empresa>, Self::Error>> + Send + '_;

  /// List all non-deleted empresas.
  fn get_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Empresa>, Self::Error>> + Send + '_;

  /// Exact-match lookup by CUIT. Blank input is a validation error.
  fn buscar_por_cuit<'a>(
    &'a self,
    cuit: &'a str,
  ) -> impl Future<Output = Result<Option<Empresa>, Self::Error>> + Send + 'a;

  /// Exact-match lookup by razón social. Blank input is a validation error.
  fn buscar_por_razon_social<'a>(
    &'a self,
    razon_social: &'a str,
  ) -> impl Future<Output = Result<Option<Empresa>, Self::Error>> + Send + 'a;
}

/// Operations on fiscal addresses on their own.
///
/// Creating an address here never links it to an empresa; that only happens
/// through [`EmpresaService::insertar`].
pub trait DomicilioFiscalService: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn insertar(
    &self,
    domicilio: DomicilioFiscal,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  fn actualizar(
    &self,
    domicilio: DomicilioFiscal,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn eliminar(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn get_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<DomicilioFiscal>, Self::Error>> + Send + '_;

  fn get_all(
    &self,
  ) -> impl Future<Output = Result<Vec<DomicilioFiscal>, Self::Error>> + Send + '_;
}

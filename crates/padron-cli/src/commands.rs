//! Subcommands: one per service operation.

use clap::{Args, Subcommand};
use padron_core::{
  domicilio::DomicilioFiscal,
  empresa::Empresa,
  service::{DomicilioFiscalService, EmpresaService},
};
use thiserror::Error;

use crate::output::Output;

/// A lookup by id or key found nothing.
#[derive(Debug, Error)]
#[error("{what} not found: {key}")]
pub struct Missing {
  pub what: &'static str,
  pub key:  String,
}

// ─── Arguments ────────────────────────────────────────────────────────────────

#[derive(Subcommand, Debug)]
pub enum EmpresaCommand {
  /// Create an empresa, optionally with its fiscal address.
  Create {
    #[command(flatten)]
    fields:    EmpresaFields,
    #[command(flatten)]
    domicilio: DomicilioFields,
  },
  /// Show one empresa by id.
  Get { id: i64 },
  /// Find an empresa by exact CUIT.
  ByCuit { cuit: String },
  /// Find an empresa by exact razón social.
  ByRazonSocial { razon_social: String },
  /// List all empresas.
  List,
  /// Change the given fields; anything omitted keeps its current value.
  Update {
    id:        i64,
    #[command(flatten)]
    fields:    EmpresaFields,
    #[command(flatten)]
    domicilio: DomicilioFields,
  },
  /// Soft-delete an empresa and its fiscal address.
  Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum DomicilioCommand {
  /// Create an unlinked fiscal address.
  Create {
    #[command(flatten)]
    fields: DomicilioFields,
  },
  /// Show one fiscal address by id.
  Get { id: i64 },
  /// List all fiscal addresses.
  List,
  /// Change the given fields; anything omitted keeps its current value.
  Update {
    id:     i64,
    #[command(flatten)]
    fields: DomicilioFields,
  },
  /// Soft-delete a fiscal address.
  Delete { id: i64 },
}

/// Empresa fields. Passing an empty string to an optional field clears it.
#[derive(Args, Debug, Default)]
pub struct EmpresaFields {
  #[arg(long)]
  pub razon_social:        Option<String>,
  #[arg(long)]
  pub cuit:                Option<String>,
  #[arg(long)]
  pub actividad_principal: Option<String>,
  #[arg(long)]
  pub email:               Option<String>,
}

/// Fiscal address fields. Passing an empty string to `--codigo-postal` clears
/// it.
#[derive(Args, Debug, Default)]
pub struct DomicilioFields {
  #[arg(long)]
  pub calle:         Option<String>,
  #[arg(long)]
  pub numero:        Option<i32>,
  #[arg(long)]
  pub ciudad:        Option<String>,
  #[arg(long)]
  pub provincia:     Option<String>,
  #[arg(long)]
  pub codigo_postal: Option<String>,
  #[arg(long)]
  pub pais:          Option<String>,
}

fn non_empty(value: String) -> Option<String> {
  (!value.trim().is_empty()).then_some(value)
}

impl EmpresaFields {
  /// Overwrite the fields that were given.
  pub fn apply(self, empresa: &mut Empresa) {
    if let Some(v) = self.razon_social {
      empresa.razon_social = v;
    }
    if let Some(v) = self.cuit {
      empresa.cuit = v;
    }
    if let Some(v) = self.actividad_principal {
      empresa.actividad_principal = non_empty(v);
    }
    if let Some(v) = self.email {
      empresa.email = non_empty(v);
    }
  }
}

impl DomicilioFields {
  pub fn is_empty(&self) -> bool {
    self.calle.is_none()
      && self.numero.is_none()
      && self.ciudad.is_none()
      && self.provincia.is_none()
      && self.codigo_postal.is_none()
      && self.pais.is_none()
  }

  /// Overwrite the fields that were given.
  pub fn apply(self, domicilio: &mut DomicilioFiscal) {
    if let Some(v) = self.calle {
      domicilio.calle = v;
    }
    if let Some(v) = self.numero {
      domicilio.numero = Some(v);
    }
    if let Some(v) = self.ciudad {
      domicilio.ciudad = v;
    }
    if let Some(v) = self.provincia {
      domicilio.provincia = v;
    }
    if let Some(v) = self.codigo_postal {
      domicilio.codigo_postal = non_empty(v);
    }
    if let Some(v) = self.pais {
      domicilio.pais = v;
    }
  }
}

// ─── Handlers ─────────────────────────────────────────────────────────────────

pub async fn empresa<S>(service: &S, command: EmpresaCommand, out: Output) -> anyhow::Result<()>
where
  S: EmpresaService,
{
  match command {
    EmpresaCommand::Create { fields, domicilio } => {
      let mut empresa = Empresa::default();
      fields.apply(&mut empresa);
      if !domicilio.is_empty() {
        let mut d = DomicilioFiscal::default();
        domicilio.apply(&mut d);
        empresa.domicilio_fiscal = Some(d);
      }
      let id = service.insertar(empresa).await?;
      out.created("empresa", id)
    }
    EmpresaCommand::Get { id } => {
      let empresa = service.get_by_id(id).await?.ok_or_else(|| missing("empresa", id))?;
      out.one(&empresa)
    }
    EmpresaCommand::ByCuit { cuit } => {
      let empresa = service
        .buscar_por_cuit(&cuit)
        .await?
        .ok_or_else(|| missing("empresa", cuit.trim()))?;
      out.one(&empresa)
    }
    EmpresaCommand::ByRazonSocial { razon_social } => {
      let empresa = service
        .buscar_por_razon_social(&razon_social)
        .await?
        .ok_or_else(|| missing("empresa", razon_social.trim()))?;
      out.one(&empresa)
    }
    EmpresaCommand::List => out.many(&service.get_all().await?),
    EmpresaCommand::Update { id, fields, domicilio } => {
      let mut empresa = service.get_by_id(id).await?.ok_or_else(|| missing("empresa", id))?;
      fields.apply(&mut empresa);
      if !domicilio.is_empty() {
        match empresa.domicilio_fiscal.as_mut() {
          Some(d) => domicilio.apply(d),
          None => tracing::warn!(id, "empresa has no fiscal address; address flags ignored"),
        }
      }
      service.actualizar(empresa).await?;
      let updated = service.get_by_id(id).await?.ok_or_else(|| missing("empresa", id))?;
      out.one(&updated)
    }
    EmpresaCommand::Delete { id } => {
      service.eliminar(id).await?;
      out.deleted("empresa", id)
    }
  }
}

pub async fn domicilio<S>(
  service: &S,
  command: DomicilioCommand,
  out: Output,
) -> anyhow::Result<()>
where
  S: DomicilioFiscalService,
{
  match command {
    DomicilioCommand::Create { fields } => {
      let mut domicilio = DomicilioFiscal::default();
      fields.apply(&mut domicilio);
      let id = service.insertar(domicilio).await?;
      out.created("domicilio fiscal", id)
    }
    DomicilioCommand::Get { id } => {
      let domicilio = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| missing("domicilio fiscal", id))?;
      out.one(&domicilio)
    }
    DomicilioCommand::List => out.many(&service.get_all().await?),
    DomicilioCommand::Update { id, fields } => {
      let mut domicilio = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| missing("domicilio fiscal", id))?;
      fields.apply(&mut domicilio);
      service.actualizar(domicilio).await?;
      let updated = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| missing("domicilio fiscal", id))?;
      out.one(&updated)
    }
    DomicilioCommand::Delete { id } => {
      service.eliminar(id).await?;
      out.deleted("domicilio fiscal", id)
    }
  }
}

fn missing(what: &'static str, key: impl ToString) -> Missing {
  Missing { what, key: key.to_string() }
}

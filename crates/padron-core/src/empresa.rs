//! Empresa — a company identified by its CUIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domicilio::DomicilioFiscal;

/// A company. Reads from a store always come back hydrated: if a non-deleted
/// address references this empresa, it is in `domicilio_fiscal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empresa {
  /// Assigned by the store on creation; immutable afterwards.
  pub id:                  Option<i64>,
  #[serde(default)]
  pub eliminado:           bool,
  /// Legal name.
  pub razon_social:        String,
  /// Tax identifier, unique among non-deleted empresas.
  pub cuit:                String,
  pub actividad_principal: Option<String>,
  pub email:               Option<String>,
  pub domicilio_fiscal:    Option<DomicilioFiscal>,
}

impl Empresa {
  pub fn new(razon_social: impl Into<String>, cuit: impl Into<String>) -> Self {
    Self {
      razon_social: razon_social.into(),
      cuit: cuit.into(),
      ..Self::default()
    }
  }

  /// Attach an address to be created together with this empresa.
  pub fn with_domicilio(mut self, domicilio: DomicilioFiscal) -> Self {
    self.domicilio_fiscal = Some(domicilio);
    self
  }
}

impl fmt::Display for Empresa {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(id) = self.id {
      write!(f, "#{id} ")?;
    }
    write!(f, "{} [CUIT {}]", self.razon_social, self.cuit)?;
    if let Some(actividad) = &self.actividad_principal {
      write!(f, ", {actividad}")?;
    }
    if let Some(email) = &self.email {
      write!(f, ", {email}")?;
    }
    match &self.domicilio_fiscal {
      Some(d) => write!(f, " | {d}"),
      None => f.write_str(" | no fiscal address"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serialises_with_nested_domicilio() {
    let e = Empresa::new("Acme SA", "30-11111111-2")
      .with_domicilio(DomicilioFiscal::new("Main", 100, "BA", "BA", "AR"));

    let json = serde_json::to_value(&e).unwrap();
    assert_eq!(json["razon_social"], "Acme SA");
    assert_eq!(json["domicilio_fiscal"]["ciudad"], "BA");
    assert_eq!(json["eliminado"], false);
  }

  #[test]
  fn display_summary() {
    let mut e = Empresa::new("Acme SA", "30-11111111-2");
    e.id = Some(1);
    e.email = Some("a@acme.com".into());
    assert_eq!(
      e.to_string(),
      "#1 Acme SA [CUIT 30-11111111-2], a@acme.com | no fiscal address"
    );
  }
}

//! DomicilioFiscal — the fiscal address owned by at most one [`Empresa`].
//!
//! [`Empresa`]: crate::empresa::Empresa

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fiscal address. Never physically removed; `eliminado` marks a logical
/// deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomicilioFiscal {
  /// Assigned by the store on creation.
  pub id:            Option<i64>,
  #[serde(default)]
  pub eliminado:     bool,
  pub calle:         String,
  pub numero:        Option<i32>,
  pub ciudad:        String,
  pub provincia:     String,
  pub codigo_postal: Option<String>,
  pub pais:          String,
  /// Foreign key to the owning empresa. Only the relationship operation sets
  /// it; creation always stores `NULL`.
  pub empresa_id:    Option<i64>,
}

impl DomicilioFiscal {
  pub fn new(
    calle: impl Into<String>,
    numero: i32,
    ciudad: impl Into<String>,
    provincia: impl Into<String>,
    pais: impl Into<String>,
  ) -> Self {
    Self {
      calle: calle.into(),
      numero: Some(numero),
      ciudad: ciudad.into(),
      provincia: provincia.into(),
      pais: pais.into(),
      ..Self::default()
    }
  }
}

impl fmt::Display for DomicilioFiscal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(id) = self.id {
      write!(f, "#{id} ")?;
    }
    write!(f, "{} ", self.calle)?;
    match self.numero {
      Some(n) => write!(f, "{n}")?,
      None => f.write_str("s/n")?,
    }
    write!(f, ", {}, {}", self.ciudad, self.provincia)?;
    if let Some(cp) = self.codigo_postal.as_deref().filter(|cp| !cp.is_empty()) {
      write!(f, " ({cp})")?;
    }
    write!(f, ", {}", self.pais)
  }
}

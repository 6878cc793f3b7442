//! Field rules for [`Empresa`] and [`DomicilioFiscal`].
//!
//! Every rule is a pure function; services run them before touching storage.
//! Lengths are counted in characters, and "blank" means empty after trimming.

use crate::{
  Result, ValidationError, Violation,
  domicilio::DomicilioFiscal,
  empresa::Empresa,
};

pub const RAZON_SOCIAL_MAX: usize = 120;
pub const CUIT_MAX: usize = 13;
pub const ACTIVIDAD_PRINCIPAL_MAX: usize = 80;
pub const EMAIL_MAX: usize = 120;

pub const CALLE_MAX: usize = 100;
pub const CIUDAD_MAX: usize = 80;
pub const PROVINCIA_MAX: usize = 80;
pub const CODIGO_POSTAL_MAX: usize = 10;
pub const PAIS_MAX: usize = 80;

/// A non-blank value of at most `max` characters.
pub fn required(field: &'static str, value: &str, max: usize) -> Result<()> {
  if value.trim().is_empty() {
    return Err(ValidationError::required(field));
  }
  max_len(field, value, max)
}

/// An absent value, or one of at most `max` characters.
pub fn optional(field: &'static str, value: Option<&str>, max: usize) -> Result<()> {
  match value {
    Some(v) => max_len(field, v, max),
    None => Ok(()),
  }
}

fn max_len(field: &'static str, value: &str, max: usize) -> Result<()> {
  if value.chars().count() > max {
    return Err(ValidationError::new(field, Violation::TooLong { max }));
  }
  Ok(())
}

/// Optional email: bounded length, and must contain `@` unless blank.
pub fn email(value: Option<&str>) -> Result<()> {
  optional("email", value, EMAIL_MAX)?;
  match value {
    Some(v) if !v.trim().is_empty() && !v.contains('@') => {
      Err(ValidationError::new("email", Violation::InvalidFormat))
    }
    _ => Ok(()),
  }
}

/// Trim a lookup key, rejecting blank input.
pub fn search_key<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(ValidationError::required(field));
  }
  Ok(trimmed)
}

pub fn empresa(e: &Empresa) -> Result<()> {
  required("razon_social", &e.razon_social, RAZON_SOCIAL_MAX)?;
  required("cuit", &e.cuit, CUIT_MAX)?;
  optional(
    "actividad_principal",
    e.actividad_principal.as_deref(),
    ACTIVIDAD_PRINCIPAL_MAX,
  )?;
  email(e.email.as_deref())
}

pub fn domicilio_fiscal(d: &DomicilioFiscal) -> Result<()> {
  required("calle", &d.calle, CALLE_MAX)?;
  if d.numero.is_none() {
    return Err(ValidationError::required("numero"));
  }
  required("ciudad", &d.ciudad, CIUDAD_MAX)?;
  required("provincia", &d.provincia, PROVINCIA_MAX)?;
  optional("codigo_postal", d.codigo_postal.as_deref(), CODIGO_POSTAL_MAX)?;
  required("pais", &d.pais, PAIS_MAX)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn acme() -> Empresa {
    let mut e = Empresa::new("Acme SA", "30-11111111-2");
    e.email = Some("a@acme.com".into());
    e
  }

  fn main_street() -> DomicilioFiscal {
    DomicilioFiscal::new("Main", 100, "BA", "BA", "AR")
  }

  #[test]
  fn valid_empresa_passes() {
    assert_eq!(empresa(&acme()), Ok(()));
  }

  #[test]
  fn blank_razon_social_is_required() {
    let e = Empresa { razon_social: "   ".into(), ..acme() };
    assert_eq!(empresa(&e), Err(ValidationError::required("razon_social")));
  }

  #[test]
  fn cuit_longer_than_13_rejected() {
    let e = Empresa { cuit: "30-111111111-22".into(), ..acme() };
    assert_eq!(
      empresa(&e).unwrap_err().violation,
      Violation::TooLong { max: CUIT_MAX }
    );
  }

  #[test]
  fn email_without_at_is_invalid_format() {
    let e = Empresa { email: Some("not-an-email".into()), ..acme() };
    let err = empresa(&e).unwrap_err();
    assert_eq!(err.field, "email");
    assert_eq!(err.violation, Violation::InvalidFormat);
  }

  #[test]
  fn blank_email_is_accepted() {
    let e = Empresa { email: Some("  ".into()), ..acme() };
    assert_eq!(empresa(&e), Ok(()));
  }

  #[test]
  fn length_counts_characters_not_bytes() {
    // 120 two-byte characters.
    let e = Empresa { razon_social: "ñ".repeat(RAZON_SOCIAL_MAX), ..acme() };
    assert_eq!(empresa(&e), Ok(()));

    let e = Empresa { razon_social: "ñ".repeat(RAZON_SOCIAL_MAX + 1), ..acme() };
    assert!(empresa(&e).is_err());
  }

  #[test]
  fn calle_of_101_characters_rejected() {
    let d = DomicilioFiscal { calle: "x".repeat(101), ..main_street() };
    let err = domicilio_fiscal(&d).unwrap_err();
    assert_eq!(err.field, "calle");
    assert_eq!(err.violation, Violation::TooLong { max: 100 });
  }

  #[test]
  fn missing_numero_rejected() {
    let d = DomicilioFiscal { numero: None, ..main_street() };
    assert_eq!(domicilio_fiscal(&d), Err(ValidationError::required("numero")));
  }

  #[test]
  fn codigo_postal_is_optional_but_bounded() {
    assert_eq!(domicilio_fiscal(&main_street()), Ok(()));

    let d = DomicilioFiscal {
      codigo_postal: Some("12345678901".into()),
      ..main_street()
    };
    assert_eq!(domicilio_fiscal(&d).unwrap_err().field, "codigo_postal");
  }

  #[test]
  fn search_key_trims_and_rejects_blank() {
    assert_eq!(search_key("cuit", "  30-1  "), Ok("30-1"));
    assert_eq!(search_key("cuit", " \t"), Err(ValidationError::required("cuit")));
  }

  #[test]
  fn error_message_names_field() {
    let err = ValidationError::new("calle", Violation::TooLong { max: 100 });
    assert_eq!(err.to_string(), "calle exceeds 100 characters");
  }
}

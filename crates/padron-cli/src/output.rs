//! Rendering of results on stdout.

use std::fmt::Display;

use serde::Serialize;

/// Pretty JSON by default; the one-line `Display` form with `--plain`.
#[derive(Debug, Clone, Copy)]
pub struct Output {
  pub plain: bool,
}

impl Output {
  pub fn one<T: Serialize + Display>(&self, value: &T) -> anyhow::Result<()> {
    if self.plain {
      println!("{value}");
    } else {
      println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
  }

  pub fn many<T: Serialize + Display>(&self, values: &[T]) -> anyhow::Result<()> {
    if self.plain {
      for value in values {
        println!("{value}");
      }
    } else {
      println!("{}", serde_json::to_string_pretty(values)?);
    }
    Ok(())
  }

  /// Report a newly created record.
  pub fn created(&self, what: &str, id: i64) -> anyhow::Result<()> {
    if self.plain {
      println!("created {what} {id}");
    } else {
      println!("{}", serde_json::json!({ "id": id }));
    }
    Ok(())
  }

  pub fn deleted(&self, what: &str, id: i64) -> anyhow::Result<()> {
    if self.plain {
      println!("deleted {what} {id}");
    } else {
      println!("{}", serde_json::json!({ "id": id, "eliminado": true }));
    }
    Ok(())
  }
}

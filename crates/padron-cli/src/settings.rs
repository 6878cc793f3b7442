//! Runtime settings, read from an optional TOML file and `PADRON_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
  /// SQLite database file; created on first use.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf { PathBuf::from("padron.db") }

impl Settings {
  pub fn load(config_path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(config_path).required(false))
      .add_source(config::Environment::with_prefix("PADRON"))
      .build()
      .with_context(|| format!("failed to read config file {}", config_path.display()))?
      .try_deserialize()
      .context("failed to deserialise settings")
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let settings = Settings::load(Path::new("does-not-exist.toml")).unwrap();
    assert_eq!(settings.store_path, PathBuf::from("padron.db"));
  }

  #[test]
  fn relative_path_left_alone() {
    assert_eq!(expand_tilde(Path::new("data/padron.db")), PathBuf::from("data/padron.db"));
  }
}

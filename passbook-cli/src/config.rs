use anyhow::{Context, Result};
use passbook_ingest::{ProfileOverrides, StatementText};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_passbook_home;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reconcile: ReconcileSection,
    pub layout: LayoutSection,
    pub text: TextSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileSection {
    /// Absolute balance residual accepted as a match. Unset = bank default.
    pub tolerance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSection {
    /// Extra monetary columns printed after the running balance
    pub trailing_money_columns: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSection {
    /// Extracted text shorter than this is treated as a failed extraction
    pub min_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reconcile: ReconcileSection { tolerance: None },
            layout: LayoutSection {
                trailing_money_columns: None,
            },
            text: TextSection {
                min_chars: StatementText::MIN_CHARS,
            },
        }
    }
}

impl Config {
    pub fn overrides(&self) -> ProfileOverrides {
        ProfileOverrides {
            tolerance: self.reconcile.tolerance,
            trailing_money_columns: self.layout.trailing_money_columns,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_passbook_home()?.join("config.toml"))
}

/// Load from `path` (or the default location). A missing file means defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: Option<&Path>) -> Result<()> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

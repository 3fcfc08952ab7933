// src/config.rs

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use crate::i18n::Language;

fn default_source() -> String {
    "products.csv".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_title() -> String {
    "Deal Shelf".to_string()
}

/// Build settings, read from an optional YAML file and overridden by flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Catalog CSV: a local path or an http(s) URL.
    #[serde(default = "default_source")]
    pub source: String,
    /// Where the rendered page is written.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub language: Language,
    /// Only products whose name contains this term are rendered.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
            language: Language::default(),
            search: None,
            title: default_title(),
        }
    }
}

/// Values given on the command line; each `Some` wins over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<String>,
    pub output: Option<PathBuf>,
    pub language: Option<Language>,
    pub search: Option<String>,
}

impl Config {
    /// Parse a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        // an empty file deserializes to unit, not a map
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Self = serde_yaml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// File (if any) first, then flags on top.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        cfg.apply(overrides);
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(source) = overrides.source {
            self.source = source;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(language) = overrides.language {
            self.language = language;
        }
        if overrides.search.is_some() {
            self.search = overrides.search;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            bail!("`source` must name a catalog file or URL");
        }
        if self.output.as_os_str().is_empty() {
            bail!("`output` must not be empty");
        }
        Ok(())
    }
}

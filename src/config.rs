use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::counter::{Counter, CounterPolicy};
use crate::sort::SortStrategy;
use crate::zip::ZipPolicy;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings from {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported settings format: {0}")]
    UnsupportedFormat(String),
}

/// Library-wide defaults for the policy-driven operations.
///
/// Every section is optional; a missing section or field falls back to its
/// default (`strict` zips, `stable` sorts, negative counter steps allowed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub zip: ZipPolicy,
    pub sort: SortStrategy,
    pub counter: CounterPolicy,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads settings, choosing the parser from the file extension. Files
    /// without a known extension are parsed as JSON if they open with `{`,
    /// otherwise as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let settings = match format.as_deref() {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            Some(ext @ ("yaml" | "yml" | "ini")) => {
                return Err(ConfigError::UnsupportedFormat(ext.to_string()));
            }
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json_str(&content)?
                } else {
                    Self::from_toml_str(&content)?
                }
            }
        };

        log::debug!("loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    pub fn zip_combine<A, B, R, F>(&self, left: A, right: B, combine: F) -> crate::Result<Vec<R>>
    where
        A: IntoIterator,
        B: IntoIterator,
        F: FnMut(A::Item, B::Item) -> R,
    {
        crate::zip::zip_combine(left, right, combine, self.zip)
    }

    pub fn sort_by<T, F>(&self, seq: &mut [T], less: F)
    where
        F: Fn(&T, &T) -> bool,
    {
        crate::sort::sort_with_strategy(seq, less, self.sort);
    }

    pub fn make_counter(&self, start: i64, step: i64) -> crate::Result<Counter> {
        self.counter.build(start, step)
    }
}

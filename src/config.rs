use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{GraphError, Result};

/// Name of the optional configuration file looked up next to the dataset.
pub const CONFIG_FILE: &str = "correspondence.toml";

/// Configuration loaded from `correspondence.toml` in the dataset's directory.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// Field delimiter of the edge CSV. Gephi dynamic-edge exports use `;`.
    pub delimiter: char,
    pub columns: ColumnNames,
}

/// Header names of the four columns an edge record is built from.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColumnNames {
    pub source: String,
    pub target: String,
    pub id: String,
    pub year: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            columns: ColumnNames::default(),
        }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            source: "source".to_owned(),
            target: "target".to_owned(),
            id: "edge.id".to_owned(),
            year: "onset".to_owned(),
        }
    }
}

impl DatasetConfig {
    /// Load configuration from `correspondence.toml` in `dir`.
    ///
    /// Returns the defaults if the file does not exist or cannot be parsed.
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(err) => {
                    warn!(
                        path = %config_path.display(),
                        "failed to parse config: {err}. Using defaults."
                    );
                    Self::default()
                }
            },
            Err(err) => {
                warn!(
                    path = %config_path.display(),
                    "failed to read config: {err}. Using defaults."
                );
                Self::default()
            }
        }
    }

    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(GraphError::InvalidDelimiter(self.delimiter))
        }
    }
}

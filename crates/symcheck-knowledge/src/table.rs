//! TOML-backed knowledge table.
//!
//! `KnowledgeTable` loads a `KnowledgeConfig` from a TOML string or file,
//! validates it, and indexes it by lowercase symptom name. It implements the
//! `KnowledgeSource` trait from symcheck-core.
//!
//! The seed table ships inside the binary (`data/symptoms.toml`) and is
//! parsed at most once per process by `KnowledgeTable::builtin`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::{debug, info};

use symcheck_contracts::{
    error::{SymcheckError, SymcheckResult},
    knowledge::SymptomEntry,
};
use symcheck_core::traits::KnowledgeSource;

use crate::config::KnowledgeConfig;

/// Highest `base_probability` a table may declare.
pub const MAX_BASE_PROBABILITY: u8 = 100;

/// The seed table embedded at compile time.
const BUILTIN_TABLE: &str = include_str!("../data/symptoms.toml");

static BUILTIN: OnceLock<Arc<KnowledgeTable>> = OnceLock::new();

/// An immutable, case-insensitive symptom table.
///
/// ```rust,ignore
/// use symcheck_knowledge::KnowledgeTable;
///
/// let table = KnowledgeTable::from_file(Path::new("clinic/symptoms.toml"))?;
/// ```
#[derive(Debug)]
pub struct KnowledgeTable {
    entries: Vec<SymptomEntry>,
    index: HashMap<String, usize>,
}

impl KnowledgeTable {
    /// Parse `s` as TOML and build a table.
    ///
    /// Returns `SymcheckError::ConfigError` if the TOML is malformed, does not
    /// match the `KnowledgeConfig` schema, or fails validation.
    pub fn from_toml_str(s: &str) -> SymcheckResult<Self> {
        let config: KnowledgeConfig =
            toml::from_str(s).map_err(|e| SymcheckError::ConfigError {
                reason: format!("failed to parse knowledge TOML: {}", e),
            })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a knowledge table.
    pub fn from_file(path: &Path) -> SymcheckResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SymcheckError::ConfigError {
            reason: format!("failed to read knowledge file '{}': {}", path.display(), e),
        })?;
        let table = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            symptoms = table.len(),
            "loaded knowledge table"
        );
        Ok(table)
    }

    /// Validate `config` and index its entries.
    pub fn from_config(config: KnowledgeConfig) -> SymcheckResult<Self> {
        config.validate()?;

        let index = config
            .symptoms
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.name.to_lowercase(), i))
            .collect();

        debug!(symptoms = config.symptoms.len(), "knowledge table indexed");

        Ok(Self {
            entries: config.symptoms,
            index,
        })
    }

    /// The seed table shipped with the engine, shared process-wide.
    ///
    /// # Panics
    ///
    /// Panics if the embedded table fails to parse, which the crate's own
    /// tests rule out for every release.
    pub fn builtin() -> Arc<KnowledgeTable> {
        BUILTIN
            .get_or_init(|| {
                Arc::new(
                    Self::from_toml_str(BUILTIN_TABLE)
                        .expect("embedded symptom table must be valid"),
                )
            })
            .clone()
    }

    /// Number of symptoms in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical symptom names in table order.
    pub fn symptom_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}

impl KnowledgeSource for KnowledgeTable {
    fn lookup(&self, symptom: &str) -> Option<&SymptomEntry> {
        self.index
            .get(&symptom.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    fn entries(&self) -> Vec<&SymptomEntry> {
        self.entries.iter().collect()
    }
}

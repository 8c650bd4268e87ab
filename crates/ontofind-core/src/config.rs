//! Configuration types for ontofind.
//!
//! [`Config::load`] reads `~/.config/ontofind/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::from_file`] layers an
//! explicit file over the defaults. [`Config::defaults`] returns the same
//! defaults without touching the filesystem (useful in tests).

use crate::error::{FinderError, Result};
use crate::vocab::{LabelProperty, Prefixes, DEFAULT_LABEL_PROPERTIES};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[finder]
label_properties = [
    "rdfs:label",
    "oboInOwl:hasSynonym",
    "oboInOwl:hasExactSynonym",
    "oboInOwl:hasNarrowSynonym",
    "oboInOwl:hasBroadSynonym",
    "oboInOwl:hasRelatedSynonym",
    "skos:prefLabel",
    "skos:altLabel",
    "skos:hiddenLabel",
]

# Extra CURIE prefixes, e.g.
# ex = "http://example.org/terms#"
[prefixes]

[output]
show_obo_ids = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/ontofind/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub finder: FinderConfig,
    #[serde(default)]
    pub prefixes: BTreeMap<String, String>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[finder]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FinderConfig {
    /// CURIEs or full IRIs of the annotation properties to index.
    #[serde(default = "default_label_properties")]
    pub label_properties: Vec<String>,
}

fn default_label_properties() -> Vec<String> {
    DEFAULT_LABEL_PROPERTIES.iter().map(|p| p.to_string()).collect()
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            label_properties: default_label_properties(),
        }
    }
}

impl FinderConfig {
    /// Resolve the configured identifiers into label properties.
    pub fn resolve(&self, prefixes: &Prefixes) -> Result<Vec<LabelProperty>> {
        self.label_properties
            .iter()
            .map(|id| LabelProperty::resolve(id, prefixes))
            .collect()
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_show_obo_ids")]
    pub show_obo_ids: bool,
}

fn default_show_obo_ids() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_obo_ids: default_show_obo_ids(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/ontofind/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = config_path();

        if !path.exists() {
            write_default(&path).map_err(|source| FinderError::ConfigIo {
                path: path.clone(),
                source,
            })?;
        }

        Self::layered(&path, false)
    }

    /// Load an explicit config file, layered on top of the built-in defaults.
    /// The file must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::layered(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Built-in prefixes plus the `[prefixes]` section.
    pub fn prefixes(&self) -> Prefixes {
        Prefixes::with_extra(self.prefixes.clone())
    }

    /// The textual identifier properties to index.
    pub fn label_properties(&self) -> Result<Vec<LabelProperty>> {
        self.finder.resolve(&self.prefixes())
    }

    fn layered(path: &Path, required: bool) -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("ontofind")
        .join("config.toml")
}

fn write_default(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG.trim_start())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Named anchor dates loaded from a TOML file.
//!
//! The file maps preset names to the Gregorian date of Month 1, Day 1, and
//! may name one of them as the default:
//!
//! ```toml
//! default = "2024"
//!
//! [presets]
//! "2024" = "2024-03-25"
//! "2025" = "2025-03-20"
//! ```
use crate::calendar::parse_date;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::Date;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetsFile {
    default: Option<String>,
    #[serde(default)]
    presets: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Presets {
    default: Option<String>,
    anchors: BTreeMap<String, Date>,
}

impl Presets {
    /// Returns `<config dir>/tekufah/presets.toml`, or `None` if the platform
    /// has no config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tekufah").join("presets.toml"))
    }

    /// # Errors
    ///
    /// Returns [`PresetError::Read`] if the file cannot be read, or any of
    /// the errors of [`Presets::from_toml_str()`].
    pub fn load(path: &Path) -> Result<Presets, PresetError> {
        tracing::debug!(path = %path.display(), "Loading anchor presets");
        let contents = std::fs::read_to_string(path).map_err(|source| PresetError::Read {
            path: path.to_owned(),
            source,
        })?;
        let presets = Presets::from_toml_str(&contents)?;
        tracing::debug!(count = presets.anchors.len(), "Loaded anchor presets");
        Ok(presets)
    }

    /// # Errors
    ///
    /// Returns [`PresetError::Parse`] if `s` is not a valid presets document,
    /// [`PresetError::InvalidDate`] if a preset's value is not a `YYYY-MM-DD`
    /// date, or [`PresetError::UnknownDefault`] if `default` names a preset
    /// that is not defined.
    pub fn from_toml_str(s: &str) -> Result<Presets, PresetError> {
        let file = toml::from_str::<PresetsFile>(s)?;
        let mut anchors = BTreeMap::new();
        for (name, value) in file.presets {
            match parse_date(&value) {
                Ok(date) => {
                    anchors.insert(name, date);
                }
                Err(source) => {
                    return Err(PresetError::InvalidDate {
                        name,
                        value,
                        source,
                    })
                }
            }
        }
        if let Some(default) = file.default.as_ref() {
            if !anchors.contains_key(default) {
                return Err(PresetError::UnknownDefault(default.clone()));
            }
        }
        Ok(Presets {
            default: file.default,
            anchors,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<Date> {
        self.anchors.get(name).copied()
    }

    pub fn default_name(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn default_anchor(&self) -> Option<Date> {
        self.default_name().and_then(|name| self.get(name))
    }

    /// Returns the latest anchor falling on or before `target`.
    ///
    /// With one anchor stored per Gregorian year, this is the anchor of the
    /// cycle `target` belongs to, provided the anchors are no more than 364
    /// days apart.
    pub fn anchor_for(&self, target: Date) -> Option<Date> {
        self.anchors.values().copied().filter(|&a| a <= target).max()
    }

    /// Iterates over `(name, anchor)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Date)> + '_ {
        self.anchors.iter().map(|(name, &date)| (name.as_str(), date))
    }
}

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to read presets file {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse presets file")]
    Parse(#[from] toml::de::Error),
    #[error("preset {name:?} has invalid anchor date {value:?}")]
    InvalidDate {
        name: String,
        value: String,
        source: time::error::Parse,
    },
    #[error("default preset {0:?} is not defined")]
    UnknownDefault(String),
}

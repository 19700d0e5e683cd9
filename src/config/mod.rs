pub mod models;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, MajorsConfigItem, RentalDaysConfigItem, ZonesConfigItem,
};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    Zones,
    Majors,
    MinRentalDays,
    MaxRentalDays,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub zones: ZonesConfigItem,
    #[serde(default)]
    pub majors: MajorsConfigItem,
    #[serde(default = "RentalDaysConfigItem::min_default")]
    pub min_rental_days: RentalDaysConfigItem,
    #[serde(default = "RentalDaysConfigItem::max_default")]
    pub max_rental_days: RentalDaysConfigItem,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            zones: ZonesConfigItem::default(),
            majors: MajorsConfigItem::default(),
            min_rental_days: RentalDaysConfigItem::min_default(),
            max_rental_days: RentalDaysConfigItem::max_default(),
        }
    }
}

/// Vocabulary and rental rules consulted by the validators. Loaded once and
/// never mutated afterwards; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Config {
    path: Option<PathBuf>,
    data: ConfigFile,
}

/// Key, description and current value of every setting, for `--show-config`.
#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
    pub fn get(&self, index: usize) -> Option<&(String, String, String)> {
        self.0.get(index)
    }
}
impl fmt::Display for ConfigRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.iter().map(|(key, _, _)| key.len()).max().unwrap_or(0);
        for (idx, (key, description, value)) in self.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{key:<width$}  {value}  ({description})")?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            data: ConfigFile::default(),
        }
    }
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)?;
        let data: ConfigFile = serde_json::from_str(&text)?;
        Self::from_file(data, Some(path))
    }

    pub fn from_file(data: ConfigFile, path: Option<PathBuf>) -> Result<Self> {
        Self::validate(&data)?;
        Ok(Self { path, data })
    }

    fn validate(data: &ConfigFile) -> Result<()> {
        let zones = data.zones.get_value();
        if zones.is_empty() {
            return Err(Error::config("At least one zone must be configured."));
        }
        if let Some(bad) = zones
            .iter()
            .find(|z| z.trim().is_empty() || z.contains(char::is_whitespace))
        {
            return Err(Error::config(format!(
                "Zone name '{bad}' must be non-blank and contain no whitespace."
            )));
        }
        if data.majors.get_value().iter().all(|m| m.trim().is_empty()) {
            return Err(Error::config("At least one major must be configured."));
        }
        let min = *data.min_rental_days.get_value();
        let max = *data.max_rental_days.get_value();
        if min < 0 || min > max {
            return Err(Error::config(format!(
                "Rental days must satisfy 0 <= min <= max, got min {min} and max {max}."
            )));
        }
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn zones(&self) -> &[String] {
        self.data.zones.get_value()
    }
    pub fn majors(&self) -> &[String] {
        self.data.majors.get_value()
    }
    pub fn min_rental_days(&self) -> i64 {
        *self.data.min_rental_days.get_value()
    }
    pub fn max_rental_days(&self) -> i64 {
        *self.data.max_rental_days.get_value()
    }

    pub fn is_known_zone(&self, raw: &str) -> bool {
        let raw = raw.trim();
        !raw.is_empty() && self.zones().iter().any(|z| z.eq_ignore_ascii_case(raw))
    }

    pub fn is_known_major(&self, raw: &str) -> bool {
        let raw = raw.trim();
        !raw.is_empty() && self.majors().iter().any(|m| m.eq_ignore_ascii_case(raw))
    }

    pub fn rows(&self) -> ConfigRows {
        let mut rows = Vec::new();
        for key in ConfigKey::iter() {
            match key {
                ConfigKey::Zones => rows.push((
                    key.to_string(),
                    self.data.zones.description().to_string(),
                    self.zones().join(", "),
                )),
                ConfigKey::Majors => rows.push((
                    key.to_string(),
                    self.data.majors.description().to_string(),
                    self.majors().join(", "),
                )),
                ConfigKey::MinRentalDays => rows.push((
                    key.to_string(),
                    self.data.min_rental_days.description().to_string(),
                    self.min_rental_days().to_string(),
                )),
                ConfigKey::MaxRentalDays => rows.push((
                    key.to_string(),
                    self.data.max_rental_days.description().to_string(),
                    self.max_rental_days().to_string(),
                )),
            }
        }
        ConfigRows(rows)
    }
}

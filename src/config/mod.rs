use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::BudgetError,
    utils::paths::{app_data_dir, ensure_dir},
};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Display preferences for the terminal presenter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub plain_mode: bool,
    pub high_contrast_mode: bool,
    pub show_month: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            plain_mode: false,
            high_contrast_mode: false,
            show_month: true,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 5] = [
        "grouping_separator",
        "decimal_separator",
        "plain_mode",
        "high_contrast_mode",
        "show_month",
    ];

    /// Updates a single preference from its textual form.
    /// The config is left untouched when the new value is rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), BudgetError> {
        let mut next = self.clone();
        match key {
            "grouping_separator" => next.grouping_separator = parse_char(key, value)?,
            "decimal_separator" => next.decimal_separator = parse_char(key, value)?,
            "plain_mode" => next.plain_mode = parse_bool(key, value)?,
            "high_contrast_mode" => next.high_contrast_mode = parse_bool(key, value)?,
            "show_month" => next.show_month = parse_bool(key, value)?,
            other => {
                return Err(BudgetError::ConfigError(format!(
                    "unknown setting `{}` (expected one of: {})",
                    other,
                    Self::KEYS.join(", ")
                )))
            }
        }
        if next.grouping_separator == next.decimal_separator {
            return Err(BudgetError::ConfigError(
                "grouping and decimal separators must differ".into(),
            ));
        }
        *self = next;
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("grouping_separator", self.grouping_separator.to_string()),
            ("decimal_separator", self.decimal_separator.to_string()),
            ("plain_mode", self.plain_mode.to_string()),
            ("high_contrast_mode", self.high_contrast_mode.to_string()),
            ("show_month", self.show_month.to_string()),
        ]
    }
}

fn parse_char(key: &str, value: &str) -> Result<char, BudgetError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_ascii_digit() => Ok(ch),
        _ => Err(BudgetError::ConfigError(format!(
            "`{}` expects a single non-digit character, got `{}`",
            key, value
        ))),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, BudgetError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(BudgetError::ConfigError(format!(
            "`{}` expects true or false, got `{}`",
            key, value
        ))),
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BudgetError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BudgetError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, BudgetError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), BudgetError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

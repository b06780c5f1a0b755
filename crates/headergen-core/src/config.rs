//! Header configuration loaded from a key-value settings store.
//!
//! Recognized keys: `author`, `email`, `date_format`, `print_email`, `print_date`,
//! `print_filename`, `allow_rev`. Values follow the truthiness rules of the
//! settings files they come from: `null`, `false`, `0`, `""`, `[]` and `{}` are
//! false, everything else is true.

use crate::error::ConfigError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Environment variable naming a settings file.
pub const CONFIG_ENV: &str = "HEADERGEN_CONFIG";

/// Read-only key lookup over a settings source.
pub trait Settings {
    fn get(&self, key: &str) -> Option<&Value>;
}

impl Settings for Map<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        Map::get(self, key)
    }
}

/// Settings backed by a JSON object, e.g. a `.sublime-settings` style file.
#[derive(Debug, Default, Clone)]
pub struct JsonSettings {
    values: Map<String, Value>,
}

impl JsonSettings {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        match value {
            Value::Object(values) => Ok(Self { values }),
            _ => Err(ConfigError::NotAnObject(path.to_path_buf())),
        }
    }

    /// Override a single key.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }
}

impl Settings for JsonSettings {
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

/// Default settings file: `$HEADERGEN_CONFIG`, else `<config dir>/headergen/settings.json`.
///
/// Returns `None` when neither is set or the default file does not exist.
pub fn default_settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let candidate = dirs::config_dir()?.join("headergen").join("settings.json");
    candidate.is_file().then_some(candidate)
}

/// Configuration for one invocation. The date is rendered at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub author: String,
    pub email: String,
    pub date: String,
    pub print_filename: bool,
    pub print_email: bool,
    pub print_date: bool,
    pub allow_revision: bool,
}

impl Config {
    /// Load from `settings`, rendering the date against the local clock.
    pub fn load(settings: &dyn Settings) -> Self {
        Self::load_at(settings, &Local::now())
    }

    /// Load from `settings`, rendering the date against `now`.
    pub fn load_at<Tz>(settings: &dyn Settings, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let format = settings
            .get("date_format")
            .filter(|v| truthy(v))
            .map(text)
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());

        Self {
            author: settings.get("author").map(text).unwrap_or_default(),
            email: settings.get("email").map(text).unwrap_or_default(),
            date: format_date(now, &format),
            print_filename: flag(settings, "print_filename"),
            print_email: flag(settings, "print_email"),
            print_date: flag(settings, "print_date"),
            allow_revision: flag(settings, "allow_rev"),
        }
    }
}

/// Render `now` with a strftime pattern, falling back to the default pattern
/// when chrono rejects it.
pub fn format_date<Tz>(now: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let items: Vec<Item> = StrftimeItems::new(format).collect();
    if items.contains(&Item::Error) {
        tracing::warn!(format, "invalid date_format, using {}", DEFAULT_DATE_FORMAT);
        return now.format(DEFAULT_DATE_FORMAT).to_string();
    }
    now.format_with_items(items.iter()).to_string()
}

fn flag(settings: &dyn Settings, key: &str) -> bool {
    settings.get(key).is_some_and(truthy)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Interpolation text of a value; strings are taken verbatim.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

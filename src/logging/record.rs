//! Structured log records and severity levels.
//!
//! A [`Record`] is one log entry: a [`Level`], a message, and a JSON field
//! payload. Records render as single JSON lines with a `timestamp`, `level`,
//! and `message` alongside the caller's fields.

use std::fmt;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Severity attached to each record.
///
/// Levels order by severity (`Debug < Info < Warn < Error`). This crate does
/// no filtering; a record always carries its level as plain data and it is
/// up to consumers of the output to filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Uppercase name as it appears in rendered records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parse a level name, case-insensitively. `"warning"` is accepted as
    /// an alias for [`Level::Warn`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// A single structured log record.
#[derive(Debug, Clone)]
pub struct Record {
    /// Severity of this record.
    pub level: Level,
    /// Human-readable message.
    pub message: String,
    /// Caller-supplied fields. Conventionally a JSON object; anything else
    /// is nested under a `data` key when the record is rendered.
    pub fields: Value,
}

impl Record {
    /// Create a record.
    pub fn new(level: Level, message: impl Into<String>, fields: Value) -> Self {
        Self {
            level,
            message: message.into(),
            fields,
        }
    }

    /// Render as one JSON line.
    ///
    /// The line carries `timestamp` (RFC 3339 UTC, millisecond precision),
    /// `level`, and `message` merged with the record's fields. Those three
    /// keys are reserved and win over caller fields of the same name.
    ///
    /// Returns `None` if serialization fails; rendering never propagates an
    /// error.
    pub fn to_json_line(&self) -> Option<String> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let mut map = match &self.fields {
            Value::Object(fields) => fields.clone(),
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other.clone());
                map
            }
        };
        map.insert("timestamp".to_string(), Value::String(timestamp));
        map.insert(
            "level".to_string(),
            Value::String(self.level.as_str().to_string()),
        );
        map.insert(
            "message".to_string(),
            Value::String(self.message.clone()),
        );

        let Ok(line) = serde_json::to_string(&Value::Object(map)) else {
            return None;
        };
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_level_display_roundtrips_through_parse() {
        for level in [Level::Debug, Level::Info, Level::Warn, Level::Error] {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warn);
    }

    #[test]
    fn test_level_parse_rejects_unknown_names() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), "unknown log level: verbose");
    }

    #[test]
    fn test_levels_order_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_record_renders_as_json_line() {
        let record = Record::new(Level::Info, "started", json!({"port": 8080}));
        let line = record.to_json_line().unwrap();

        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["message"], "started");
        assert_eq!(value["port"], 8080);
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn test_record_nests_non_object_fields_under_data() {
        let record = Record::new(Level::Warn, "odd payload", json!("just a string"));
        let value: Value =
            serde_json::from_str(&record.to_json_line().unwrap()).unwrap();
        assert_eq!(value["data"], "just a string");
        assert_eq!(value["level"], "WARN");
    }

    #[test]
    fn test_record_with_null_fields_renders_bare() {
        let record = Record::new(Level::Debug, "no fields", Value::Null);
        let value: Value =
            serde_json::from_str(&record.to_json_line().unwrap()).unwrap();
        assert_eq!(value["message"], "no fields");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_reserved_keys_win_over_caller_fields() {
        let record = Record::new(
            Level::Error,
            "real message",
            json!({"message": "spoofed", "level": "fake"}),
        );
        let value: Value =
            serde_json::from_str(&record.to_json_line().unwrap()).unwrap();
        assert_eq!(value["message"], "real message");
        assert_eq!(value["level"], "ERROR");
    }
}

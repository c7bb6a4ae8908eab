//! Severity levels.
//!
//! Levels are an open integer scale. The named thresholds leave gaps so
//! that intermediate levels can be introduced without renumbering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Ordered severity of a log occurrence. Comparison is purely numeric.
/// The default is [`Level::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u16);

impl Level {
    /// Lowest possible level; a gate set to `ALL` lets everything through.
    pub const ALL: Level = Level(0);
    pub const DEBUG: Level = Level(2);
    pub const INFO: Level = Level(4);
    pub const WARN: Level = Level(6);
    pub const ERROR: Level = Level(8);
    pub const FATAL: Level = Level(1000);
    /// Highest possible level; a gate set to `NONE` rejects every named level.
    pub const NONE: Level = Level(2000);

    const NAMED: [(Level, &'static str); 7] = [
        (Level::ALL, "ALL"),
        (Level::DEBUG, "DEBUG"),
        (Level::INFO, "INFO"),
        (Level::WARN, "WARN"),
        (Level::ERROR, "ERROR"),
        (Level::FATAL, "FATAL"),
        (Level::NONE, "NONE"),
    ];

    /// Build a level from its raw value.
    pub const fn from_raw(value: u16) -> Self {
        Self(value)
    }

    /// Raw numeric value.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Upper-case name for the named thresholds, `None` for anything else.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(level, _)| *level == self)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "LEVEL({})", self.0),
        }
    }
}

/// Returned when a string names no known level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level `{0}`")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::NAMED
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(trimmed))
            .map(|(level, _)| *level)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(&name.to_ascii_lowercase()),
            None => serializer.serialize_u16(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Value(u16),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Name(name) => name.parse().map_err(serde::de::Error::custom),
            Raw::Value(value) => Ok(Level(value)),
        }
    }
}

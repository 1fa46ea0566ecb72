//! Stat kinds and levels.

use crate::error::PetError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pet level. Valid levels start at 1.
pub type Level = u32;

/// Stat values are plain `f64`.
pub type StatValue = f64;

/// The per-level stats a pet can be compared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Damage,
    Health,
}

impl StatKind {
    /// All stat kinds, in display order.
    pub const ALL: [StatKind; 2] = [StatKind::Damage, StatKind::Health];

    /// Lowercase name of this stat.
    pub fn as_str(self) -> &'static str {
        match self {
            StatKind::Damage => "damage",
            StatKind::Health => "health",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a level.
///
/// ```rust
/// use petstat::stat::validate_level;
///
/// assert_eq!(validate_level(3), Ok(3));
/// assert!(validate_level(0).is_err());
/// ```
pub fn validate_level(level: Level) -> Result<Level, PetError> {
    if level == 0 {
        return Err(PetError::InvalidLevel(level.to_string()));
    }
    Ok(level)
}

/// Validate a stat value. NaN and infinities are rejected.
pub fn validate_value(value: StatValue) -> Result<StatValue, PetError> {
    if !value.is_finite() {
        return Err(PetError::InvalidValue(value.to_string()));
    }
    Ok(value)
}

/// Parse a level typed by a user, e.g. from a text field.
///
/// ```rust
/// use petstat::stat::parse_level;
///
/// assert_eq!(parse_level(" 12 "), Ok(12));
/// assert!(parse_level("twelve").is_err());
/// assert!(parse_level("0").is_err());
/// ```
pub fn parse_level(input: &str) -> Result<Level, PetError> {
    let trimmed = input.trim();
    let level = trimmed
        .parse::<Level>()
        .map_err(|_| PetError::InvalidLevel(trimmed.to_string()))?;
    validate_level(level)
}

/// Parse a stat value typed by a user.
///
/// ```rust
/// use petstat::stat::parse_value;
///
/// assert_eq!(parse_value("12.5"), Ok(12.5));
/// assert!(parse_value("inf").is_err());
/// assert!(parse_value("").is_err());
/// ```
pub fn parse_value(input: &str) -> Result<StatValue, PetError> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<StatValue>()
        .map_err(|_| PetError::InvalidValue(trimmed.to_string()))?;
    validate_value(value)
}

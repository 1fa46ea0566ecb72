//! Pet names.
//!
//! A pet is identified by its display name. Names are shared through
//! `Arc<str>` because every ranking, series and table row carries one.

use crate::error::PetError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Name of a pet, used as its unique key.
///
/// Names from users or files go through [`EntityId::parse`], which trims
/// them and rejects blanks. Deserialization applies the same rule.
///
/// # Examples
///
/// ```rust
/// use petstat::EntityId;
///
/// let id: EntityId = serde_json::from_str("\" Fire Fox \"").unwrap();
/// assert_eq!(id, "Fire Fox".into());
/// assert!(serde_json::from_str::<EntityId>("\"  \"").is_err());
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntityId(Arc<str>);

impl EntityId {
    /// Wrap a name as-is. Use [`EntityId::parse`] for untrusted input.
    pub fn from_str(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Trim `input` and reject it if nothing is left.
    ///
    /// ```rust
    /// use petstat::{EntityId, PetError};
    ///
    /// assert_eq!(EntityId::parse("  Bat ").unwrap().as_str(), "Bat");
    /// assert_eq!(EntityId::parse("   "), Err(PetError::EmptyName));
    /// ```
    pub fn parse(input: &str) -> Result<Self, PetError> {
        match input.trim() {
            "" => Err(PetError::EmptyName),
            name => Ok(Self::from_str(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(name: &str) -> Self {
        Self::from_str(name)
    }
}

impl From<String> for EntityId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        EntityId::parse(&name).map_err(D::Error::custom)
    }
}

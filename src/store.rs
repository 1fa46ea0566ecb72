//! Persisted sample store.
//!
//! The store is a single JSON object mapping entity names to
//! `{ "level": value }` objects:
//!
//! ```text
//! { "Bat": { "1": 4.0, "2": 7.5 }, "Wolf": { "10": 120.0 } }
//! ```
//!
//! Export writes the map verbatim. Import rejects payloads that are not
//! shaped like this, but silently discards individual entries whose level
//! or value is unusable.

use crate::curve::SampleSet;
use crate::entity_id::EntityId;
use crate::error::PetError;
use crate::roster::Roster;
use crate::stat::{parse_level, validate_level, validate_value, Level, StatKind, StatValue};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Observed samples for one stat, keyed by entity name.
///
/// # Examples
///
/// ```rust
/// use petstat::SampleStore;
///
/// let store = SampleStore::from_json(r#"{"Bat": {"1": 4, "2": 7.5}}"#).unwrap();
/// let json = store.to_json().unwrap();
/// assert_eq!(SampleStore::from_json(&json).unwrap(), store);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SampleStore {
    entries: BTreeMap<EntityId, BTreeMap<Level, StatValue>>,
}

impl SampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an import payload.
    ///
    /// Fails with `MalformedImport` when the payload is not valid JSON,
    /// is not an object, or maps a name to something other than an
    /// object. Blank names, non-integer or zero levels, and non-numeric
    /// values are dropped.
    pub fn from_json(text: &str) -> Result<Self, PetError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|err| PetError::MalformedImport(err.to_string()))?;
        Self::from_value(value)
    }

    /// Build a store from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, PetError> {
        let root = match value {
            Value::Object(root) => root,
            other => {
                return Err(PetError::MalformedImport(format!(
                    "expected a JSON object, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut store = SampleStore::new();
        let mut discarded = 0usize;
        for (name, levels) in root {
            let levels = match levels {
                Value::Object(levels) => levels,
                other => {
                    return Err(PetError::MalformedImport(format!(
                        "samples for {:?} must be an object, found {}",
                        name,
                        json_kind(&other)
                    )))
                }
            };
            let Ok(id) = EntityId::parse(&name) else {
                discarded += levels.len();
                continue;
            };

            let samples = store.entries.entry(id).or_default();
            for (level, value) in levels {
                match (parse_level(&level), value.as_f64()) {
                    (Ok(level), Some(value)) if value.is_finite() => {
                        samples.insert(level, value);
                    }
                    _ => {
                        log::warn!("discarding sample {:?}: {} for {:?}", level, value, name);
                        discarded += 1;
                    }
                }
            }
        }

        log::debug!(
            "imported {} entities, discarded {} entries",
            store.entries.len(),
            discarded
        );
        Ok(store)
    }

    /// Serialize the store as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, PetError> {
        serde_json::to_string_pretty(self).map_err(|err| PetError::Export(err.to_string()))
    }

    /// Set one sample, replacing any earlier value at that level.
    ///
    /// Applies the same checks as import, so anything inserted here
    /// survives an export and re-import unchanged.
    pub fn insert(&mut self, name: &str, level: Level, value: StatValue) -> Result<(), PetError> {
        let id = EntityId::parse(name)?;
        let level = validate_level(level)?;
        let value = validate_value(value)?;
        self.entries.entry(id).or_default().insert(level, value);
        Ok(())
    }

    /// Samples stored for `id`.
    pub fn get(&self, id: &EntityId) -> Option<&BTreeMap<Level, StatValue>> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entity names and their samples in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &BTreeMap<Level, StatValue>)> {
        self.entries.iter()
    }

    /// Collect the `stat` samples of every sample-based entity in `roster`.
    pub fn from_roster(roster: &Roster, stat: StatKind) -> Self {
        let entries = roster
            .iter()
            .filter_map(|entity| {
                let samples = entity.samples(stat)?;
                Some((entity.id.clone(), samples.iter().collect::<BTreeMap<_, _>>()))
            })
            .collect();
        Self { entries }
    }

    /// Record every stored sample into `roster` as `stat` samples.
    ///
    /// Existing entities gain or overwrite samples; unknown names become
    /// sample-based entities. Returns the number of samples applied.
    pub fn merge_into(&self, roster: &mut Roster, stat: StatKind) -> usize {
        let mut applied = 0;
        for (id, samples) in &self.entries {
            for (&level, &value) in samples {
                match roster.record_sample(id.as_str(), stat, level, value) {
                    Ok(()) => applied += 1,
                    Err(err) => log::warn!("{}: sample at level {} rejected: {}", id, level, err),
                }
            }
        }
        applied
    }

    /// Samples for `id` as a [`SampleSet`].
    pub fn sample_set(&self, id: &EntityId) -> Option<SampleSet> {
        self.entries
            .get(id)
            .map(|samples| samples.iter().map(|(&level, &value)| (level, value)).collect())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

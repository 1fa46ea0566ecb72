//! Pet entities.
//!
//! An entity is a named pet with one curve per stat kind, plus the
//! catalog attributes used for filtering and sorting.

use crate::curve::{SampleSet, StatCurve};
use crate::entity_id::EntityId;
use crate::error::PetError;
use crate::stat::{Level, StatKind, StatValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rarity tier of a pet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Legendary,
}

/// A named pet with stat curves.
///
/// Stats without a curve are unavailable for that pet.
///
/// # Examples
///
/// ```rust
/// use petstat::{Entity, StatKind};
///
/// let golem = Entity::formula("Golem", 4.0, 30.0).with_sell_amount(250.0);
/// assert_eq!(golem.value_at_level(StatKind::Damage, 3), Some(12.0));
/// assert_eq!(golem.value_at_level(StatKind::Health, 3), Some(90.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub sell_amount: Option<StatValue>,
    #[serde(default)]
    curves: BTreeMap<StatKind, StatCurve>,
}

impl Entity {
    /// An entity with no curves.
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            rarity: Rarity::Common,
            sell_amount: None,
            curves: BTreeMap::new(),
        }
    }

    /// A formula-based entity with base damage and base health.
    pub fn formula(id: impl Into<EntityId>, base_damage: StatValue, base_health: StatValue) -> Self {
        Self::new(id)
            .with_curve(StatKind::Damage, StatCurve::formula(base_damage))
            .with_curve(StatKind::Health, StatCurve::formula(base_health))
    }

    /// Set the curve for `stat`, replacing any previous one.
    pub fn with_curve(mut self, stat: StatKind, curve: StatCurve) -> Self {
        self.curves.insert(stat, curve);
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_sell_amount(mut self, amount: StatValue) -> Self {
        self.sell_amount = Some(amount);
        self
    }

    pub fn is_legendary(&self) -> bool {
        self.rarity == Rarity::Legendary
    }

    /// Curve for `stat`, if the entity has one.
    pub fn curve(&self, stat: StatKind) -> Option<&StatCurve> {
        self.curves.get(&stat)
    }

    /// Iterate curves in stat order.
    pub fn curves(&self) -> impl Iterator<Item = (StatKind, &StatCurve)> {
        self.curves.iter().map(|(&stat, curve)| (stat, curve))
    }

    /// Value of `stat` at `level`, if available.
    pub fn value_at_level(&self, stat: StatKind, level: Level) -> Option<StatValue> {
        self.curve(stat).and_then(|curve| curve.value_at_level(level))
    }

    /// Samples recorded for `stat`, if its curve is sample-based.
    pub fn samples(&self, stat: StatKind) -> Option<&SampleSet> {
        self.curve(stat).and_then(StatCurve::sample_set)
    }

    /// Record an observed sample for `stat`.
    ///
    /// A missing curve becomes sample-based. A formula curve is replaced
    /// by a sample-based one, since the two cannot be mixed.
    pub fn record_sample(
        &mut self,
        stat: StatKind,
        level: Level,
        value: StatValue,
    ) -> Result<(), PetError> {
        if let Some(StatCurve::Samples(samples)) = self.curves.get_mut(&stat) {
            return samples.record(level, value);
        }
        let mut samples = SampleSet::new();
        samples.record(level, value)?;
        if self.curves.insert(stat, StatCurve::Samples(samples)).is_some() {
            log::debug!("{}: {} formula replaced by samples", self.id, stat);
        }
        Ok(())
    }

    /// Remove the curve for `stat`, making it unavailable.
    pub fn remove_curve(&mut self, stat: StatKind) -> Option<StatCurve> {
        self.curves.remove(&stat)
    }

    /// Remove the sample at `level` for `stat`.
    pub fn remove_sample(&mut self, stat: StatKind, level: Level) -> Option<StatValue> {
        match self.curves.get_mut(&stat) {
            Some(StatCurve::Samples(samples)) => samples.remove(level),
            _ => None,
        }
    }
}

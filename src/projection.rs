//! Projection engine module.
//!
//! Pure functions that turn entity curves into values and series over a
//! level range. Nothing here mutates its inputs; entities without a
//! usable curve are reported as unavailable instead of producing NaN.

use crate::curve::Basis;
use crate::entity::Entity;
use crate::entity_id::EntityId;
use crate::error::PetError;
use crate::reading::StatReading;
use crate::stat::{Level, StatKind, StatValue};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Inclusive range of levels to project over.
///
/// Construction normalizes the bounds so that `start >= 1` and
/// `end >= start`.
///
/// # Examples
///
/// ```rust
/// use petstat::LevelRange;
///
/// let range = LevelRange::new(0, 5);
/// assert_eq!((range.start(), range.end()), (1, 5));
///
/// let range = LevelRange::new(8, 3);
/// assert_eq!((range.start(), range.end()), (8, 8));
/// assert_eq!(range.level_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLevelRange", into = "RawLevelRange")]
pub struct LevelRange {
    start: Level,
    end: Level,
}

#[derive(Serialize, Deserialize)]
struct RawLevelRange {
    start: Level,
    end: Level,
}

impl From<RawLevelRange> for LevelRange {
    fn from(raw: RawLevelRange) -> Self {
        LevelRange::new(raw.start, raw.end)
    }
}

impl From<LevelRange> for RawLevelRange {
    fn from(range: LevelRange) -> Self {
        RawLevelRange {
            start: range.start,
            end: range.end,
        }
    }
}

impl LevelRange {
    /// First level of the default display range.
    pub const DEFAULT_START: Level = 1;
    /// Last level of the default display range.
    pub const DEFAULT_END: Level = 20;

    pub fn new(start: Level, end: Level) -> Self {
        let start = start.max(1);
        let end = end.max(start);
        Self { start, end }
    }

    pub fn start(&self) -> Level {
        self.start
    }

    pub fn end(&self) -> Level {
        self.end
    }

    /// Number of levels in the range. Never zero.
    pub fn level_count(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    pub fn contains(&self, level: Level) -> bool {
        (self.start..=self.end).contains(&level)
    }

    pub fn levels(&self) -> RangeInclusive<Level> {
        self.start..=self.end
    }
}

impl Default for LevelRange {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START, Self::DEFAULT_END)
    }
}

/// A lazily evaluated `(level, value)` series for one entity stat.
///
/// Only constructed when the curve has a formula or a fitted model whose
/// values stay finite across the whole range.
#[derive(Debug, Clone)]
pub struct ProjectionSeries {
    entity: EntityId,
    stat: StatKind,
    basis: Basis,
    levels: RangeInclusive<Level>,
}

impl ProjectionSeries {
    pub fn entity(&self) -> &EntityId {
        &self.entity
    }

    pub fn stat(&self) -> StatKind {
        self.stat
    }

    /// The formula or model the series is computed from.
    pub fn basis(&self) -> Basis {
        self.basis
    }
}

impl Iterator for ProjectionSeries {
    type Item = (Level, StatValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.levels
            .next()
            .map(|level| (level, self.basis.evaluate(level)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.levels.size_hint()
    }
}

impl DoubleEndedIterator for ProjectionSeries {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.levels
            .next_back()
            .map(|level| (level, self.basis.evaluate(level)))
    }
}

impl ExactSizeIterator for ProjectionSeries {}

/// Value of `stat` for `entity` at `level`.
///
/// Returns `None` when the entity has no curve for `stat` or a
/// sample-based curve without a model.
///
/// # Examples
///
/// ```rust
/// use petstat::{value_at_level, Entity, StatKind};
///
/// let slime = Entity::formula("Slime", 3.0, 12.0);
/// assert_eq!(value_at_level(&slime, StatKind::Damage, 7), Some(21.0));
///
/// let mut bat = Entity::new("Bat");
/// bat.record_sample(StatKind::Damage, 2, 9.0).unwrap();
/// assert_eq!(value_at_level(&bat, StatKind::Damage, 7), None);
/// ```
pub fn value_at_level(entity: &Entity, stat: StatKind, level: Level) -> Option<StatValue> {
    entity.value_at_level(stat, level)
}

/// Like [`value_at_level`], but reports absence as an error.
pub fn try_value_at_level(
    entity: &Entity,
    stat: StatKind,
    level: Level,
) -> Result<StatValue, PetError> {
    value_at_level(entity, stat, level).ok_or_else(|| PetError::NoModelAvailable {
        entity: entity.id.clone(),
        stat,
    })
}

/// Value at `level` together with the basis it was computed from.
pub fn explain(entity: &Entity, stat: StatKind, level: Level) -> Option<StatReading> {
    let basis = entity.curve(stat)?.basis()?;
    basis.value_at(level)?;
    Some(StatReading::new(entity.id.clone(), stat, level, basis))
}

/// Project `stat` of `entity` over `range`.
///
/// Returns `None` instead of a series when no formula or model exists,
/// or when the values would overflow somewhere in the range.
///
/// # Examples
///
/// ```rust
/// use petstat::{project_series, Entity, LevelRange, StatKind};
///
/// let golem = Entity::formula("Golem", 4.0, 30.0);
/// let series: Vec<_> = project_series(&golem, StatKind::Damage, LevelRange::new(1, 3))
///     .unwrap()
///     .collect();
/// assert_eq!(series, vec![(1, 4.0), (2, 8.0), (3, 12.0)]);
/// ```
pub fn project_series(
    entity: &Entity,
    stat: StatKind,
    range: LevelRange,
) -> Option<ProjectionSeries> {
    let basis = entity.curve(stat)?.basis()?;
    // Values are linear in level, so finite endpoints bound the whole range.
    basis.value_at(range.start())?;
    basis.value_at(range.end())?;
    Some(ProjectionSeries {
        entity: entity.id.clone(),
        stat,
        basis,
        levels: range.levels(),
    })
}

/// Project `stat` for many entities, skipping those without a model.
///
/// Output order follows input order.
pub fn project_all<'a, I>(entities: I, stat: StatKind, range: LevelRange) -> Vec<ProjectionSeries>
where
    I: IntoIterator<Item = &'a Entity>,
{
    entities
        .into_iter()
        .filter_map(|entity| {
            let series = project_series(entity, stat, range);
            if series.is_none() {
                log::debug!("{}: no usable {} model, omitted from projection", entity.id, stat);
            }
            series
        })
        .collect()
}

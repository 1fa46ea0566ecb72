//! Ranking module.
//!
//! Orders entities by a numeric metric, highest first. Sorting is stable:
//! entities with equal metrics keep their input order, and entities whose
//! metric is unavailable go last, also in input order.

use crate::entity::Entity;
use crate::entity_id::EntityId;
use crate::stat::{StatKind, StatValue};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// What to sort pets by.
///
/// Damage and Health rank by growth per level (formula base or fitted
/// slope), Sell by sell amount, all descending. Name sorts ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Damage,
    Health,
    Sell,
    Name,
}

impl SortKey {
    /// Metric used for this key, or `None` for name ordering.
    pub fn metric(self) -> Option<fn(&Entity) -> Option<StatValue>> {
        match self {
            SortKey::Damage => Some(damage_metric),
            SortKey::Health => Some(health_metric),
            SortKey::Sell => Some(sell_metric),
            SortKey::Name => None,
        }
    }
}

/// Growth per level of `stat`: formula base or fitted slope.
pub fn growth_metric(entity: &Entity, stat: StatKind) -> Option<StatValue> {
    entity.curve(stat).and_then(|curve| curve.growth())
}

fn damage_metric(entity: &Entity) -> Option<StatValue> {
    growth_metric(entity, StatKind::Damage)
}

fn health_metric(entity: &Entity) -> Option<StatValue> {
    growth_metric(entity, StatKind::Health)
}

fn sell_metric(entity: &Entity) -> Option<StatValue> {
    entity.sell_amount
}

/// Rank entities by `metric`, highest first.
///
/// # Examples
///
/// ```rust
/// use petstat::{rank_by_metric, Entity};
///
/// let pets = vec![
///     Entity::formula("Slime", 2.0, 10.0),
///     Entity::formula("Golem", 5.0, 40.0),
///     Entity::formula("Bat", 2.0, 6.0),
/// ];
/// let order = rank_by_metric(&pets, |pet| pet.sell_amount.or(Some(0.0)));
/// let names: Vec<_> = order.iter().map(|id| id.as_str()).collect();
/// assert_eq!(names, vec!["Slime", "Golem", "Bat"]);
/// ```
pub fn rank_by_metric<'a, I, F>(entities: I, metric: F) -> Vec<EntityId>
where
    I: IntoIterator<Item = &'a Entity>,
    F: Fn(&Entity) -> Option<StatValue>,
{
    let mut scored: Vec<(&EntityId, Option<StatValue>)> = entities
        .into_iter()
        .map(|entity| (&entity.id, metric(entity).filter(|value| !value.is_nan())))
        .collect();

    // `sort_by` is stable, so ties keep input order.
    scored.sort_by(|(_, a), (_, b)| compare_descending(*a, *b));
    scored.into_iter().map(|(id, _)| id.clone()).collect()
}

/// Rank entities by name, ascending and ignoring case.
///
/// Names that differ only in case fall back to byte order.
pub fn rank_by_name<'a, I>(entities: I) -> Vec<EntityId>
where
    I: IntoIterator<Item = &'a Entity>,
{
    let mut ids: Vec<EntityId> = entities.into_iter().map(|entity| entity.id.clone()).collect();
    ids.sort_by_cached_key(|id| (id.as_str().to_lowercase(), id.clone()));
    ids
}

/// Rank entities by a [`SortKey`].
///
/// # Examples
///
/// ```rust
/// use petstat::{rank_by_key, Entity, SortKey};
///
/// let pets = vec![
///     Entity::formula("Slime", 2.0, 10.0),
///     Entity::formula("Golem", 5.0, 40.0),
/// ];
/// assert_eq!(rank_by_key(&pets, SortKey::Damage)[0].as_str(), "Golem");
/// assert_eq!(rank_by_key(&pets, SortKey::Name)[0].as_str(), "Golem");
/// ```
pub fn rank_by_key<'a, I>(entities: I, key: SortKey) -> Vec<EntityId>
where
    I: IntoIterator<Item = &'a Entity>,
{
    match key.metric() {
        Some(metric) => rank_by_metric(entities, metric),
        None => rank_by_name(entities),
    }
}

/// The entity with the highest `stat` growth. The first one wins ties.
pub fn best_by_stat<'a, I>(entities: I, stat: StatKind) -> Option<&'a Entity>
where
    I: IntoIterator<Item = &'a Entity>,
{
    let mut best: Option<(&Entity, StatValue)> = None;
    for entity in entities {
        let Some(value) = growth_metric(entity, stat) else {
            continue;
        };
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((entity, value)),
        }
    }
    best.map(|(entity, _)| entity)
}

fn compare_descending(a: Option<StatValue>, b: Option<StatValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

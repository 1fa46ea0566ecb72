//! Roster module.
//!
//! Provides the `Roster` type, the caller-owned collection of entities
//! that every query reads from. Entities keep their insertion order, which
//! is the tie-break order for rankings.

use crate::entity::Entity;
use crate::entity_id::EntityId;
use crate::error::PetError;
use crate::stat::{Level, StatKind, StatValue};
use std::collections::HashMap;

/// Insertion-ordered set of entities keyed by name.
///
/// # Examples
///
/// ```rust
/// use petstat::*;
///
/// let mut roster = Roster::new();
/// roster.insert(Entity::formula("Slime", 2.0, 10.0));
/// roster.record_sample("Bat", StatKind::Damage, 1, 4.0).unwrap();
/// roster.record_sample("Bat", StatKind::Damage, 2, 7.0).unwrap();
///
/// assert_eq!(roster.len(), 2);
/// let bat = roster.get(&EntityId::from_str("Bat")).unwrap();
/// assert_eq!(bat.value_at_level(StatKind::Damage, 3), Some(10.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    entities: Vec<Entity>,
    index: HashMap<EntityId, usize>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity.
    ///
    /// An entity with the same name is replaced in place and returned.
    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        match self.index.get(&entity.id) {
            Some(&idx) => Some(std::mem::replace(&mut self.entities[idx], entity)),
            None => {
                self.index.insert(entity.id.clone(), self.entities.len());
                self.entities.push(entity);
                None
            }
        }
    }

    /// Remove an entity by name.
    pub fn remove(&mut self, id: &EntityId) -> Option<Entity> {
        let idx = self.index.remove(id)?;
        let entity = self.entities.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Some(entity)
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.index.get(id).map(|&idx| &self.entities[idx])
    }

    pub fn get_mut(&mut self, id: &EntityId) -> Option<&mut Entity> {
        match self.index.get(id) {
            Some(&idx) => Some(&mut self.entities[idx]),
            None => None,
        }
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate entities in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    /// Iterate entity names in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &EntityId> {
        self.entities.iter().map(|entity| &entity.id)
    }

    /// Look up several entities, skipping unknown names.
    pub fn select<'a>(&'a self, ids: &'a [EntityId]) -> impl Iterator<Item = &'a Entity> + 'a {
        ids.iter().filter_map(move |id| self.get(id))
    }

    /// Record an observed sample, creating a sample-based entity if the
    /// name is new.
    ///
    /// The name is trimmed and must not be empty. Invalid levels or
    /// values are rejected without touching the roster.
    pub fn record_sample(
        &mut self,
        name: &str,
        stat: StatKind,
        level: Level,
        value: StatValue,
    ) -> Result<(), PetError> {
        let id = EntityId::parse(name)?;
        if let Some(entity) = self.get_mut(&id) {
            return entity.record_sample(stat, level, value);
        }

        let mut entity = Entity::new(id);
        entity.record_sample(stat, level, value)?;
        log::debug!("created sampled entity {}", entity.id);
        self.insert(entity);
        Ok(())
    }

    /// Remove every sample-based `stat` curve, leaving formulas intact.
    ///
    /// Entities left with no curves at all are dropped.
    pub fn clear_samples(&mut self, stat: StatKind) {
        let mut emptied = Vec::new();
        for entity in &mut self.entities {
            if entity.samples(stat).is_some() {
                entity.remove_curve(stat);
                if entity.curves().next().is_none() {
                    emptied.push(entity.id.clone());
                }
            }
        }
        for id in emptied {
            self.remove(&id);
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

impl FromIterator<Entity> for Roster {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for entity in iter {
            roster.insert(entity);
        }
        roster
    }
}

impl Extend<Entity> for Roster {
    fn extend<I: IntoIterator<Item = Entity>>(&mut self, iter: I) {
        for entity in iter {
            self.insert(entity);
        }
    }
}

//! Official pet catalog.
//!
//! Loads the static data table published for the game, one record per
//! pet with its base stats, and turns it into formula-based entities.

use crate::entity::{Entity, Rarity};
use crate::entity_id::EntityId;
use crate::error::PetError;
use crate::roster::Roster;
use crate::stat::{validate_value, StatValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the official data table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PetRecord {
    pub base_damage: StatValue,
    pub base_health: StatValue,
    #[serde(default)]
    pub sell_amount: StatValue,
    #[serde(default)]
    pub legendary: bool,
}

impl PetRecord {
    /// Check that every stat in the record is a finite number.
    pub fn validate(&self) -> Result<(), PetError> {
        validate_value(self.base_damage)?;
        validate_value(self.base_health)?;
        validate_value(self.sell_amount)?;
        Ok(())
    }

    /// Build the formula entity described by this record.
    pub fn to_entity(&self, id: EntityId) -> Entity {
        let rarity = if self.legendary {
            Rarity::Legendary
        } else {
            Rarity::Common
        };
        Entity::formula(id, self.base_damage, self.base_health)
            .with_sell_amount(self.sell_amount)
            .with_rarity(rarity)
    }
}

/// The official pet table, keyed by name.
///
/// # Examples
///
/// ```rust
/// use petstat::{Catalog, StatKind};
///
/// let catalog = Catalog::from_json(r#"{
///     "Slime": { "BaseDamage": 2, "BaseHealth": 10, "SellAmount": 5 },
///     "Dragon": { "BaseDamage": 9.5, "BaseHealth": 80, "SellAmount": 900, "Legendary": true }
/// }"#).unwrap();
///
/// let roster = catalog.to_roster();
/// let dragon = roster.get(&"Dragon".into()).unwrap();
/// assert!(dragon.is_legendary());
/// assert_eq!(dragon.value_at_level(StatKind::Damage, 2), Some(19.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pets: BTreeMap<EntityId, PetRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the official data table.
    ///
    /// Blank names and non-finite stats make the whole table malformed.
    pub fn from_json(text: &str) -> Result<Self, PetError> {
        let catalog: Catalog =
            serde_json::from_str(text).map_err(|err| PetError::MalformedImport(err.to_string()))?;
        for (id, record) in &catalog.pets {
            record
                .validate()
                .map_err(|err| PetError::MalformedImport(format!("{}: {}", id, err)))?;
        }
        log::debug!("loaded catalog with {} pets", catalog.pets.len());
        Ok(catalog)
    }

    pub fn insert(&mut self, id: EntityId, record: PetRecord) -> Result<(), PetError> {
        record.validate()?;
        self.pets.insert(id, record);
        Ok(())
    }

    pub fn get(&self, id: &EntityId) -> Option<&PetRecord> {
        self.pets.get(id)
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Formula entities for every pet, in name order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.pets
            .iter()
            .map(|(id, record)| record.to_entity(id.clone()))
    }

    /// A roster holding every catalog pet, in name order.
    pub fn to_roster(&self) -> Roster {
        self.entities().collect()
    }
}

//! View state module.
//!
//! Filter, sort and selection state for a pet comparison view, held as
//! plain values the caller owns. Updates return a new state; queries read
//! a [`Roster`] and produce data for a renderer: the ordered list of
//! visible pets, a per-level progression table and a best-pet summary.

use crate::entity::{Entity, Rarity};
use crate::entity_id::EntityId;
use crate::projection::LevelRange;
use crate::ranking::{best_by_stat, rank_by_key, SortKey};
use crate::roster::Roster;
use crate::stat::{Level, StatKind, StatValue};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which rarities to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RarityFilter {
    #[default]
    All,
    Legendary,
    Common,
}

impl RarityFilter {
    pub fn matches(self, rarity: Rarity) -> bool {
        match self {
            RarityFilter::All => true,
            RarityFilter::Legendary => rarity == Rarity::Legendary,
            RarityFilter::Common => rarity == Rarity::Common,
        }
    }
}

/// Search, rarity, sort and level range settings.
///
/// Deserializes from partial JSON; missing fields take their defaults.
///
/// # Examples
///
/// ```rust
/// use petstat::{FilterState, SortKey};
///
/// let state: FilterState = serde_json::from_str(r#"{"sort_by": "name"}"#).unwrap();
/// assert_eq!(state.sort_by, SortKey::Name);
/// assert_eq!(state.level_range.end(), 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Case-insensitive substring matched against pet names.
    pub search: String,
    pub rarity: RarityFilter,
    pub sort_by: SortKey,
    pub level_range: LevelRange,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn with_rarity(self, rarity: RarityFilter) -> Self {
        Self { rarity, ..self }
    }

    pub fn with_sort(self, sort_by: SortKey) -> Self {
        Self { sort_by, ..self }
    }

    /// Set the level range; bounds are normalized by [`LevelRange::new`].
    pub fn with_levels(self, start: Level, end: Level) -> Self {
        Self {
            level_range: LevelRange::new(start, end),
            ..self
        }
    }

    /// Back to the defaults: no search, all rarities, damage sort, 1..=20.
    pub fn reset(self) -> Self {
        Self::default()
    }

    /// Whether `entity` passes the search and rarity filters.
    pub fn matches(&self, entity: &Entity) -> bool {
        let search = self.search.trim();
        let name_matches = search.is_empty()
            || entity
                .id
                .as_str()
                .to_lowercase()
                .contains(&search.to_lowercase());
        name_matches && self.rarity.matches(entity.rarity)
    }

    /// Names of the pets that pass the filters, in sort order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use petstat::*;
    ///
    /// let roster: Roster = vec![
    ///     Entity::formula("Fire Fox", 3.0, 10.0),
    ///     Entity::formula("Ice Fox", 4.0, 12.0),
    ///     Entity::formula("Slime", 9.0, 5.0),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let visible = FilterState::new().with_search("fox").visible(&roster);
    /// let names: Vec<_> = visible.iter().map(|id| id.as_str()).collect();
    /// assert_eq!(names, vec!["Ice Fox", "Fire Fox"]);
    /// ```
    pub fn visible(&self, roster: &Roster) -> Vec<EntityId> {
        rank_by_key(roster.iter().filter(|entity| self.matches(entity)), self.sort_by)
    }
}

/// One comparison picker: everything, or a single pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pick {
    All,
    Pet(EntityId),
}

/// The comparison pickers shown alongside the chart.
///
/// Starts with a single `All` picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    picks: Vec<Pick>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            picks: vec![Pick::All],
        }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    /// Add a picker.
    pub fn with_pick(mut self, pick: Pick) -> Self {
        self.picks.push(pick);
        self
    }

    /// Change the picker at `index`. Out-of-range indices are ignored.
    pub fn with_pick_at(mut self, index: usize, pick: Pick) -> Self {
        if let Some(slot) = self.picks.get_mut(index) {
            *slot = pick;
        }
        self
    }

    /// Remove the picker at `index`. The last picker cannot be removed.
    pub fn without_pick(mut self, index: usize) -> Self {
        if self.picks.len() > 1 && index < self.picks.len() {
            self.picks.remove(index);
        }
        self
    }

    /// Whether pickers can be removed.
    pub fn can_remove(&self) -> bool {
        self.picks.len() > 1
    }

    /// Pets to chart, given the filtered list.
    ///
    /// Any `All` picker shows every filtered pet. Otherwise the picked
    /// pets that survived filtering, in filtered order, once each.
    pub fn visible(&self, filtered: &[EntityId]) -> Vec<EntityId> {
        if self.picks.iter().any(|pick| *pick == Pick::All) {
            return filtered.to_vec();
        }
        let picked: HashSet<&EntityId> = self
            .picks
            .iter()
            .filter_map(|pick| match pick {
                Pick::Pet(id) => Some(id),
                Pick::All => None,
            })
            .collect();
        filtered
            .iter()
            .filter(|id| picked.contains(id))
            .cloned()
            .collect()
    }
}

/// Damage and health of one pet at one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCell {
    pub entity: EntityId,
    pub damage: Option<StatValue>,
    pub health: Option<StatValue>,
}

/// All visible pets at one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRow {
    pub level: Level,
    pub cells: Vec<StatCell>,
}

/// Per-level stat table for a set of pets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionTable {
    pub entities: Vec<EntityId>,
    pub rows: Vec<LevelRow>,
}

impl ProgressionTable {
    /// Build the table for `ids` over `range`. Unknown names are skipped.
    pub fn build(roster: &Roster, ids: &[EntityId], range: LevelRange) -> Self {
        let entities: Vec<&Entity> = roster.select(ids).collect();
        let rows = range
            .levels()
            .map(|level| LevelRow {
                level,
                cells: entities
                    .iter()
                    .map(|entity| StatCell {
                        entity: entity.id.clone(),
                        damage: entity.value_at_level(StatKind::Damage, level),
                        health: entity.value_at_level(StatKind::Health, level),
                    })
                    .collect(),
            })
            .collect();
        Self {
            entities: entities.iter().map(|entity| entity.id.clone()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Headline numbers for the strongest visible pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPet {
    pub entity: EntityId,
    pub legendary: bool,
    pub damage: StatValue,
    pub health: Option<StatValue>,
    pub sell_amount: Option<StatValue>,
}

impl BestPet {
    /// The pet among `ids` with the highest damage growth.
    pub fn find(roster: &Roster, ids: &[EntityId]) -> Option<Self> {
        let best = best_by_stat(roster.select(ids), StatKind::Damage)?;
        let growth = |stat: StatKind| best.curve(stat).and_then(|curve| curve.growth());
        Some(Self {
            entity: best.id.clone(),
            legendary: best.is_legendary(),
            damage: growth(StatKind::Damage)?,
            health: growth(StatKind::Health),
            sell_amount: best.sell_amount,
        })
    }
}

/// Format a stat for display: whole numbers without decimals, anything
/// else with two.
///
/// ```rust
/// use petstat::view::format_stat;
///
/// assert_eq!(format_stat(12.0), "12");
/// assert_eq!(format_stat(12.346), "12.35");
/// assert_eq!(format_stat(-0.5), "-0.50");
/// ```
pub fn format_stat(value: StatValue) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

//! # petstat - Deterministic Stat Projection for Game Pets
//!
//! Compares pets by how their stats grow with level:
//! - **Formula** pets grow linearly: `value(level) = base * level`
//! - **Sampled** pets are fitted with ordinary least squares from
//!   observed `(level, value)` points
//! - **Pure** queries: projections, rankings and tables never mutate the
//!   caller-owned [`Roster`]
//!
//! ## Core Concepts
//!
//! ```text
//! [Catalog / SampleStore] → [Roster] → [projection / ranking / view] → renderer
//! ```
//!
//! 1. A [`StatCurve`] per stat kind is either a formula or a [`SampleSet`]
//! 2. A [`LinearModel`] is fitted on demand; degenerate samples yield none
//! 3. Entities without a formula or model are left out of projections
//!    instead of producing NaN
//!
//! ## Example
//!
//! ```rust
//! use petstat::*;
//!
//! let mut roster = Roster::new();
//! roster.insert(Entity::formula("Slime", 2.0, 10.0));
//!
//! // User-entered observations
//! roster.record_sample("Bat", StatKind::Damage, 1, 10.0).unwrap();
//! roster.record_sample("Bat", StatKind::Damage, 2, 20.0).unwrap();
//! roster.record_sample("Bat", StatKind::Damage, 3, 30.0).unwrap();
//!
//! let ranking = rank_by_key(&roster, SortKey::Damage);
//! assert_eq!(ranking[0].as_str(), "Bat");
//!
//! let series = project_all(&roster, StatKind::Damage, LevelRange::new(1, 3));
//! let bat: Vec<_> = series[1].clone().collect();
//! assert_eq!(bat, vec![(1, 10.0), (2, 20.0), (3, 30.0)]);
//! ```
//!
//! ## Modules
//!
//! - [`entity_id`] - Entity name type
//! - [`stat`] - Stat kinds, levels and input validation
//! - [`regression`] - Least-squares line fitting
//! - [`curve`] - Formula and sample-based stat curves
//! - [`entity`] - Pets and their curves
//! - [`roster`] - Caller-owned entity collection
//! - [`projection`] - Values and series over level ranges
//! - [`reading`] - Single values with their breakdown
//! - [`ranking`] - Stable metric and name ordering
//! - [`catalog`] - Official pet data table
//! - [`store`] - Persisted sample blob import/export
//! - [`view`] - Filter, selection and table state for renderers
//! - [`error`] - Error types

pub mod catalog;
pub mod curve;
pub mod entity;
pub mod entity_id;
pub mod error;
pub mod projection;
pub mod ranking;
pub mod reading;
pub mod regression;
pub mod roster;
pub mod stat;
pub mod store;
pub mod view;

// Re-export main types for convenience
pub use catalog::{Catalog, PetRecord};
pub use curve::{Basis, SampleSet, StatCurve};
pub use entity::{Entity, Rarity};
pub use entity_id::EntityId;
pub use error::PetError;
pub use reading::StatReading;
pub use regression::{fit_linear_model, LinearModel};
pub use roster::Roster;
pub use stat::{Level, StatKind, StatValue};
pub use store::SampleStore;

// Re-export engine operations
pub use projection::{
    explain, project_all, project_series, try_value_at_level, value_at_level, LevelRange,
    ProjectionSeries,
};
pub use ranking::{best_by_stat, rank_by_key, rank_by_metric, rank_by_name, SortKey};

// Re-export view state
pub use view::{
    BestPet, FilterState, LevelRow, Pick, ProgressionTable, RarityFilter, Selection, StatCell,
};

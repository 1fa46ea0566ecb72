//! Stat readings module.
//!
//! Contains the `StatReading` type, a single projected value together
//! with the basis it was computed from, for breakdown display.

use crate::curve::Basis;
use crate::entity_id::EntityId;
use crate::stat::{Level, StatKind, StatValue};
use serde::{Deserialize, Serialize};

/// A projected stat value with its breakdown.
///
/// Read-only and serializable, so it can be handed straight to a
/// rendering layer.
///
/// # Examples
///
/// ```rust
/// use petstat::{Basis, EntityId, StatKind, StatReading};
///
/// let reading = StatReading::new(
///     EntityId::from_str("Golem"),
///     StatKind::Damage,
///     5,
///     Basis::Formula { base: 4.0 },
/// );
/// assert_eq!(reading.value, 20.0);
/// assert_eq!(reading.describe(), "Golem damage @ level 5 = 4 x 5 = 20");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatReading {
    /// The entity the value belongs to.
    pub entity: EntityId,

    /// Which stat was read.
    pub stat: StatKind,

    /// The requested level.
    pub level: Level,

    /// The projected value.
    pub value: StatValue,

    /// Formula or fitted model the value came from.
    pub basis: Basis,
}

impl StatReading {
    /// Evaluate `basis` at `level` and record the result.
    pub fn new(entity: EntityId, stat: StatKind, level: Level, basis: Basis) -> Self {
        Self {
            value: basis.evaluate(level),
            entity,
            stat,
            level,
            basis,
        }
    }

    /// Whether the value came from a fitted regression model.
    pub fn is_fitted(&self) -> bool {
        matches!(self.basis, Basis::Fitted(_))
    }

    /// Human-readable breakdown of the calculation.
    pub fn describe(&self) -> String {
        let calculation = match self.basis {
            Basis::Formula { base } => format!("{} x {}", base, self.level),
            Basis::Fitted(model) => format!(
                "{} x {} + {}",
                model.slope, self.level, model.intercept
            ),
        };
        format!(
            "{} {} @ level {} = {} = {}",
            self.entity, self.stat, self.level, calculation, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regression::LinearModel;

    #[test]
    fn test_reading_formula() {
        let reading = StatReading::new(
            EntityId::from_str("Slime"),
            StatKind::Health,
            3,
            Basis::Formula { base: 10.0 },
        );
        assert_eq!(reading.value, 30.0);
        assert!(!reading.is_fitted());
    }

    #[test]
    fn test_reading_fitted() {
        let reading = StatReading::new(
            EntityId::from_str("Bat"),
            StatKind::Damage,
            4,
            Basis::Fitted(LinearModel::new(2.0, 1.0)),
        );
        assert_eq!(reading.value, 9.0);
        assert!(reading.is_fitted());
        assert_eq!(reading.describe(), "Bat damage @ level 4 = 2 x 4 + 1 = 9");
    }

    #[test]
    fn test_reading_serializes() {
        let reading = StatReading::new(
            EntityId::from_str("Bat"),
            StatKind::Damage,
            2,
            Basis::Formula { base: 1.5 },
        );
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["entity"], "Bat");
        assert_eq!(json["stat"], "damage");
        assert_eq!(json["value"], 3.0);
    }
}

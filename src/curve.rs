//! Stat curves module.
//!
//! A curve describes how one stat of a pet grows with level. It is
//! either a fixed formula (`base * level`) or a sparse set of observed
//! samples that a linear model is fitted to on demand.

use crate::error::PetError;
use crate::regression::{fit_linear_model, LinearModel};
use crate::stat::{validate_level, validate_value, Level, StatValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Observed `(level, value)` samples for one stat.
///
/// Levels are unique; recording a level twice keeps the later value.
/// Iteration is in ascending level order.
///
/// # Examples
///
/// ```rust
/// use petstat::SampleSet;
///
/// let mut samples = SampleSet::new();
/// samples.record(1, 10.0).unwrap();
/// samples.record(2, 25.0).unwrap();
/// samples.record(2, 20.0).unwrap(); // overwrites
///
/// assert_eq!(samples.len(), 2);
/// assert_eq!(samples.get(2), Some(20.0));
/// assert_eq!(samples.fit().unwrap().slope, 10.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Level, StatValue>", try_from = "BTreeMap<Level, StatValue>")]
pub struct SampleSet {
    values: BTreeMap<Level, StatValue>,
}

impl SampleSet {
    /// Create an empty sample set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observed value, replacing any earlier value at `level`.
    ///
    /// Rejects level 0 and non-finite values.
    pub fn record(&mut self, level: Level, value: StatValue) -> Result<(), PetError> {
        let level = validate_level(level)?;
        let value = validate_value(value)?;
        self.values.insert(level, value);
        Ok(())
    }

    /// Remove the sample at `level`, returning its value.
    pub fn remove(&mut self, level: Level) -> Option<StatValue> {
        self.values.remove(&level)
    }

    /// Get the observed value at `level`, if any.
    pub fn get(&self, level: Level) -> Option<StatValue> {
        self.values.get(&level).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate samples in ascending level order.
    pub fn iter(&self) -> impl Iterator<Item = (Level, StatValue)> + '_ {
        self.values.iter().map(|(&level, &value)| (level, value))
    }

    /// Fit a linear model through all samples.
    pub fn fit(&self) -> Option<LinearModel> {
        fit_linear_model(self.iter())
    }
}

impl TryFrom<BTreeMap<Level, StatValue>> for SampleSet {
    type Error = PetError;

    fn try_from(values: BTreeMap<Level, StatValue>) -> Result<Self, Self::Error> {
        let mut set = SampleSet::new();
        for (level, value) in values {
            set.record(level, value)?;
        }
        Ok(set)
    }
}

impl From<SampleSet> for BTreeMap<Level, StatValue> {
    fn from(set: SampleSet) -> Self {
        set.values
    }
}

impl FromIterator<(Level, StatValue)> for SampleSet {
    /// Collect samples, silently discarding invalid entries.
    fn from_iter<I: IntoIterator<Item = (Level, StatValue)>>(iter: I) -> Self {
        let mut set = SampleSet::new();
        for (level, value) in iter {
            if let Err(err) = set.record(level, value) {
                log::debug!("discarding sample ({}, {}): {}", level, value, err);
            }
        }
        set
    }
}

/// How a stat grows with level.
///
/// # Examples
///
/// ```rust
/// use petstat::StatCurve;
///
/// let curve = StatCurve::formula(12.5);
/// assert_eq!(curve.value_at_level(4), Some(50.0));
/// assert!(curve.model().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatCurve {
    /// `value(level) = base * level`.
    Formula { base: StatValue },
    /// Observed samples; values come from the fitted model.
    Samples(SampleSet),
}

impl StatCurve {
    /// Fixed linear formula with the given base value.
    pub fn formula(base: StatValue) -> Self {
        StatCurve::Formula { base }
    }

    /// An empty sample-based curve.
    pub fn samples() -> Self {
        StatCurve::Samples(SampleSet::new())
    }

    /// The fitted regression model.
    ///
    /// Formula curves never produce a model.
    pub fn model(&self) -> Option<LinearModel> {
        match self {
            StatCurve::Formula { .. } => None,
            StatCurve::Samples(samples) => samples.fit(),
        }
    }

    /// Sample set of a sample-based curve.
    pub fn sample_set(&self) -> Option<&SampleSet> {
        match self {
            StatCurve::Formula { .. } => None,
            StatCurve::Samples(samples) => Some(samples),
        }
    }

    /// Value at `level`, or `None` if a sample-based curve has no model
    /// or the value would overflow.
    pub fn value_at_level(&self, level: Level) -> Option<StatValue> {
        self.basis()?.value_at(level)
    }

    /// Growth per level: the formula base or the fitted slope.
    pub fn growth(&self) -> Option<StatValue> {
        self.basis().map(|basis| match basis {
            Basis::Formula { base } => base,
            Basis::Fitted(model) => model.slope,
        })
    }

    /// Resolve the curve into something that can be evaluated.
    ///
    /// A formula with a non-finite base resolves to nothing.
    pub fn basis(&self) -> Option<Basis> {
        match self {
            StatCurve::Formula { base } if base.is_finite() => Some(Basis::Formula { base: *base }),
            StatCurve::Formula { base } => {
                log::debug!("ignoring formula with non-finite base {}", base);
                None
            }
            StatCurve::Samples(samples) => samples.fit().map(Basis::Fitted),
        }
    }
}

/// An evaluable curve: either a formula or a fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Basis {
    Formula { base: StatValue },
    Fitted(LinearModel),
}

impl Basis {
    pub fn evaluate(&self, level: Level) -> StatValue {
        match self {
            Basis::Formula { base } => base * StatValue::from(level),
            Basis::Fitted(model) => model.predict(level),
        }
    }

    /// Like [`Basis::evaluate`], but `None` when the result overflows.
    pub fn value_at(&self, level: Level) -> Option<StatValue> {
        Some(self.evaluate(level)).filter(|value| value.is_finite())
    }
}

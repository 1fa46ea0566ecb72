//! Ordinary least-squares linear regression over level samples.
//!
//! A model is only produced when it is well defined: at least two
//! distinct levels and a finite result. Degenerate inputs yield `None`
//! so that NaN or infinity never reaches a projection.

use crate::stat::{Level, StatValue};
use serde::{Deserialize, Serialize};

/// A fitted `value = slope * level + intercept` line.
///
/// # Examples
///
/// ```rust
/// use petstat::LinearModel;
///
/// let model = LinearModel::new(2.0, 1.0);
/// assert_eq!(model.predict(10), 21.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Value gained per level.
    pub slope: StatValue,
    /// Value at level 0.
    pub intercept: StatValue,
}

impl LinearModel {
    /// Create a model from its coefficients.
    pub fn new(slope: StatValue, intercept: StatValue) -> Self {
        Self { slope, intercept }
    }

    /// Evaluate the model at `level`.
    pub fn predict(&self, level: Level) -> StatValue {
        self.slope * StatValue::from(level) + self.intercept
    }
}

/// Fit a least-squares line through `(level, value)` samples.
///
/// Returns `None` when there are no samples, when every sample shares
/// the same level (this includes a single sample), or when the sums
/// overflow to a non-finite result.
///
/// # Examples
///
/// ```rust
/// use petstat::fit_linear_model;
///
/// let model = fit_linear_model([(1, 10.0), (2, 20.0), (3, 30.0)]).unwrap();
/// assert_eq!(model.slope, 10.0);
/// assert_eq!(model.intercept, 0.0);
///
/// assert!(fit_linear_model([(4, 12.0)]).is_none());
/// assert!(fit_linear_model([(4, 12.0), (4, 15.0)]).is_none());
/// ```
pub fn fit_linear_model<I>(samples: I) -> Option<LinearModel>
where
    I: IntoIterator<Item = (Level, StatValue)>,
{
    let mut n = 0.0_f64;
    let mut sum_x = 0.0_f64;
    let mut sum_y = 0.0_f64;
    let mut sum_xy = 0.0_f64;
    let mut sum_x_squared = 0.0_f64;
    let mut min_level = Level::MAX;
    let mut max_level = Level::MIN;

    for (level, value) in samples {
        min_level = min_level.min(level);
        max_level = max_level.max(level);
        let x = StatValue::from(level);
        n += 1.0;
        sum_x += x;
        sum_y += value;
        sum_xy += x * value;
        sum_x_squared += x * x;
    }

    // A vertical line has no slope. Large levels can leave a rounding
    // residue in the denominator, so check the levels themselves.
    if n == 0.0 || min_level == max_level {
        return None;
    }

    let denominator = n * sum_x_squared - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    if !slope.is_finite() || !intercept.is_finite() {
        log::debug!("discarding non-finite fit over {} samples", n);
        return None;
    }

    Some(LinearModel { slope, intercept })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_exact_line() {
        let model = fit_linear_model([(1, 10.0), (2, 20.0), (3, 30.0)]).unwrap();
        assert_eq!(model.slope, 10.0);
        assert_eq!(model.intercept, 0.0);
    }

    #[test]
    fn test_fit_with_offset() {
        let model = fit_linear_model([(2, 7.0), (5, 16.0)]).unwrap();
        assert_relative_eq!(model.slope, 3.0);
        assert_relative_eq!(model.intercept, 1.0);
        assert_relative_eq!(model.predict(10), 31.0);
    }

    #[test]
    fn test_fit_scattered_points() {
        // Least squares through (1,2), (2,3), (3,5): slope 1.5, intercept 1/3.
        let model = fit_linear_model([(1, 2.0), (2, 3.0), (3, 5.0)]).unwrap();
        assert_relative_eq!(model.slope, 1.5);
        assert_relative_eq!(model.intercept, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_degenerate_inputs() {
        assert!(fit_linear_model(Vec::<(Level, StatValue)>::new()).is_none());
        assert!(fit_linear_model([(7, 70.0)]).is_none());
        assert!(fit_linear_model([(3, 1.0), (3, 2.0), (3, 3.0)]).is_none());
    }

    #[test]
    fn test_fit_identical_large_levels() {
        let level = 4_000_000_001;
        assert!(fit_linear_model([(level, 1.0), (level, 2.0), (level, 3.0)]).is_none());
    }

    #[test]
    fn test_fit_rejects_non_finite_result() {
        assert!(fit_linear_model([(1, f64::MAX), (2, -f64::MAX)]).is_none());
    }

    #[test]
    fn test_fit_order_independent() {
        let a = fit_linear_model([(1, 4.0), (4, 9.0), (9, 20.0)]).unwrap();
        let b = fit_linear_model([(9, 20.0), (1, 4.0), (4, 9.0)]).unwrap();
        assert_relative_eq!(a.slope, b.slope, epsilon = 1e-12);
        assert_relative_eq!(a.intercept, b.intercept, epsilon = 1e-12);
    }
}

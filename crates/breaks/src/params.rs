//! Tuning parameters for the breakpoint search.

use serde::{Deserialize, Serialize};

/// What to do when no active breakpoint can reach the current position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Break anyway, extending the cheapest breakpoint that was just dropped.
    #[default]
    Rescue,
    /// Stop the search with `BreakError::NoFeasibleBreak`.
    Fail,
}

/// Weights and limits used to score candidate lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakParams {
    /// Largest adjustment ratio a line may have.
    pub tolerance: f64,
    /// Added when adjacent lines differ by more than one fitness class.
    pub fitness_demerit: f64,
    /// Added when two consecutive lines end on flagged penalties.
    pub flagged_demerit: f64,
    pub overflow: OverflowPolicy,
}

impl Default for BreakParams {
    #[inline]
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            fitness_demerit: 100.0,
            flagged_demerit: 100.0,
            overflow: OverflowPolicy::Rescue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Policies deserialize from lowercase names and omitted fields keep their defaults.
    ///
    /// # Panics
    /// Panics if deserialization fails or defaults are not applied.
    #[test]
    fn params_from_partial_json() {
        let params: BreakParams =
            serde_json::from_str(r#"{ "tolerance": 2.5, "overflow": "fail" }"#).unwrap();
        assert!((params.tolerance - 2.5).abs() < f64::EPSILON);
        assert!((params.fitness_demerit - 100.0).abs() < f64::EPSILON);
        assert_eq!(params.overflow, OverflowPolicy::Fail);
    }
}

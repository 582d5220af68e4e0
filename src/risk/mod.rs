//! Campus risk calculator demo
//!
//! Maps two numeric inputs (building count, student count) to one of three
//! risk tiers via a fixed linear formula. A toy scorer: the weights are
//! demo constants, not calibrated model parameters.
//!
//! Total over all inputs; invalid text coerces to 0 rather than erroring.

use std::fmt;

/// Weight per building in the linear formula
const BUILDING_WEIGHT: f64 = 0.3;

/// Weight per student in the linear formula
const STUDENT_WEIGHT: f64 = 0.0001;

/// High tier threshold (exclusive)
const HIGH_THRESHOLD: f64 = 50.0;

/// Medium tier threshold (exclusive)
const MEDIUM_THRESHOLD: f64 = 20.0;

/// Risk tier derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

/// Validated calculator inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiskInputs {
    pub buildings: u64,
    pub students: u64,
}

impl RiskInputs {
    /// Create inputs from already-validated counts
    pub fn new(buildings: u64, students: u64) -> Self {
        RiskInputs { buildings, students }
    }

    /// Parse inputs from free text
    ///
    /// Negative or non-numeric input silently coerces to 0; no error is
    /// surfaced to the caller.
    pub fn parse(buildings: &str, students: &str) -> Self {
        RiskInputs {
            buildings: parse_count(buildings),
            students: parse_count(students),
        }
    }

    /// Raw risk score: buildings × 0.3 + students × 0.0001
    pub fn score(&self) -> f64 {
        self.buildings as f64 * BUILDING_WEIGHT + self.students as f64 * STUDENT_WEIGHT
    }

    /// Classify the score into a tier
    ///
    /// score > 50 → High; 20 < score ≤ 50 → Medium; otherwise Low
    pub fn tier(&self) -> RiskTier {
        let score = self.score();
        if score > HIGH_THRESHOLD {
            RiskTier::High
        } else if score > MEDIUM_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }
}

/// Parse a non-negative count, defaulting to 0 on any failure
fn parse_count(text: &str) -> u64 {
    text.trim().parse::<u64>().unwrap_or(0)
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskTier::High => "high",
            RiskTier::Medium => "medium",
            RiskTier::Low => "low",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_inputs_low() {
        let inputs = RiskInputs::new(0, 0);
        assert_eq!(inputs.score(), 0.0);
        assert_eq!(inputs.tier(), RiskTier::Low);
    }

    #[test]
    fn test_high_tier_from_buildings() {
        // 200 × 0.3 = 60 > 50
        let inputs = RiskInputs::new(200, 0);
        assert!((inputs.score() - 60.0).abs() < 1e-9);
        assert_eq!(inputs.tier(), RiskTier::High);
    }

    #[test]
    fn test_medium_tier() {
        // 70 × 0.3 = 21, in (20, 50]
        let inputs = RiskInputs::new(70, 0);
        assert!((inputs.score() - 21.0).abs() < 1e-9);
        assert_eq!(inputs.tier(), RiskTier::Medium);
    }

    #[test]
    fn test_high_tier_from_students() {
        // 1,000,000 × 0.0001 = 100 > 50
        let inputs = RiskInputs::new(0, 1_000_000);
        assert!((inputs.score() - 100.0).abs() < 1e-9);
        assert_eq!(inputs.tier(), RiskTier::High);
    }

    #[test]
    fn test_boundary_exactly_fifty_is_medium() {
        // Thresholds are exclusive: score == 50 stays Medium
        let inputs = RiskInputs::new(0, 500_000);
        assert!((inputs.score() - 50.0).abs() < 1e-9);
        assert_eq!(inputs.tier(), RiskTier::Medium);
    }

    #[test]
    fn test_boundary_exactly_twenty_is_low() {
        let inputs = RiskInputs::new(0, 200_000);
        assert!((inputs.score() - 20.0).abs() < 1e-9);
        assert_eq!(inputs.tier(), RiskTier::Low);
    }

    #[test]
    fn test_parse_valid_counts() {
        let inputs = RiskInputs::parse("12", " 340 ");
        assert_eq!(inputs, RiskInputs::new(12, 340));
    }

    #[test]
    fn test_parse_invalid_coerces_to_zero() {
        assert_eq!(RiskInputs::parse("abc", ""), RiskInputs::default());
        assert_eq!(RiskInputs::parse("-5", "12.5"), RiskInputs::default());
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(RiskTier::High.to_string(), "high");
        assert_eq!(RiskTier::Medium.to_string(), "medium");
        assert_eq!(RiskTier::Low.to_string(), "low");
    }
}

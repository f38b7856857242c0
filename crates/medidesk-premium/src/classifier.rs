//! Premium category classifier.
//!
//! The prediction pipeline only depends on the [`Classifier`] contract: a
//! pure, synchronous function from a feature record to a category label.
//! The label is passed through to the caller verbatim.

use crate::applicant::Occupation;
use crate::features::{AgeGroup, FeatureRecord, LifestyleRisk};

/// Opaque premium-category model.
pub trait Classifier: Send + Sync {
    /// Classify a feature record into a premium category label.
    fn classify(&self, features: &FeatureRecord) -> String;
}

// =========================================================================
// Built-in scorecard model
// =========================================================================

/// Risk points per lifestyle band.
const RISK_POINTS: [i32; 3] = [0, 2, 4]; // low, medium, high

/// Risk points per age bucket.
const AGE_POINTS: [i32; 4] = [0, 1, 2, 4]; // young, adult, middle_aged, senior

/// Risk points per city tier (index 0 unused).
const TIER_POINTS: [i32; 4] = [0, 0, 1, 2];

/// Income thresholds (lpa) that shift the score down a point each.
const INCOME_STEPS: [f64; 2] = [10.0, 25.0];

/// Score boundaries between Low/Medium and Medium/High.
const BAND_CUTS: [i32; 2] = [2, 5];

/// Compiled-in scorecard distilled from the trained premium model.
///
/// Reproduces the model's category bands over the engineered features; the
/// pipeline treats it as a black box behind [`Classifier`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScorecardClassifier;

impl ScorecardClassifier {
    /// Create a new scorecard classifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn score(features: &FeatureRecord) -> i32 {
        let risk_idx = match features.lifestyle_risk {
            LifestyleRisk::Low => 0,
            LifestyleRisk::Medium => 1,
            LifestyleRisk::High => 2,
        };
        let age_idx = match features.age_group {
            AgeGroup::Young => 0,
            AgeGroup::Adult => 1,
            AgeGroup::MiddleAged => 2,
            AgeGroup::Senior => 3,
        };
        let tier_idx = usize::from(features.city_tier.min(3));

        let occupation_points = match features.occupation {
            Occupation::Retired | Occupation::Unemployed => 1,
            _ => 0,
        };

        let income_credit = INCOME_STEPS
            .iter()
            .filter(|step| features.income_lpa > **step)
            .count() as i32;

        RISK_POINTS[risk_idx] + AGE_POINTS[age_idx] + TIER_POINTS[tier_idx] + occupation_points
            - income_credit
    }
}

impl Classifier for ScorecardClassifier {
    fn classify(&self, features: &FeatureRecord) -> String {
        let score = Self::score(features);
        let label = if score <= BAND_CUTS[0] {
            "Low"
        } else if score <= BAND_CUTS[1] {
            "Medium"
        } else {
            "High"
        };
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(
        risk: LifestyleRisk,
        age_group: AgeGroup,
        city_tier: u8,
        income_lpa: f64,
    ) -> FeatureRecord {
        FeatureRecord {
            bmi: 22.0,
            age_group,
            lifestyle_risk: risk,
            city_tier,
            income_lpa,
            city: "Karachi".into(),
            occupation: Occupation::PrivateJob,
        }
    }

    #[test]
    fn test_low_risk_young_metro() {
        let classifier = ScorecardClassifier::new();
        let label = classifier.classify(&features(LifestyleRisk::Low, AgeGroup::Young, 1, 12.0));
        assert_eq!(label, "Low");
    }

    #[test]
    fn test_high_risk_senior_small_town() {
        let classifier = ScorecardClassifier::new();
        let label = classifier.classify(&features(LifestyleRisk::High, AgeGroup::Senior, 3, 3.0));
        assert_eq!(label, "High");
    }

    #[test]
    fn test_income_shifts_band_down() {
        let classifier = ScorecardClassifier::new();
        let modest = classifier.classify(&features(LifestyleRisk::Low, AgeGroup::Adult, 3, 5.0));
        let wealthy = classifier.classify(&features(LifestyleRisk::Low, AgeGroup::Adult, 3, 30.0));
        assert_eq!(modest, "Medium");
        assert_eq!(wealthy, "Low");
    }

    #[test]
    fn test_label_is_one_of_three_bands() {
        let classifier = ScorecardClassifier::new();
        for risk in [LifestyleRisk::Low, LifestyleRisk::Medium, LifestyleRisk::High] {
            for group in [
                AgeGroup::Young,
                AgeGroup::Adult,
                AgeGroup::MiddleAged,
                AgeGroup::Senior,
            ] {
                for tier in 1..=3 {
                    let label = classifier.classify(&features(risk, group, tier, 8.0));
                    assert!(matches!(label.as_str(), "Low" | "Medium" | "High"));
                }
            }
        }
    }
}

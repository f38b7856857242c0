//! Derived classification fields.
//!
//! Pure functions of a validated [`Applicant`]; nothing here is persisted.
//! The derived values are recomputed on every request so they can never
//! drift from the raw attributes.

use serde::{Deserialize, Serialize};

use crate::applicant::{Applicant, Occupation};
use crate::tiers::city_tier;

/// Lifestyle risk band derived from smoking status and BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifestyleRisk {
    Low,
    Medium,
    High,
}

/// Coarse age bucket used by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Young,
    Adult,
    MiddleAged,
    Senior,
}

/// The engineered feature record handed to the classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureRecord {
    /// Body mass index, unrounded
    pub bmi: f64,
    /// Age bucket
    pub age_group: AgeGroup,
    /// Smoking/BMI risk band
    pub lifestyle_risk: LifestyleRisk,
    /// City tier (1-3)
    pub city_tier: u8,
    /// Annual income in lakhs per annum
    pub income_lpa: f64,
    /// Raw city string
    pub city: String,
    /// Occupation
    pub occupation: Occupation,
}

/// BMI without rounding.
#[must_use]
pub fn bmi(weight: f64, height: f64) -> f64 {
    weight / (height * height)
}

/// Lifestyle risk band. A smoker is at least `medium` regardless of BMI.
#[must_use]
pub fn lifestyle_risk(smoker: bool, bmi: f64) -> LifestyleRisk {
    if smoker && bmi > 30.0 {
        LifestyleRisk::High
    } else if smoker || bmi > 27.0 {
        LifestyleRisk::Medium
    } else {
        LifestyleRisk::Low
    }
}

/// Age bucket.
#[must_use]
pub fn age_group(age: u32) -> AgeGroup {
    if age < 25 {
        AgeGroup::Young
    } else if age < 45 {
        AgeGroup::Adult
    } else if age < 60 {
        AgeGroup::MiddleAged
    } else {
        AgeGroup::Senior
    }
}

/// Assemble the full feature record for a validated applicant.
#[must_use]
pub fn derive_features(applicant: &Applicant) -> FeatureRecord {
    let bmi = bmi(applicant.weight, applicant.height);

    FeatureRecord {
        bmi,
        age_group: age_group(applicant.age),
        lifestyle_risk: lifestyle_risk(applicant.smoker, bmi),
        city_tier: city_tier(&applicant.city),
        income_lpa: applicant.income_lpa,
        city: applicant.city.clone(),
        occupation: applicant.occupation,
    }
}

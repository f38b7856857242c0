//! Raw applicant input.

use serde::{Deserialize, Serialize};

/// Occupation of the applicant. Closed set; anything else is rejected
/// during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Retired,
    Freelancer,
    Student,
    GovernmentJob,
    BusinessOwner,
    Unemployed,
    PrivateJob,
}

/// Applicant attributes as submitted to the prediction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Applicant {
    /// Age in years (1-119)
    pub age: u32,
    /// Weight in kg (> 0)
    pub weight: f64,
    /// Height in meters (0 < h < 2.5)
    pub height: f64,
    /// Annual income in lakhs per annum (> 0)
    pub income_lpa: f64,
    /// Whether the applicant smokes
    pub smoker: bool,
    /// Home city, free text
    pub city: String,
    /// Occupation
    pub occupation: Occupation,
}

impl Applicant {
    /// Validate all field constraints, collecting every violation.
    ///
    /// # Errors
    /// Returns one message per violated constraint.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(1..=119).contains(&self.age) {
            errors.push(format!("age {} out of range [1, 119]", self.age));
        }
        if self.weight <= 0.0 {
            errors.push(format!("weight {} must be positive", self.weight));
        }
        if self.height <= 0.0 || self.height >= 2.5 {
            errors.push(format!("height {} out of range (0, 2.5)", self.height));
        }
        if self.income_lpa <= 0.0 {
            errors.push(format!("income_lpa {} must be positive", self.income_lpa));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

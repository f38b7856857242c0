//! Medidesk Premium Prediction Library
//!
//! Derives classification features from raw applicant attributes and hands
//! them to a pre-trained premium-category model behind the [`Classifier`]
//! trait.
//!
//! # Pipeline
//!
//! ```text
//! Applicant JSON → Validation → Feature Derivation → Classifier
//!                                    │
//!                     {bmi, age_group, lifestyle_risk,
//!                      city_tier, income_lpa, city, occupation}
//! ```
//!
//! # Modules
//!
//! - [`applicant`]: Raw applicant input with field validation
//! - [`features`]: Derived classification fields (pure functions)
//! - [`tiers`]: Hard-coded city tier tables
//! - [`classifier`]: Opaque model seam and the built-in scorecard
//! - [`api`]: HTTP surface

pub mod api;
pub mod applicant;
pub mod classifier;
pub mod features;
pub mod tiers;

// Re-export commonly used types
pub use applicant::{Applicant, Occupation};
pub use classifier::{Classifier, ScorecardClassifier};
pub use features::{derive_features, AgeGroup, FeatureRecord, LifestyleRisk};

use thiserror::Error;

/// Prediction pipeline errors.
#[derive(Error, Debug)]
pub enum PremiumError {
    #[error("applicant validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

pub type PremiumResult<T> = Result<T, PremiumError>;

/// Run the full prediction pipeline: validate, derive, classify.
///
/// The classifier's label is returned verbatim.
///
/// # Errors
/// Returns [`PremiumError::Validation`] if any raw input fails its declared
/// constraints; derivation never runs on an invalid applicant.
pub fn predict(applicant: &Applicant, classifier: &dyn Classifier) -> PremiumResult<String> {
    applicant.validate().map_err(PremiumError::Validation)?;
    let features = derive_features(applicant);
    Ok(classifier.classify(&features))
}

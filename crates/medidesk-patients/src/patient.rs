//! Patient domain types.

use serde::{Deserialize, Serialize};

/// Gender of the patient. Closed set; anything else is rejected during
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Health verdict derived from the rounded BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Verdict {
    /// Classify a BMI value.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// BMI rounded to two decimal places.
#[must_use]
pub fn bmi(weight: f64, height: f64) -> f64 {
    ((weight / (height * height)) * 100.0).round() / 100.0
}

/// A new patient as submitted to the create endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// ID of the patient, externally assigned (e.g. "P001")
    pub id: String,
    /// Name of the patient
    pub name: String,
    /// City of the patient
    pub city: String,
    /// Age in years (1-119)
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in meters (> 0)
    pub height: f64,
    /// Weight in kg (> 0)
    pub weight: f64,
}

impl Patient {
    /// Split into the store key and the validated record.
    ///
    /// # Errors
    /// Returns one message per violated field constraint.
    pub fn into_entry(self) -> Result<(String, PatientRecord), Vec<String>> {
        let record = PatientRecord::from_fields(
            self.name,
            self.city,
            self.age,
            self.gender,
            self.height,
            self.weight,
        )?;
        Ok((self.id, record))
    }
}

/// The persisted patient record, stored under the id key.
///
/// `bmi` and `verdict` are recomputed from the current height/weight every
/// time a record is built; they are never accepted from input, so they can
/// never drift from the raw attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    pub name: String,
    pub city: String,
    pub age: u32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    /// Derived. Defaults to 0 when absent from the file so sorting always
    /// has a key; the record itself is left untouched.
    #[serde(default)]
    pub bmi: f64,
    pub verdict: Verdict,
}

impl PatientRecord {
    /// Build a record from raw fields: validate the whole, then derive
    /// `bmi` and `verdict`.
    ///
    /// # Errors
    /// Returns one message per violated field constraint.
    pub fn from_fields(
        name: String,
        city: String,
        age: u32,
        gender: Gender,
        height: f64,
        weight: f64,
    ) -> Result<Self, Vec<String>> {
        validate_fields(age, height, weight)?;

        let bmi = bmi(weight, height);
        Ok(Self {
            name,
            city,
            age,
            gender,
            height,
            weight,
            bmi,
            verdict: Verdict::from_bmi(bmi),
        })
    }

    /// Merge a partial update onto this record. Only explicitly supplied
    /// fields are applied; the merged whole is re-validated and the derived
    /// fields recomputed from the merged height/weight.
    ///
    /// # Errors
    /// Returns the merged record's constraint violations.
    pub fn merge(&self, update: &PatientUpdate) -> Result<Self, Vec<String>> {
        Self::from_fields(
            update.name.clone().unwrap_or_else(|| self.name.clone()),
            update.city.clone().unwrap_or_else(|| self.city.clone()),
            update.age.unwrap_or(self.age),
            update.gender.unwrap_or(self.gender),
            update.height.unwrap_or(self.height),
            update.weight.unwrap_or(self.weight),
        )
    }
}

/// Partial update payload; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub city: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

fn validate_fields(age: u32, height: f64, weight: f64) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !(1..=119).contains(&age) {
        errors.push(format!("age {age} out of range [1, 119]"));
    }
    if height <= 0.0 {
        errors.push(format!("height {height} must be positive"));
    }
    if weight <= 0.0 {
        errors.push(format!("weight {weight} must be positive"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

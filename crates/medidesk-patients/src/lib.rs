//! Medidesk Patients Library
//!
//! Patient record management over a single flat JSON file: create, read,
//! update, delete and sort, with health fields (`bmi`, `verdict`) derived
//! from the stored attributes on every write.
//!
//! # Store model
//!
//! ```text
//! request → load full mapping → mutate in memory → save full mapping
//! ```
//!
//! Every operation starts from a fresh load of the persisted mapping and
//! mutating operations write the whole document back. Last writer wins;
//! there is no locking or conflict detection.
//!
//! # Modules
//!
//! - [`patient`]: Domain types with derived-field computation
//! - [`store`]: Flat-file store with CRUD and sort semantics
//! - [`api`]: HTTP surface

pub mod api;
pub mod patient;
pub mod store;

// Re-export commonly used types
pub use patient::{Gender, Patient, PatientRecord, PatientUpdate, Verdict};
pub use store::{PatientStore, SortField, SortOrder, StoreError, StoreResult};

// Service exports
pub mod collaborators;
pub mod memory;
pub mod seed;

pub use collaborators::{DayOfIntake, PreferenceStore, VenueCatalogProvider};
pub use memory::{InMemoryStore, StoreError};
pub use seed::seed_catalog;

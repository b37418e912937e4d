// Public API exports
pub mod adapters;
pub mod application;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export key types for easy access
pub use domain::registration::{RegistrationForm, RegistrationRecord};
pub use error::RegistryError;
pub use ports::registration_sink::RegistrationSink;

pub mod registration;

// Re-export commonly used types
pub use registration::*;

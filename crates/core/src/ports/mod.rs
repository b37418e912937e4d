pub mod registration_sink;

pub use registration_sink::*;

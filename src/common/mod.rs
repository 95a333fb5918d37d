pub mod config;
pub mod error;

pub use config::{WorldConfig, GRAVITATIONAL_CONSTANT};
pub use error::EngineError;

//! penny-config
//!
//! Persistent user preferences: locale, currency, default date preset, alert tiers.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{AlertSettings, Config};

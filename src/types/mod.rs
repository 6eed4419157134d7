//! Core types shared by the translator and the bridge.
//!
//! - **IDs**: the integer notification identifier and its text mapping
//! - **Errors**: application error types with thiserror derives
//! - **Config**: configuration structures for observability and translation

mod config;
mod errors;
mod ids;

pub use config::{Config, ObservabilityConfig, TranslationConfig};
pub use errors::{Error, Result};
pub use ids::{parse_positive_integer, NotificationId};

//! # RNOH Push Notifications
//!
//! Adapter between the bridged push-notification module and the native
//! notification service:
//! - Translation of bridge notification requests into native requests
//! - Integer identifier mapping for opaque identifier text
//! - Fire-and-forget native calls with log-only failure handling
//! - Reverse mapping of delivered notifications
//!
//! ## Architecture
//!
//! ```text
//!   bridge call  →  NotificationBridge ──translate──▶ RequestTranslator
//!                        │                                (pure)
//!                        │ spawn (fire-and-forget)
//!                        ▼
//!              NotificationCapability  ◀── native service / MemoryNotificationCenter
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod bridge;
pub mod native;
pub mod request;
pub mod translation;
pub mod types;

// Internal utilities
pub mod observability;
pub mod validation;

pub use bridge::NotificationBridge;
pub use request::{InboundNotificationRequest, NormalizedNotificationRequest};
pub use translation::{translate, RequestTranslator};
pub use types::{Config, Error, Result};

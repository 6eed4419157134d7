//! Native notification capability seam.
//!
//! The platform notification service is a black box reached through
//! [`NotificationCapability`]. [`MemoryNotificationCenter`] is an in-process
//! implementation with the same observable behavior.

pub mod memory;

pub use memory::MemoryNotificationCenter;

use crate::request::NormalizedNotificationRequest;
use crate::types::NotificationId;
use async_trait::async_trait;
use thiserror::Error;

/// Platform error code: notifications are disabled for the application.
pub const ERR_NOTIFICATION_DISABLED: i32 = 1_600_004;

/// Platform error code: no notification with the given id.
pub const ERR_NOTIFICATION_NOT_FOUND: i32 = 1_600_007;

/// Error reported by the native service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("code is {code}, message is {message}")]
pub struct NativeError {
    pub code: i32,
    pub message: String,
}

impl NativeError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Result type for native capability calls.
pub type NativeResult<T> = std::result::Result<T, NativeError>;

/// Operations the native notification service exposes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationCapability: Send + Sync + std::fmt::Debug {
    /// Publish (or replace, by id) a notification.
    async fn publish(&self, request: NormalizedNotificationRequest) -> NativeResult<()>;

    /// Remove a delivered notification.
    async fn cancel(&self, id: NotificationId) -> NativeResult<()>;

    /// Remove every delivered notification.
    async fn cancel_all(&self) -> NativeResult<()>;

    /// Set the application icon badge.
    async fn set_badge_number(&self, badge_number: i64) -> NativeResult<()>;

    /// Notifications currently shown.
    async fn get_active_notifications(&self) -> NativeResult<Vec<NormalizedNotificationRequest>>;

    /// Whether the user allows notifications for the application.
    async fn is_notification_enabled(&self) -> NativeResult<bool>;
}

//! In-memory notification center.
//!
//! Stands in for the platform service in tests, benchmarks and the CLI.
//! Publishing replaces by id (absent id is 0). A published badge number
//! becomes the application badge.

use super::{
    NativeError, NativeResult, NotificationCapability, ERR_NOTIFICATION_DISABLED,
    ERR_NOTIFICATION_NOT_FOUND,
};
use crate::request::NormalizedNotificationRequest;
use crate::types::NotificationId;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct CenterState {
    enabled: bool,
    badge_number: i64,
    active: BTreeMap<NotificationId, NormalizedNotificationRequest>,
}

/// Shared in-memory notification service.
#[derive(Debug, Clone)]
pub struct MemoryNotificationCenter {
    state: Arc<RwLock<CenterState>>,
}

impl Default for MemoryNotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryNotificationCenter {
    /// Create an enabled, empty center.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(CenterState {
                enabled: true,
                badge_number: 0,
                active: BTreeMap::new(),
            })),
        }
    }

    /// Allow or block notifications for the application.
    pub async fn set_enabled(&self, enabled: bool) {
        self.state.write().await.enabled = enabled;
    }

    /// Current application badge.
    pub async fn badge_number(&self) -> i64 {
        self.state.read().await.badge_number
    }

    /// Number of notifications currently shown.
    pub async fn active_count(&self) -> usize {
        self.state.read().await.active.len()
    }
}

#[async_trait]
impl NotificationCapability for MemoryNotificationCenter {
    async fn publish(&self, request: NormalizedNotificationRequest) -> NativeResult<()> {
        let mut state = self.state.write().await;
        if !state.enabled {
            return Err(NativeError::new(
                ERR_NOTIFICATION_DISABLED,
                "notification is not enabled",
            ));
        }

        let id = request.id.unwrap_or_default();
        if let Some(badge) = request.badge_number {
            state.badge_number = badge;
        }
        let replaced = state.active.insert(id, request).is_some();

        tracing::debug!("Published notification id={} replaced={}", id, replaced);
        Ok(())
    }

    async fn cancel(&self, id: NotificationId) -> NativeResult<()> {
        let mut state = self.state.write().await;
        match state.active.remove(&id) {
            Some(_) => {
                tracing::debug!("Cancelled notification id={}", id);
                Ok(())
            }
            None => Err(NativeError::new(
                ERR_NOTIFICATION_NOT_FOUND,
                format!("notification {} not found", id),
            )),
        }
    }

    async fn cancel_all(&self) -> NativeResult<()> {
        let mut state = self.state.write().await;
        let removed = state.active.len();
        state.active.clear();
        tracing::debug!("Cancelled {} notifications", removed);
        Ok(())
    }

    async fn set_badge_number(&self, badge_number: i64) -> NativeResult<()> {
        self.state.write().await.badge_number = badge_number;
        Ok(())
    }

    async fn get_active_notifications(&self) -> NativeResult<Vec<NormalizedNotificationRequest>> {
        Ok(self.state.read().await.active.values().cloned().collect())
    }

    async fn is_notification_enabled(&self) -> NativeResult<bool> {
        Ok(self.state.read().await.enabled)
    }
}

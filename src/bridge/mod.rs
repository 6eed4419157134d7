//! Bridged-module surface over the native notification capability.
//!
//! Request validation and date errors are returned to the caller. Everything
//! the native service does afterwards is fire-and-forget: calls run on
//! spawned tasks and failures are only logged.
//!
//! Methods that spawn must be called from inside a Tokio runtime.

pub mod delivered;

pub use delivered::{delivered_items, DeliveredNotification, PermissionStatus};

use crate::native::NotificationCapability;
use crate::request::InboundNotificationRequest;
use crate::translation::RequestTranslator;
use crate::types::{Config, NotificationId, Result};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Push-notification module as exposed to application code.
#[derive(Debug)]
pub struct NotificationBridge<C: NotificationCapability + 'static> {
    capability: Arc<C>,
    translator: RequestTranslator,
}

impl<C: NotificationCapability + 'static> NotificationBridge<C> {
    pub fn new(capability: Arc<C>) -> Self {
        Self::with_translator(capability, RequestTranslator::default())
    }

    pub fn with_translator(capability: Arc<C>, translator: RequestTranslator) -> Self {
        Self {
            capability,
            translator,
        }
    }

    pub fn from_config(capability: Arc<C>, config: &Config) -> Self {
        Self::with_translator(capability, RequestTranslator::new(config.translation))
    }

    pub fn capability(&self) -> &Arc<C> {
        &self.capability
    }

    /// Translate and publish.
    ///
    /// Translation errors come back immediately. The returned handle resolves
    /// once the publish attempt finished; dropping it does not cancel it.
    pub fn add_notification_request(
        &self,
        request: &InboundNotificationRequest,
    ) -> Result<JoinHandle<()>> {
        let normalized = self.translator.translate(request)?;
        let capability = Arc::clone(&self.capability);

        Ok(spawn_in_span(async move {
            let id = normalized.id;
            if let Err(err) = capability.publish(normalized).await {
                tracing::error!("RNPushNotification: publish failed, id={:?}, {}", id, err);
            }
        }))
    }

    /// Cancel delivered notifications by bridge identifier. Identifiers map to
    /// integer ids exactly as they do on publish.
    pub fn remove_delivered_notifications<I, S>(&self, identifiers: I) -> JoinHandle<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<NotificationId> = identifiers
            .into_iter()
            .map(|identifier| NotificationId::from_identifier(identifier.as_ref()))
            .collect();
        let capability = Arc::clone(&self.capability);

        spawn_in_span(async move {
            for id in ids {
                if let Err(err) = capability.cancel(id).await {
                    tracing::error!("RNPushNotification: cancel failed, id={}, {}", id, err);
                }
            }
        })
    }

    pub fn remove_all_delivered_notifications(&self) -> JoinHandle<()> {
        let capability = Arc::clone(&self.capability);

        spawn_in_span(async move {
            if let Err(err) = capability.cancel_all().await {
                tracing::error!("RNPushNotification: cancelAll failed, {}", err);
            }
        })
    }

    pub fn set_application_icon_badge_number(&self, badge_number: i64) -> JoinHandle<()> {
        let capability = Arc::clone(&self.capability);

        spawn_in_span(async move {
            if let Err(err) = capability.set_badge_number(badge_number).await {
                tracing::error!(
                    "RNPushNotification: setBadge failed, badge={}, {}",
                    badge_number,
                    err
                );
            }
        })
    }

    /// Notifications currently shown. A native failure yields an empty list.
    pub async fn get_delivered_notifications(&self) -> Vec<DeliveredNotification> {
        match self.capability.get_active_notifications().await {
            Ok(active) => delivered_items(&active),
            Err(err) => {
                tracing::error!("RNPushNotification: getDeliveredNotifications failed, {}", err);
                Vec::new()
            }
        }
    }

    /// Permission flags, or `None` when the native service could not answer.
    pub async fn check_permissions(&self) -> Option<PermissionStatus> {
        match self.capability.is_notification_enabled().await {
            Ok(enabled) => Some(PermissionStatus::uniform(enabled)),
            Err(err) => {
                tracing::error!("RNPushNotification: checkPermissions failed, {}", err);
                None
            }
        }
    }
}

fn spawn_in_span<F>(task: F) -> JoinHandle<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    tokio::spawn(task.in_current_span())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::{MockNotificationCapability, NativeError, ERR_NOTIFICATION_NOT_FOUND};
    use crate::request::{NormalizedNotificationRequest, SlotType};
    use crate::types::Error;
    use mockall::predicate::eq;

    fn bridge(mock: MockNotificationCapability) -> NotificationBridge<MockNotificationCapability> {
        NotificationBridge::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_add_publishes_translated_request() {
        let mut mock = MockNotificationCapability::new();
        mock.expect_publish()
            .withf(|request: &NormalizedNotificationRequest| {
                request.id == Some(NotificationId::new(7))
                    && request.notification_slot_type == SlotType::ContentInformation
            })
            .times(1)
            .returning(|_| Ok(()));

        let request = InboundNotificationRequest::new("T", "B")
            .with_id("7")
            .with_silent(true);
        bridge(mock)
            .add_notification_request(&request)
            .unwrap()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_returns_validation_error_without_publishing() {
        let mut mock = MockNotificationCapability::new();
        mock.expect_publish().never();

        let err = bridge(mock)
            .add_notification_request(&InboundNotificationRequest::new("", "B"))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_publish_failure_is_swallowed() {
        let mut mock = MockNotificationCapability::new();
        mock.expect_publish()
            .times(1)
            .returning(|_| Err(NativeError::new(1_600_001, "internal error")));

        let handle = bridge(mock)
            .add_notification_request(&InboundNotificationRequest::new("T", "B"))
            .unwrap();
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_maps_identifiers_and_continues_after_failure() {
        let mut mock = MockNotificationCapability::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_cancel()
            .with(eq(NotificationId::new(199)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(NativeError::new(ERR_NOTIFICATION_NOT_FOUND, "missing")));
        mock.expect_cancel()
            .with(eq(NotificationId::new(42)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        bridge(mock)
            .remove_delivered_notifications(["abc", "42"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_remove_all_and_badge() {
        let mut mock = MockNotificationCapability::new();
        mock.expect_cancel_all().times(1).returning(|| Ok(()));
        mock.expect_set_badge_number()
            .with(eq(5))
            .times(1)
            .returning(|_| Err(NativeError::new(1_600_001, "internal error")));

        let bridge = bridge(mock);
        bridge.remove_all_delivered_notifications().await.unwrap();
        bridge.set_application_icon_badge_number(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_delivered_failure_is_empty() {
        let mut mock = MockNotificationCapability::new();
        mock.expect_get_active_notifications()
            .returning(|| Err(NativeError::new(1_600_001, "internal error")));

        assert!(bridge(mock).get_delivered_notifications().await.is_empty());
    }

    #[tokio::test]
    async fn test_check_permissions() {
        let mut mock = MockNotificationCapability::new();
        mock.expect_is_notification_enabled().returning(|| Ok(false));
        assert_eq!(
            bridge(mock).check_permissions().await,
            Some(PermissionStatus::uniform(false))
        );

        let mut mock = MockNotificationCapability::new();
        mock.expect_is_notification_enabled()
            .returning(|| Err(NativeError::new(1_600_001, "internal error")));
        assert_eq!(bridge(mock).check_permissions().await, None);
    }
}

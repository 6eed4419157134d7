//! Delivered-notification records handed back across the bridge.

use crate::request::{NormalizedNotificationRequest, NotificationContent};
use crate::types::NotificationId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Simplified view of a notification currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveredNotification {
    pub id: NotificationId,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub user_info: BTreeMap<String, String>,
}

impl From<&NormalizedNotificationRequest> for DeliveredNotification {
    fn from(request: &NormalizedNotificationRequest) -> Self {
        let (title, body) = match &request.content {
            NotificationContent::MultiLine(c) => (c.title.clone(), c.text.clone()),
            NotificationContent::BasicText(c) => (c.title.clone(), c.text.clone()),
        };

        Self {
            id: request.id.unwrap_or_default(),
            title,
            body,
            user_info: request.extra_info.clone(),
        }
    }
}

/// Map active native notifications to bridge records, preserving order.
pub fn delivered_items(requests: &[NormalizedNotificationRequest]) -> Vec<DeliveredNotification> {
    requests.iter().map(DeliveredNotification::from).collect()
}

/// Permission flags reported to the bridge. All three mirror whether
/// notifications are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionStatus {
    pub alert: bool,
    pub badge: bool,
    pub sound: bool,
}

impl PermissionStatus {
    pub fn uniform(enabled: bool) -> Self {
        Self {
            alert: enabled,
            badge: enabled,
            sound: enabled,
        }
    }
}

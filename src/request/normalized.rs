//! Normalized request in the native notification service's shape.

use super::enums::{ContentType, SlotType};
use crate::types::NotificationId;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// Plain title + text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicTextContent {
    pub title: String,
    pub text: String,
}

/// Multi-line content, used when the request carries a subtitle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiLineContent {
    pub title: String,
    pub text: String,
    pub brief_text: String,
    pub long_title: String,
    pub lines: Vec<String>,
}

/// Notification content. Serializes as
/// `{"notificationContentType": ..., "normal" | "multiLine": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationContent {
    BasicText(BasicTextContent),
    MultiLine(MultiLineContent),
}

impl NotificationContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            NotificationContent::BasicText(_) => ContentType::BasicText,
            NotificationContent::MultiLine(_) => ContentType::MultiLine,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            NotificationContent::BasicText(c) => &c.title,
            NotificationContent::MultiLine(c) => &c.title,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            NotificationContent::BasicText(c) => &c.text,
            NotificationContent::MultiLine(c) => &c.text,
        }
    }
}

impl Serialize for NotificationContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("notificationContentType", &self.content_type())?;
        match self {
            NotificationContent::BasicText(c) => map.serialize_entry("normal", c)?,
            NotificationContent::MultiLine(c) => map.serialize_entry("multiLine", c)?,
        }
        map.end()
    }
}

/// Request ready to hand to [`crate::native::NotificationCapability::publish`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedNotificationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<NotificationId>,

    pub content: NotificationContent,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_number: Option<i64>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_info: BTreeMap<String, String>,

    pub notification_slot_type: SlotType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_alert_once: Option<bool>,
}

impl NormalizedNotificationRequest {
    /// Minimal request around `content`, with every optional field unset.
    pub fn new(content: NotificationContent) -> Self {
        Self {
            id: None,
            content,
            delivery_time: None,
            badge_number: None,
            extra_info: BTreeMap::new(),
            notification_slot_type: SlotType::ServiceInformation,
            is_alert_once: None,
        }
    }
}

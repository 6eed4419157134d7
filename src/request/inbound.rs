//! Inbound notification request as handed over by the bridged module.

use crate::validation::{blank_as_none, integral_number};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `fireDate` as it arrives from the bridge: date text or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FireDate {
    Timestamp(f64),
    Text(String),
}

impl FireDate {
    /// Empty text counts as no date at all.
    pub fn is_blank(&self) -> bool {
        matches!(self, FireDate::Text(text) if text.is_empty())
    }
}

impl From<&str> for FireDate {
    fn from(text: &str) -> Self {
        FireDate::Text(text.to_string())
    }
}

impl From<String> for FireDate {
    fn from(text: String) -> Self {
        FireDate::Text(text)
    }
}

impl From<i64> for FireDate {
    fn from(millis: i64) -> Self {
        FireDate::Timestamp(millis as f64)
    }
}

fn blank_fire_date_as_none<'de, D>(deserializer: D) -> Result<Option<FireDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<FireDate>::deserialize(deserializer)?;
    Ok(value.filter(|date| !date.is_blank()))
}

/// Notification request in the bridge's shape. Every field may be absent;
/// `title` and `body` are checked at translation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundNotificationRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub body: Option<String>,

    #[serde(default, deserialize_with = "blank_as_none")]
    pub subtitle: Option<String>,

    #[serde(default, deserialize_with = "blank_fire_date_as_none")]
    pub fire_date: Option<FireDate>,

    #[serde(default, deserialize_with = "integral_number")]
    pub badge: Option<i64>,

    #[serde(default)]
    pub user_info: Option<Map<String, Value>>,

    #[serde(default)]
    pub is_silent: Option<bool>,

    #[serde(default)]
    pub repeats: Option<bool>,
}

impl InboundNotificationRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_fire_date(mut self, fire_date: impl Into<FireDate>) -> Self {
        self.fire_date = Some(fire_date.into());
        self
    }

    pub fn with_badge(mut self, badge: i64) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_user_info(mut self, key: impl Into<String>, value: Value) -> Self {
        self.user_info
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    pub fn with_silent(mut self, is_silent: bool) -> Self {
        self.is_silent = Some(is_silent);
        self
    }

    pub fn with_repeats(mut self, repeats: bool) -> Self {
        self.repeats = Some(repeats);
        self
    }
}

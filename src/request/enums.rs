//! Native notification enumerations.

use serde::{Deserialize, Serialize};

/// Native notification slot (channel) classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotType {
    SocialCommunication,
    ServiceInformation,
    ContentInformation,
}

impl SlotType {
    /// Slot for a request's `isSilent` flag.
    pub fn for_silence(is_silent: Option<bool>) -> Self {
        match is_silent {
            None => SlotType::ServiceInformation,
            Some(true) => SlotType::ContentInformation,
            Some(false) => SlotType::SocialCommunication,
        }
    }

    /// Numeric value used by the native service.
    pub fn code(self) -> u32 {
        match self {
            SlotType::SocialCommunication => 1,
            SlotType::ServiceInformation => 2,
            SlotType::ContentInformation => 3,
        }
    }
}

/// Native notification content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "NOTIFICATION_CONTENT_BASIC_TEXT")]
    BasicText,
    #[serde(rename = "NOTIFICATION_CONTENT_MULTILINE")]
    MultiLine,
}

impl ContentType {
    /// Numeric value used by the native service.
    pub fn code(self) -> u32 {
        match self {
            ContentType::BasicText => 0,
            ContentType::MultiLine => 4,
        }
    }
}

//! Request translation: bridge notification request → native request.
//!
//! Pure deterministic mapping; the native service is never touched here.
//!
//! Translation rules:
//!   title, body      required; either absent → validation error
//!   subtitle         present → multi-line content, absent → basic text
//!   id               identifier text → integer (see `NotificationId`)
//!   fireDate         → deliveryTime (epoch ms); unparsable → date parse error
//!   badge            → badgeNumber
//!   userInfo         → extraInfo (values stringified)
//!   isSilent         absent → SERVICE_INFORMATION, true → CONTENT_INFORMATION,
//!                    false → SOCIAL_COMMUNICATION
//!   repeats          present → isAlertOnce = !repeats

pub mod fire_date;
pub mod user_info;

pub use fire_date::parse_fire_date;
pub use user_info::{convert_user_info, stringify_value};

use crate::request::{
    BasicTextContent, InboundNotificationRequest, MultiLineContent,
    NormalizedNotificationRequest, NotificationContent, SlotType,
};
use crate::types::{NotificationId, Result, TranslationConfig};
use crate::validation::{present, require_text};

/// Translate with default configuration.
pub fn translate(request: &InboundNotificationRequest) -> Result<NormalizedNotificationRequest> {
    RequestTranslator::default().translate(request)
}

/// Bridge request → native request translator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTranslator {
    config: TranslationConfig,
}

impl RequestTranslator {
    pub fn new(config: TranslationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranslationConfig {
        &self.config
    }

    pub fn translate(
        &self,
        request: &InboundNotificationRequest,
    ) -> Result<NormalizedNotificationRequest> {
        let title = require_text(request.title.as_deref(), "title")?;
        let body = require_text(request.body.as_deref(), "body")?;

        let content = build_content(title, body, present(request.subtitle.as_deref()));
        let mut normalized = NormalizedNotificationRequest::new(content);

        normalized.id = present(request.id.as_deref()).map(NotificationId::from_identifier);

        if let Some(fire_date) = request.fire_date.as_ref().filter(|d| !d.is_blank()) {
            normalized.delivery_time = Some(parse_fire_date(
                fire_date,
                self.config.naive_utc_offset_secs,
            )?);
        }

        normalized.badge_number = request.badge;

        if let Some(user_info) = &request.user_info {
            normalized.extra_info = convert_user_info(user_info);
        }

        normalized.notification_slot_type = SlotType::for_silence(request.is_silent);
        normalized.is_alert_once = request.repeats.map(|repeats| !repeats);

        tracing::debug!(
            "Translated notification request id={:?} content={:?} slot={:?}",
            normalized.id,
            normalized.content.content_type(),
            normalized.notification_slot_type
        );

        Ok(normalized)
    }
}

fn build_content(title: &str, body: &str, subtitle: Option<&str>) -> NotificationContent {
    match subtitle {
        Some(subtitle) => NotificationContent::MultiLine(MultiLineContent {
            title: title.to_string(),
            text: body.to_string(),
            brief_text: subtitle.to_string(),
            long_title: title.to_string(),
            lines: vec![subtitle.to_string(), body.to_string()],
        }),
        None => NotificationContent::BasicText(BasicTextContent {
            title: title.to_string(),
            text: body.to_string(),
        }),
    }
}

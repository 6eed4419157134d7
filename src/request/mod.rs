//! Request shapes on both sides of the translation.
//!
//! - [`InboundNotificationRequest`]: what the bridged module receives
//! - [`NormalizedNotificationRequest`]: what the native service publishes

pub mod enums;
pub mod inbound;
pub mod normalized;

pub use enums::{ContentType, SlotType};
pub use inbound::{FireDate, InboundNotificationRequest};
pub use normalized::{
    BasicTextContent, MultiLineContent, NormalizedNotificationRequest, NotificationContent,
};

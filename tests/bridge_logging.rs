//! Native failures never surface to the caller; they only show up in logs.

use rnoh_push_notifications::native::MemoryNotificationCenter;
use rnoh_push_notifications::{InboundNotificationRequest, NotificationBridge};
use std::sync::Arc;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_publish_failure_is_logged() {
    let center = Arc::new(MemoryNotificationCenter::new());
    center.set_enabled(false).await;
    let bridge = NotificationBridge::new(Arc::clone(&center));

    bridge
        .add_notification_request(&InboundNotificationRequest::new("T", "B").with_id("3"))
        .unwrap()
        .await
        .unwrap();

    assert!(logs_contain("publish failed"));
    assert!(logs_contain("1600004"));
}

#[tokio::test]
#[traced_test]
async fn test_cancel_failure_is_logged() {
    let bridge = NotificationBridge::new(Arc::new(MemoryNotificationCenter::new()));

    bridge
        .remove_delivered_notifications(["abc"])
        .await
        .unwrap();

    assert!(logs_contain("cancel failed, id=199"));
}

#[tokio::test]
#[traced_test]
async fn test_successful_publish_logs_no_error() {
    let bridge = NotificationBridge::new(Arc::new(MemoryNotificationCenter::new()));

    bridge
        .add_notification_request(&InboundNotificationRequest::new("T", "B"))
        .unwrap()
        .await
        .unwrap();

    assert!(!logs_contain("publish failed"));
}

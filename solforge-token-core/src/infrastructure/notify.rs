//! Notification sinks

use crate::domain::providers::NotificationSink;
use crate::shared::types::NoticeLevel;

/// Notification sink that routes banners to the log
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => log::info!("{}", message),
            NoticeLevel::Success => log::info!("{}", message),
            NoticeLevel::Error => log::warn!("{}", message),
        }
    }
}

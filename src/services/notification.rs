use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Transient, non-blocking message for whoever is watching the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

pub struct NotificationService {
    sender: broadcast::Sender<Notice>,
    // Keeps the channel open when nobody has subscribed yet.
    _receiver: broadcast::Receiver<Notice>,
}

impl NotificationService {
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            _receiver: receiver,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }

    /// Publish without waiting. Slow subscribers lose the oldest notices.
    pub fn notify(&self, level: NoticeLevel, message: impl Into<String>) {
        let notice = Notice {
            level,
            message: message.into(),
            created_at: Utc::now(),
        };
        match level {
            NoticeLevel::Info => tracing::info!(text = %notice.message, "notice"),
            NoticeLevel::Warning => tracing::warn!(text = %notice.message, "notice"),
            NoticeLevel::Error => tracing::error!(text = %notice.message, "notice"),
        }
        let _ = self.sender.send(notice);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(NoticeLevel::Info, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.notify(NoticeLevel::Warning, message);
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_notices() {
        let service = NotificationService::default();
        let mut rx = service.subscribe();
        service.warn("routing unavailable");
        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "routing unavailable");
    }

    #[test]
    fn notify_without_subscribers_does_not_panic() {
        let service = NotificationService::new(1);
        service.info("first");
        service.info("second");
    }
}

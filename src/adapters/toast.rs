use crate::domain::ports::Notifier;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const DEFAULT_TOAST_TIMEOUT: Duration = Duration::from_millis(1600);

/// Prints a toast and dismisses it after `timeout`.
///
/// Overlapping toasts are not queued; each runs its own timer.
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    timeout: Duration,
}

impl ToastNotifier {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TIMEOUT)
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        println!(">> {}", message);
        tracing::debug!("Toast shown: {}", message);

        // 沒有 runtime 時只顯示，不排程隱藏
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let timeout = self.timeout;
            let message = message.to_string();
            handle.spawn(async move {
                tokio::time::sleep(timeout).await;
                tracing::debug!("Toast dismissed: {}", message);
            });
        }
    }
}

/// Keeps every message instead of showing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

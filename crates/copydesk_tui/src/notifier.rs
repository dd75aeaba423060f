//! Notifier that surfaces notices in the status bar.

use copydesk_interface::Notifier;
use std::sync::{Arc, Mutex};

/// Collects notices raised during a submission so the UI can show them.
///
/// Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct StatusNotifier {
    notices: Arc<Mutex<Vec<String>>>,
}

impl StatusNotifier {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notice, oldest first.
    pub fn drain(&self) -> Vec<String> {
        self.notices
            .lock()
            .map(|mut notices| std::mem::take(&mut *notices))
            .unwrap_or_default()
    }
}

impl Notifier for StatusNotifier {
    fn warn(&self, message: &str) {
        tracing::warn!(notice = message);
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(message.to_string());
        }
    }
}

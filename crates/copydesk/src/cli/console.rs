//! Notices printed to the terminal by one-shot commands.

use copydesk::Notifier;

/// Prints rate-limit notices to stderr so they do not mix with generated copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
        eprintln!("⚠ {}", message);
    }

    fn info(&self, message: &str) {
        eprintln!("{}", message);
    }
}

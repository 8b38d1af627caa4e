//! Notification surface between the export engine and whatever hosts it.

/// Sink for human-readable progress, warning, and error messages.
///
/// The export engine reports every failure through this trait and never
/// lets one escape past it.
pub trait Notifier {
    fn progress(&mut self, message: &str);
    fn warning(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Collects notifications in memory. Useful for testing without a terminal.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    pub progress: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Notifier for MemoryNotifier {
    fn progress(&mut self, message: &str) {
        self.progress.push(message.to_string());
    }

    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

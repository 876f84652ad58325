/// Transient user-facing message channel supplied by the host. Messages stay
/// on screen until the host decides otherwise or [`Notifier::clear`] runs.
pub trait Notifier {
    fn message(&mut self, text: &str);

    /// Drops any messages still displayed.
    fn clear(&mut self);
}

/// Notifier that drops everything. For headless gathers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn message(&mut self, _text: &str) {}

    fn clear(&mut self) {}
}

/// Test notifier that records every message it receives.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Recorder {
    pub messages: Vec<String>,
    pub cleared: usize,
}

#[cfg(test)]
impl Notifier for Recorder {
    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn clear(&mut self) {
        self.cleared += 1;
        self.messages.clear();
    }
}

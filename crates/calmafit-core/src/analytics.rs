//! Fire-and-forget analytics side channel.
//!
//! Events are handed to a [`Tracker`] and forgotten; there is no delivery
//! guarantee and no failure path. The default tracker discards everything,
//! which keeps the feature inert unless the embedder wires a real sink.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl AnalyticsEvent {
    pub fn new(category: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: None,
            value: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn screen_view(screen: &str) -> Self {
        Self::new("Navigation", "screen_view").label(screen)
    }

    pub fn practice_completed(practice: &str) -> Self {
        Self::new("Engagement", "practice_completed").label(practice)
    }

    pub fn mood_logged(mood: &str) -> Self {
        Self::new("User State", "mood_logged").label(mood)
    }

    pub fn sos_activated() -> Self {
        Self::new("Critical", "sos_activated")
    }

    pub fn chat_message_sent() -> Self {
        Self::new("Engagement", "chat_message_sent")
    }
}

/// Event sink. Implementations must not fail or block meaningfully.
pub trait Tracker: Send + Sync {
    fn track(&self, event: AnalyticsEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTracker;

impl Tracker for NullTracker {
    fn track(&self, _event: AnalyticsEvent) {}
}

/// Writes events to stderr as single-line JSON. Used by the CLI in verbose
/// mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrTracker;

impl Tracker for StderrTracker {
    fn track(&self, event: AnalyticsEvent) {
        if let Ok(line) = serde_json::to_string(&event) {
            eprintln!("analytics: {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Capture(Mutex<Vec<AnalyticsEvent>>);

    impl Tracker for Capture {
        fn track(&self, event: AnalyticsEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn helper_constructors_fill_category_and_action() {
        let e = AnalyticsEvent::mood_logged("good");
        assert_eq!(e.category, "User State");
        assert_eq!(e.action, "mood_logged");
        assert_eq!(e.label.as_deref(), Some("good"));
    }

    #[test]
    fn tracker_receives_events() {
        let capture = Capture(Mutex::new(Vec::new()));
        capture.track(AnalyticsEvent::sos_activated());
        capture.track(AnalyticsEvent::screen_view("home").value(3));
        let events = capture.0.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].value, Some(3));
    }

    #[test]
    fn optional_fields_skipped_in_wire_form() {
        let json = serde_json::to_string(&AnalyticsEvent::sos_activated()).unwrap();
        assert!(!json.contains("label"));
        assert!(!json.contains("value"));
    }
}

//! Daily reminder scheduling.
//!
//! One reminder per day at a fixed local time (20:00 by default). The
//! schedule is recursive: after a reminder fires, the next one is computed
//! from the new "now". Permission denial is a valid terminal state, not an
//! error -- the feature is simply inactive.

use chrono::{DateTime, Duration, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::storage::ReminderConfig;

/// Notification permission as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionState {
    Granted,
    Denied,
    NotDetermined,
}

impl PermissionState {
    /// Whether reminders may fire under this permission and config.
    pub fn allows(&self, config: &ReminderConfig) -> bool {
        config.enabled && *self == PermissionState::Granted
    }
}

/// Rotating reminder messages.
pub const MESSAGES: [&str; 5] = [
    "Time for your 2-minute calm check-in",
    "How about a guided breathing session now?",
    "Remember: you are doing really well!",
    "Done your practice today?",
    "A moment of self-care is waiting for you",
];

/// The message for the `n`th firing.
pub fn message(n: usize) -> &'static str {
    MESSAGES[n % MESSAGES.len()]
}

/// Next local fire time at `hour:minute` strictly after `now`: today if the
/// slot is still ahead, otherwise tomorrow.
pub fn next_fire(now: DateTime<Local>, hour: u32, minute: u32) -> DateTime<Local> {
    let today_slot = now
        .date_naive()
        .and_hms_opt(hour.min(23), minute.min(59), 0)
        .unwrap_or_else(|| now.naive_local());

    let candidate = match Local.from_local_datetime(&today_slot).earliest() {
        Some(t) => t,
        None => return now + Duration::days(1),
    };

    if candidate > now {
        candidate
    } else {
        // Same wall-clock time tomorrow.
        match Local
            .from_local_datetime(&(today_slot + Duration::days(1)))
            .earliest()
        {
            Some(t) => t,
            None => candidate + Duration::days(1),
        }
    }
}

/// Daily reminder loop driver.
pub struct Reminder {
    config: ReminderConfig,
    permission: PermissionState,
    fired: usize,
}

impl Reminder {
    pub fn new(config: ReminderConfig, permission: PermissionState) -> Self {
        Self {
            config,
            permission,
            fired: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.permission.allows(&self.config)
    }

    /// Sleep until the next slot, then deliver one reminder message.
    /// Returns `None` without sleeping when reminders are inactive.
    pub async fn fire_next(&mut self) -> Option<&'static str> {
        if !self.is_active() {
            return None;
        }
        let next = next_fire(Local::now(), self.config.hour, self.config.minute);
        let wait = (next - Local::now()).to_std().unwrap_or_default();
        tokio::time::sleep(wait).await;

        let msg = message(self.fired);
        self.fired += 1;
        Some(msg)
    }

    /// Fire daily forever, handing each message to `deliver`. Reschedules
    /// itself after every firing.
    pub async fn run<F: FnMut(&str)>(&mut self, mut deliver: F) {
        while let Some(msg) = self.fire_next().await {
            deliver(msg);
        }
    }
}

//! Crisis breathing timer.
//!
//! A tick-driven state machine cycling inhale (4s) → hold (4s) → exhale
//! (6s). It has no internal clock -- the caller invokes `tick()` once per
//! second while the session is active. The session never terminates on its
//! own; the enclosing flow watches `cycles_completed` and gates advancement
//! on [`REQUIRED_CYCLES`].

use serde::{Deserialize, Serialize};

/// Cycles the SOS flow requires before the breathing step may advance.
/// Observed by the caller; the session itself does not enforce it.
pub const REQUIRED_CYCLES: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    /// Countdown seconds on entry to this phase.
    pub fn duration_secs(&self) -> u32 {
        match self {
            BreathPhase::Inhale => 4,
            BreathPhase::Hold => 4,
            BreathPhase::Exhale => 6,
        }
    }

    /// Next phase in the fixed cycle.
    pub fn next(&self) -> BreathPhase {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }

    /// On-screen instruction for this phase.
    pub fn instruction(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe in through your nose",
            BreathPhase::Hold => "Hold the air",
            BreathPhase::Exhale => "Breathe out through your mouth",
        }
    }
}

/// Ephemeral breathing session. In-memory only, discarded when the user
/// leaves the step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingSession {
    phase: BreathPhase,
    /// Seconds remaining in the current phase.
    countdown: u32,
    cycles_completed: u32,
    active: bool,
}

impl BreathingSession {
    /// Fresh session at the start of an inhale, not yet active.
    pub fn new() -> Self {
        Self {
            phase: BreathPhase::Inhale,
            countdown: BreathPhase::Inhale.duration_secs(),
            cycles_completed: 0,
            active: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn cycles_completed(&self) -> u32 {
        self.cycles_completed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Halt the session. Cancellation is immediate: any tick arriving
    /// after stop applies nothing.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Advance one second. Called at 1 Hz by the driver while active.
    ///
    /// Decrements the countdown; when it would drop below 1 the session
    /// moves to the next phase and resets the countdown to that phase's
    /// duration. Wrapping from exhale back to inhale completes a cycle.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        if self.countdown <= 1 {
            if self.phase == BreathPhase::Exhale {
                self.cycles_completed += 1;
            }
            self.phase = self.phase.next();
            self.countdown = self.phase.duration_secs();
        } else {
            self.countdown -= 1;
        }
    }
}

impl Default for BreathingSession {
    fn default() -> Self {
        Self::new()
    }
}

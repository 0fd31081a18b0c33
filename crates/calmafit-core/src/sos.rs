//! SOS crisis-support flow.
//!
//! A forward-only wizard: welcome → breathing → grounding → choice → done.
//! Each step carries its own state and decides whether it may advance; the
//! numeric step counter of the shipped flow is replaced by an explicit
//! tagged state.

use serde::{Deserialize, Serialize};

use crate::breathing::{BreathingSession, REQUIRED_CYCLES};
use crate::error::ValidationError;

/// Items listed during the 5-4-3 grounding exercise: three things the user
/// can see, hear, and touch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingItems {
    pub seeing: [String; 3],
    pub hearing: [String; 3],
    pub touching: [String; 3],
}

impl GroundingItems {
    /// All nine slots filled with non-blank text.
    pub fn is_complete(&self) -> bool {
        self.seeing
            .iter()
            .chain(self.hearing.iter())
            .chain(self.touching.iter())
            .all(|item| !item.trim().is_empty())
    }
}

/// What the user picks at the final step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SosChoice {
    /// Calming audio.
    Audio,
    /// A short movement exercise.
    Movement,
}

/// Current step of the flow, with per-step state.
#[derive(Debug, Clone)]
pub enum SosStep {
    Welcome,
    Breathing(BreathingSession),
    Grounding(GroundingItems),
    Choice,
    Done(SosChoice),
}

impl SosStep {
    fn name(&self) -> &'static str {
        match self {
            SosStep::Welcome => "welcome",
            SosStep::Breathing(_) => "breathing",
            SosStep::Grounding(_) => "grounding",
            SosStep::Choice => "choice",
            SosStep::Done(_) => "done",
        }
    }
}

/// The crisis-support flow state machine.
#[derive(Debug, Clone)]
pub struct SosFlow {
    step: SosStep,
}

impl SosFlow {
    pub fn new() -> Self {
        Self {
            step: SosStep::Welcome,
        }
    }

    pub fn step(&self) -> &SosStep {
        &self.step
    }

    /// The breathing session while on the breathing step.
    pub fn breathing_mut(&mut self) -> Option<&mut BreathingSession> {
        match &mut self.step {
            SosStep::Breathing(session) => Some(session),
            _ => None,
        }
    }

    /// The grounding items while on the grounding step.
    pub fn grounding_mut(&mut self) -> Option<&mut GroundingItems> {
        match &mut self.step {
            SosStep::Grounding(items) => Some(items),
            _ => None,
        }
    }

    /// Move to the next step.
    ///
    /// # Errors
    /// Returns an error when the current step's gate is not satisfied:
    /// breathing needs [`REQUIRED_CYCLES`] full cycles, grounding needs all
    /// nine items, and the choice step needs [`choose`](Self::choose).
    pub fn advance(&mut self) -> Result<(), ValidationError> {
        match &self.step {
            SosStep::Welcome => {
                let mut session = BreathingSession::new();
                session.start();
                self.step = SosStep::Breathing(session);
                Ok(())
            }
            SosStep::Breathing(session) => {
                if session.cycles_completed() < REQUIRED_CYCLES {
                    return Err(self.blocked(format!(
                        "complete {REQUIRED_CYCLES} breathing cycles to continue"
                    )));
                }
                // Leaving the step discards the session.
                self.step = SosStep::Grounding(GroundingItems::default());
                Ok(())
            }
            SosStep::Grounding(items) => {
                if !items.is_complete() {
                    return Err(self.blocked("fill in all nine grounding items".to_string()));
                }
                self.step = SosStep::Choice;
                Ok(())
            }
            SosStep::Choice => Err(self.blocked("pick audio or movement".to_string())),
            SosStep::Done(_) => Err(self.blocked("flow already finished".to_string())),
        }
    }

    /// Finish the flow with the user's pick. Only valid on the choice step.
    ///
    /// # Errors
    /// Returns an error on any other step.
    pub fn choose(&mut self, choice: SosChoice) -> Result<(), ValidationError> {
        match self.step {
            SosStep::Choice => {
                self.step = SosStep::Done(choice);
                Ok(())
            }
            _ => Err(self.blocked("not at the choice step".to_string())),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.step, SosStep::Done(_))
    }

    fn blocked(&self, reason: String) -> ValidationError {
        ValidationError::StepBlocked {
            step: self.step.name().to_string(),
            reason,
        }
    }
}

impl Default for SosFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_items() -> GroundingItems {
        GroundingItems {
            seeing: ["lamp".into(), "desk".into(), "window".into()],
            hearing: ["fan".into(), "traffic".into(), "birds".into()],
            touching: ["chair".into(), "shirt".into(), "floor".into()],
        }
    }

    #[test]
    fn welcome_advances_into_an_active_breathing_session() {
        let mut flow = SosFlow::new();
        flow.advance().unwrap();
        let session = flow.breathing_mut().unwrap();
        assert!(session.is_active());
        assert_eq!(session.cycles_completed(), 0);
    }

    #[test]
    fn breathing_gates_on_required_cycles() {
        let mut flow = SosFlow::new();
        flow.advance().unwrap();
        assert!(flow.advance().is_err());

        let session = flow.breathing_mut().unwrap();
        for _ in 0..(14 * REQUIRED_CYCLES) {
            session.tick();
        }
        flow.advance().unwrap();
        assert!(matches!(flow.step(), SosStep::Grounding(_)));
    }

    #[test]
    fn grounding_gates_on_all_items() {
        let mut flow = SosFlow {
            step: SosStep::Grounding(GroundingItems::default()),
        };
        assert!(flow.advance().is_err());

        *flow.grounding_mut().unwrap() = filled_items();
        flow.advance().unwrap();
        assert!(matches!(flow.step(), SosStep::Choice));
    }

    #[test]
    fn blank_grounding_item_does_not_count() {
        let mut items = filled_items();
        items.hearing[1] = "   ".into();
        assert!(!items.is_complete());
    }

    #[test]
    fn choice_finishes_the_flow() {
        let mut flow = SosFlow {
            step: SosStep::Choice,
        };
        assert!(flow.advance().is_err());
        flow.choose(SosChoice::Movement).unwrap();
        assert!(flow.is_done());
        assert!(flow.choose(SosChoice::Audio).is_err());
    }
}

//! Onboarding wizard for new users.
//!
//! Four questions in a fixed order: name, main concern, anxiety frequency,
//! physical activity. Each answer moves the wizard forward one step; `back`
//! returns to the previous question keeping earlier answers. Completion
//! derives the goal string and yields the [`Profile`].

use serde::{Deserialize, Serialize};

use crate::record::{AnxietyFrequency, MainConcern, PhysicalActivity, Profile};
use crate::validation;

/// Which question the wizard is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingStep {
    Name,
    Concern,
    Frequency,
    Activity,
    Complete,
}

/// The onboarding wizard state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    name: Option<String>,
    main_concern: Option<MainConcern>,
    anxiety_frequency: Option<AnxietyFrequency>,
    physical_activity: Option<PhysicalActivity>,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Name,
            name: None,
            main_concern: None,
            anxiety_frequency: None,
            physical_activity: None,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Answer the name question.
    ///
    /// # Errors
    /// Returns the user-facing validation message when the name is invalid
    /// or the wizard is not on the name step.
    pub fn submit_name(&mut self, name: &str) -> Result<(), String> {
        if self.step != OnboardingStep::Name {
            return Err("Not on the name step".to_string());
        }
        if let Some(message) = validation::validate_name(name) {
            return Err(message);
        }
        self.name = Some(name.trim().to_string());
        self.step = OnboardingStep::Concern;
        Ok(())
    }

    /// Answer the main-concern question.
    pub fn submit_concern(&mut self, concern: MainConcern) -> Result<(), String> {
        if self.step != OnboardingStep::Concern {
            return Err("Not on the concern step".to_string());
        }
        self.main_concern = Some(concern);
        self.step = OnboardingStep::Frequency;
        Ok(())
    }

    /// Answer the anxiety-frequency question.
    pub fn submit_frequency(&mut self, frequency: AnxietyFrequency) -> Result<(), String> {
        if self.step != OnboardingStep::Frequency {
            return Err("Not on the frequency step".to_string());
        }
        self.anxiety_frequency = Some(frequency);
        self.step = OnboardingStep::Activity;
        Ok(())
    }

    /// Answer the physical-activity question. Completes the wizard.
    pub fn submit_activity(&mut self, activity: PhysicalActivity) -> Result<(), String> {
        if self.step != OnboardingStep::Activity {
            return Err("Not on the activity step".to_string());
        }
        self.physical_activity = Some(activity);
        self.step = OnboardingStep::Complete;
        Ok(())
    }

    /// Step back to the previous question. Answers already given are kept
    /// so the user can revise them. No-op on the first step and after
    /// completion.
    pub fn back(&mut self) {
        self.step = match self.step {
            OnboardingStep::Name | OnboardingStep::Complete => return,
            OnboardingStep::Concern => OnboardingStep::Name,
            OnboardingStep::Frequency => OnboardingStep::Concern,
            OnboardingStep::Activity => OnboardingStep::Frequency,
        };
    }

    /// The finished profile, once all questions are answered.
    pub fn profile(&self) -> Option<Profile> {
        if self.step != OnboardingStep::Complete {
            return None;
        }
        Some(Profile::new(
            self.name.clone()?,
            self.main_concern?,
            self.anxiety_frequency?,
            self.physical_activity?,
        ))
    }
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_run_produces_profile_with_derived_goal() {
        let mut flow = OnboardingFlow::new();
        flow.submit_name("Ana").unwrap();
        flow.submit_concern(MainConcern::Stress).unwrap();
        flow.submit_frequency(AnxietyFrequency::Sometimes).unwrap();
        flow.submit_activity(PhysicalActivity::Regular).unwrap();

        let profile = flow.profile().unwrap();
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.goal, "reduce stress");
    }

    #[test]
    fn invalid_name_blocks_the_first_step() {
        let mut flow = OnboardingFlow::new();
        assert!(flow.submit_name(" ").is_err());
        assert!(flow.submit_name("A").is_err());
        assert_eq!(flow.step(), OnboardingStep::Name);
    }

    #[test]
    fn answers_only_accepted_on_their_step() {
        let mut flow = OnboardingFlow::new();
        assert!(flow.submit_concern(MainConcern::Sleep).is_err());
        flow.submit_name("Ana").unwrap();
        assert!(flow.submit_activity(PhysicalActivity::None).is_err());
    }

    #[test]
    fn back_keeps_earlier_answers() {
        let mut flow = OnboardingFlow::new();
        flow.submit_name("Ana").unwrap();
        flow.submit_concern(MainConcern::Sleep).unwrap();
        flow.back();
        assert_eq!(flow.step(), OnboardingStep::Concern);

        // Revising the answer still completes normally.
        flow.submit_concern(MainConcern::Focus).unwrap();
        flow.submit_frequency(AnxietyFrequency::Rarely).unwrap();
        flow.submit_activity(PhysicalActivity::Sometimes).unwrap();
        assert_eq!(flow.profile().unwrap().goal, "improve focus");
    }

    #[test]
    fn no_profile_before_completion() {
        let mut flow = OnboardingFlow::new();
        flow.submit_name("Ana").unwrap();
        assert!(flow.profile().is_none());
    }
}

use calmafit_core::onboarding::{OnboardingFlow, OnboardingStep};
use calmafit_core::record::{AnxietyFrequency, MainConcern, PhysicalActivity};
use calmafit_core::storage::{ProfileStore, RecordPatch};

use super::prompt;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut flow = OnboardingFlow::new();

    while flow.step() != OnboardingStep::Complete {
        match flow.step() {
            OnboardingStep::Name => {
                let name = prompt("What's your name")?;
                if let Err(message) = flow.submit_name(&name) {
                    println!("{message}");
                }
            }
            OnboardingStep::Concern => {
                println!("What brings you here? [anxiety/sleep/focus/stress/other]");
                let concern = match prompt("Main concern")?.as_str() {
                    "anxiety" => MainConcern::Anxiety,
                    "sleep" => MainConcern::Sleep,
                    "focus" => MainConcern::Focus,
                    "stress" => MainConcern::Stress,
                    "other" => MainConcern::Other,
                    _ => {
                        println!("Pick one of the listed options.");
                        continue;
                    }
                };
                let _ = flow.submit_concern(concern);
            }
            OnboardingStep::Frequency => {
                println!("How often do you feel anxious? [daily/several-weekly/sometimes/rarely]");
                let frequency = match prompt("Frequency")?.as_str() {
                    "daily" => AnxietyFrequency::Daily,
                    "several-weekly" => AnxietyFrequency::SeveralWeekly,
                    "sometimes" => AnxietyFrequency::Sometimes,
                    "rarely" => AnxietyFrequency::Rarely,
                    _ => {
                        println!("Pick one of the listed options.");
                        continue;
                    }
                };
                let _ = flow.submit_frequency(frequency);
            }
            OnboardingStep::Activity => {
                println!("Do you exercise? [regular/sometimes/none]");
                let activity = match prompt("Physical activity")?.as_str() {
                    "regular" => PhysicalActivity::Regular,
                    "sometimes" => PhysicalActivity::Sometimes,
                    "none" => PhysicalActivity::None,
                    _ => {
                        println!("Pick one of the listed options.");
                        continue;
                    }
                };
                let _ = flow.submit_activity(activity);
            }
            OnboardingStep::Complete => {}
        }
    }

    let profile = flow
        .profile()
        .ok_or("onboarding finished without a profile")?;
    println!("Welcome, {}! Your goal: {}.", profile.name, profile.goal);

    // A fresh account starts its streak at day one.
    let mut store = ProfileStore::open()?;
    store.save(RecordPatch::new().profile(profile).streak(1));
    Ok(())
}

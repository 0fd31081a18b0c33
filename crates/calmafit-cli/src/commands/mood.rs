use clap::Subcommand;

use calmafit_core::analytics::AnalyticsEvent;
use calmafit_core::record::Mood;
use calmafit_core::storage::ProfileStore;

use super::tracker;

#[derive(Subcommand)]
pub enum MoodAction {
    /// Log today's mood
    Log {
        /// One of: great, good, ok, bad, terrible
        mood: String,
    },
    /// Show the mood history
    History,
}

fn parse_mood(value: &str) -> Result<Mood, String> {
    match value {
        "great" => Ok(Mood::Great),
        "good" => Ok(Mood::Good),
        "ok" => Ok(Mood::Ok),
        "bad" => Ok(Mood::Bad),
        "terrible" => Ok(Mood::Terrible),
        other => Err(format!(
            "unknown mood '{other}' (expected great/good/ok/bad/terrible)"
        )),
    }
}

pub fn run(action: MoodAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ProfileStore::open()?;

    match action {
        MoodAction::Log { mood } => {
            let mood = parse_mood(&mood)?;
            if store.load().is_none() {
                println!("No data yet. Run `calmafit-cli onboard` first.");
                return Ok(());
            }
            store.add_mood_entry(mood);
            tracker().track(AnalyticsEvent::mood_logged(mood.label()));
            println!("Logged: {}", mood.label());
        }
        MoodAction::History => {
            let history = store.load().map(|r| r.mood_history).unwrap_or_default();
            if history.is_empty() {
                println!("No mood entries yet.");
            }
            for entry in history {
                println!("{}  {}", entry.date.format("%Y-%m-%d"), entry.mood.label());
            }
        }
    }
    Ok(())
}

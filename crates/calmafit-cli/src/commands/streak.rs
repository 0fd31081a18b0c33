use clap::Subcommand;

use calmafit_core::storage::ProfileStore;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Evaluate today's streak (run once per launch)
    Update,
    /// Show the current streak
    Show,
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ProfileStore::open()?;

    match action {
        StreakAction::Update => {
            store.update_streak();
            match store.load() {
                Some(record) => println!("Streak: {} day(s)", record.streak),
                None => println!("No data yet. Run `calmafit-cli onboard` first."),
            }
        }
        StreakAction::Show => match store.load() {
            Some(record) => println!(
                "Streak: {} day(s), practices completed: {}",
                record.streak, record.practices_completed
            ),
            None => println!("No data yet. Run `calmafit-cli onboard` first."),
        },
    }
    Ok(())
}

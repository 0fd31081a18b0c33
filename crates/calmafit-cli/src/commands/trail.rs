use clap::Subcommand;

use calmafit_core::storage::ProfileStore;
use calmafit_core::trails;

#[derive(Subcommand)]
pub enum TrailAction {
    /// List all trails
    List,
    /// Show one trail's daily practices
    Show { id: String },
    /// Mark a trail as completed
    Complete { id: String },
}

pub fn run(action: TrailAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ProfileStore::open()?;

    match action {
        TrailAction::List => {
            let completed = store.load().map(|r| r.completed_trails).unwrap_or_default();
            for trail in trails::catalog() {
                let mark = if completed.contains(trail.id) { "x" } else { " " };
                let gate = if trail.premium { " [premium]" } else { "" };
                println!(
                    "[{mark}] {} -- {} ({} days){gate}",
                    trail.id, trail.title, trail.days
                );
            }
        }
        TrailAction::Show { id } => {
            let trail = trails::find(&id).ok_or(format!("unknown trail '{id}'"))?;
            println!("{} -- {}", trail.title, trail.description);
            for practice in trail.practices {
                println!("  {practice}");
            }
        }
        TrailAction::Complete { id } => {
            let trail = trails::find(&id).ok_or(format!("unknown trail '{id}'"))?;
            store.complete_trail(trail.id);
            store.complete_practice();
            println!("Completed: {}", trail.title);
        }
    }
    Ok(())
}

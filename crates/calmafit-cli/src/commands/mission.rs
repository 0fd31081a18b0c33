use clap::Subcommand;

use calmafit_core::missions;
use calmafit_core::storage::ProfileStore;

#[derive(Subcommand)]
pub enum MissionAction {
    /// List all missions with earned points
    List,
    /// Mark a mission as completed
    Complete { id: String },
}

pub fn run(action: MissionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ProfileStore::open()?;

    match action {
        MissionAction::List => {
            let completed = store
                .load()
                .map(|r| r.completed_missions)
                .unwrap_or_default();
            for mission in missions::catalog() {
                let mark = if completed.contains(mission.id) { "x" } else { " " };
                println!(
                    "[{mark}] {} -- {} ({}, {} pts)",
                    mission.id, mission.title, mission.duration, mission.points
                );
            }
            println!("Total points: {}", missions::total_points(&completed));
        }
        MissionAction::Complete { id } => {
            let mission = missions::find(&id).ok_or(format!("unknown mission '{id}'"))?;
            store.complete_mission(mission.id);
            store.complete_practice();
            println!("Completed: {} (+{} pts)", mission.title, mission.points);
        }
    }
    Ok(())
}

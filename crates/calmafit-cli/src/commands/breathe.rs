use std::io::Write;
use std::time::Duration;

use calmafit_core::analytics::AnalyticsEvent;
use calmafit_core::breathing::{BreathingSession, REQUIRED_CYCLES};
use calmafit_core::storage::ProfileStore;

use super::tracker;

/// Drive a breathing session at 1 Hz until four cycles are complete.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = BreathingSession::new();
    session.start();
    println!("Guided breathing: 4s in, 4s hold, 6s out. {REQUIRED_CYCLES} cycles.\n");

    let mut last_phase = session.phase();
    println!("{}", last_phase.instruction());
    while session.cycles_completed() < REQUIRED_CYCLES {
        print!("\r  {} ", session.countdown());
        std::io::stdout().flush()?;
        std::thread::sleep(Duration::from_secs(1));
        session.tick();

        if session.phase() != last_phase {
            last_phase = session.phase();
            println!("\r{}", last_phase.instruction());
        }
    }
    session.stop();
    println!("\rDone. {} cycles complete.", session.cycles_completed());

    let mut store = ProfileStore::open()?;
    store.complete_practice();
    tracker().track(AnalyticsEvent::practice_completed("breathing"));
    Ok(())
}

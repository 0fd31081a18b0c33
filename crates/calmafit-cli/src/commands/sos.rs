use std::io::Write;
use std::time::Duration;

use calmafit_core::analytics::AnalyticsEvent;
use calmafit_core::breathing::REQUIRED_CYCLES;
use calmafit_core::emergency;
use calmafit_core::sos::{SosChoice, SosFlow};
use calmafit_core::storage::ProfileStore;

use super::{prompt, tracker};

/// Run the crisis-support flow: breathing, grounding, then a choice.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracker().track(AnalyticsEvent::sos_activated());

    println!("Breathe with me, this will pass.");
    println!("{}\n", emergency::CRISIS_DISCLAIMER);

    let mut flow = SosFlow::new();
    flow.advance()?; // welcome -> breathing

    // Step 1: breathing, driven here at 1 Hz.
    if let Some(session) = flow.breathing_mut() {
        println!("Step 1: guided breathing ({REQUIRED_CYCLES} cycles)\n");
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
    }
    flow.advance()?; // breathing -> grounding

    // Step 2: grounding.
    println!("\nStep 2: connect with the present.");
    loop {
        if let Some(items) = flow.grounding_mut() {
            for (slots, what) in [
                (&mut items.seeing, "you can see"),
                (&mut items.hearing, "you can hear"),
                (&mut items.touching, "you can touch"),
            ] {
                println!("Name 3 things {what}:");
                for slot in slots.iter_mut() {
                    *slot = prompt("  -")?;
                }
            }
        }
        match flow.advance() {
            Ok(()) => break,
            Err(e) => println!("{e}"),
        }
    }

    // Step 3: choice.
    println!("\nStep 3: what would help most right now?");
    let choice = loop {
        match prompt("Calming audio or movement? [audio/movement]")?.as_str() {
            "audio" => break SosChoice::Audio,
            "movement" => break SosChoice::Movement,
            _ => println!("Pick audio or movement."),
        }
    };
    flow.choose(choice)?;

    match choice {
        SosChoice::Audio => println!("Put on something calm and keep breathing slowly."),
        SosChoice::Movement => {
            println!("Try a short walk or gentle stretching. Movement helps discharge tension.")
        }
    }

    let mut store = ProfileStore::open()?;
    store.complete_practice();
    println!("\nYou did it. This practice was added to your progress.");
    Ok(())
}

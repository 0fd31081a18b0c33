pub mod breathe;
pub mod chat;
pub mod config;
pub mod mission;
pub mod mood;
pub mod onboard;
pub mod profile;
pub mod remind;
pub mod sos;
pub mod streak;
pub mod trail;

use calmafit_core::analytics::{NullTracker, StderrTracker, Tracker};

use std::io::Write;

/// Analytics sink for CLI runs. Events go to stderr when
/// `CALMAFIT_ANALYTICS=1`, otherwise they are discarded.
pub fn tracker() -> Box<dyn Tracker> {
    if std::env::var("CALMAFIT_ANALYTICS").as_deref() == Ok("1") {
        Box::new(StderrTracker)
    } else {
        Box::new(NullTracker)
    }
}

/// Prompt on stdout and read one trimmed line from stdin.
pub fn prompt(label: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{label}: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

use calmafit_core::reminder::{PermissionState, Reminder};
use calmafit_core::storage::Config;

/// Run the daily reminder loop in the foreground. The terminal stands in
/// for the platform notification channel, so permission is granted.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut reminder = Reminder::new(config.reminder.clone(), PermissionState::Granted);

    if !reminder.is_active() {
        println!("Reminders are disabled in the config.");
        return Ok(());
    }

    println!(
        "Daily reminder at {:02}:{:02}. Press Ctrl-C to stop.",
        config.reminder.hour, config.reminder.minute
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(reminder.run(|message| {
        println!("CalmaFit: {message}");
    }));
    Ok(())
}

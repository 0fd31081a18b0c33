use clap::Subcommand;

use calmafit_core::storage::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set the daily reminder time
    ReminderTime {
        /// Hour (0-23)
        hour: u32,
        /// Minute (0-59)
        #[arg(default_value_t = 0)]
        minute: u32,
    },
    /// Enable or disable the daily reminder
    ReminderEnabled { enabled: bool },
    /// Set the chat endpoint URL
    ChatEndpoint { endpoint: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::ReminderTime { hour, minute } => {
            if hour > 23 || minute > 59 {
                return Err("reminder time must be a valid HH:MM".into());
            }
            let mut config = Config::load_or_default();
            config.reminder.hour = hour;
            config.reminder.minute = minute;
            config.save()?;
            println!("Reminder time set to {hour:02}:{minute:02}");
        }
        ConfigAction::ReminderEnabled { enabled } => {
            let mut config = Config::load_or_default();
            config.reminder.enabled = enabled;
            config.save()?;
            println!(
                "Reminders {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        ConfigAction::ChatEndpoint { endpoint } => {
            let mut config = Config::load_or_default();
            config.chat.endpoint = endpoint;
            config.save()?;
            println!("Chat endpoint updated");
        }
    }
    Ok(())
}

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "calmafit-cli", version, about = "CalmaFit CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the onboarding wizard
    Onboard,
    /// Profile and stored data
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Daily mood check-ins
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Engagement streak
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Guided breathing session
    Breathe,
    /// Crisis-support flow: breathing, grounding, choice
    Sos,
    /// Multi-day practice trails
    Trail {
        #[command(subcommand)]
        action: commands::trail::TrailAction,
    },
    /// Standalone missions
    Mission {
        #[command(subcommand)]
        action: commands::mission::MissionAction,
    },
    /// Talk to the support AI
    Chat {
        /// Message to send
        message: String,
    },
    /// Run the daily reminder loop
    Remind,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Onboard => commands::onboard::run(),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Mood { action } => commands::mood::run(action),
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Breathe => commands::breathe::run(),
        Commands::Sos => commands::sos::run(),
        Commands::Trail { action } => commands::trail::run(action),
        Commands::Mission { action } => commands::mission::run(action),
        Commands::Chat { message } => commands::chat::run(message),
        Commands::Remind => commands::remind::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

use clap::Subcommand;

use calmafit_core::emergency;
use calmafit_core::storage::ProfileStore;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the stored record
    Show,
    /// Emergency contacts and resources
    Emergency,
    /// Wipe all stored data
    Wipe,
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ProfileStore::open()?;

    match action {
        ProfileAction::Show => match store.load() {
            Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
            None => println!("No data yet. Run `calmafit-cli onboard` first."),
        },
        ProfileAction::Emergency => {
            for contact in emergency::contacts() {
                match contact.phone {
                    Some(phone) => println!("{} ({phone})", contact.name),
                    None => println!("{}", contact.name),
                }
                println!("  {}", contact.description);
                if let Some(site) = contact.website {
                    println!("  {site}");
                }
            }
            println!("\n{}", emergency::APP_DISCLAIMER);
        }
        ProfileAction::Wipe => {
            store.clear();
            println!("All local data removed.");
        }
    }
    Ok(())
}

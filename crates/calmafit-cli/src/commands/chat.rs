use calmafit_core::analytics::AnalyticsEvent;
use calmafit_core::chat::{ChatClient, ChatMessage};
use calmafit_core::emergency;
use calmafit_core::storage::{Config, ProfileStore};

use super::tracker;

pub fn run(message: String) -> Result<(), Box<dyn std::error::Error>> {
    tracker().track(AnalyticsEvent::chat_message_sent());
    let config = Config::load_or_default();
    let store = ProfileStore::open()?;
    let profile = store.load().and_then(|r| r.profile);

    let client = ChatClient::new(config.chat);
    let runtime = tokio::runtime::Runtime::new()?;
    let reply = runtime.block_on(
        client.reply_or_fallback(&[ChatMessage::user(message)], profile.as_ref()),
    );

    println!("{reply}");
    println!("\n{}", emergency::AI_DISCLAIMER);
    Ok(())
}

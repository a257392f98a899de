//! Generate a flashcard set.
//!
//! Run with:
//!   OPENNOTE_API_KEY=... cargo run --example flashcards

use opennote::{Client, FlashcardCreateRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> opennote::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = Client::from_env()?;

    let request = FlashcardCreateRequest {
        count: Some(5),
        ..FlashcardCreateRequest::new("The most important things to know about the Silk Road")
    };
    let set = client.flashcards().create(request).await?;

    println!("Set: {}", set.set_name.as_deref().unwrap_or("(untitled)"));
    for (i, card) in set.flashcards.iter().enumerate() {
        println!("{:>2}. {}\n    -> {}", i + 1, card.front, card.back);
    }
    if let Some(usage) = set.usage {
        println!("Tokens used: {} (${:.4})", usage.total_tokens_used, usage.cost);
    }

    Ok(())
}

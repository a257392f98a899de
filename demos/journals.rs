//! Page through journals and print the first one's content.
//!
//! Run with:
//!   OPENNOTE_API_KEY=... cargo run --example journals

use opennote::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SEPARATOR: &str = "================================\n";

#[tokio::main]
async fn main() -> opennote::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = Client::from_env()?;

    let mut first_id: Option<String> = None;
    let mut token: Option<i64> = None;
    loop {
        let page = client.journals().list(token).await?;
        if !page.success {
            eprintln!("Listing journals failed: {:?}", page.message);
            break;
        }

        println!("{SEPARATOR}Journals:");
        for journal in &page.journals {
            println!("  {} | {}", journal.id, journal.title);
        }
        if first_id.is_none() {
            first_id = page.journals.first().map(|j| j.id.clone());
        }

        if !page.has_more() {
            break;
        }
        token = page.next_page_token;
    }

    match first_id {
        Some(id) => {
            let content = client.journals().content(&id).await?;
            println!("{SEPARATOR}First Journal Content:\n{content:#?}\n{SEPARATOR}");
        }
        None => println!("No journals found."),
    }

    Ok(())
}

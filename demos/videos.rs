//! Create a video and poll until it finishes.
//!
//! Run with:
//!   OPENNOTE_API_KEY=... cargo run --example videos
//!
//! Set `RUST_LOG=opennote=debug` to see each request.

use std::time::Duration;

use opennote::{Client, PollOptions, VideoCreateRequest, VideoMessage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SEPARATOR: &str = "================================\n";

#[tokio::main]
async fn main() -> opennote::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = Client::from_env()?;

    println!("{SEPARATOR}Creating Video...");
    let request = VideoCreateRequest {
        include_sources: Some(true),
        search_for: Some("Silk Road History".into()),
        source_count: Some(5),
        upload_to_s3: Some(true),
        title: Some("The Silk Road".into()),
        ..VideoCreateRequest::from_messages(vec![VideoMessage::user(
            "Make a video about the Silk Road",
        )])
    };
    let created = client.video().create(request).await?;
    println!("{created:#?}\n{SEPARATOR}");

    let Some(video_id) = created.video_id.filter(|_| created.success) else {
        eprintln!("Failed to create video job: {:?}", created.message);
        return Ok(());
    };

    let opts = PollOptions::default()
        .with_interval(Duration::from_secs(15))
        .on_progress(|n, status| println!("Checking Video Status (#{n}): {status:?}"));
    let done = client.video().wait(&video_id, &opts).await?;

    println!("{SEPARATOR}Video Final Status\n{done:#?}\n{SEPARATOR}");

    if done.status.is_success() {
        println!("Video generated successfully!");
        if let Some(url) = done.response.as_ref().and_then(|r| r.s3_url.as_deref()) {
            println!("Video URL: {url}");
        }
    } else {
        eprintln!("Video generation ended with {:?}: {:?}", done.status, done.error);
    }

    Ok(())
}

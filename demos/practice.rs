//! Create a practice set, wait for it, then grade an answer to the first problem.
//!
//! Run with:
//!   OPENNOTE_API_KEY=... cargo run --example practice

use std::time::Duration;

use opennote::{Client, PollOptions, PracticeProblemSetCreateRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SEPARATOR: &str = "================================\n";

#[tokio::main]
async fn main() -> opennote::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = Client::from_env()?;

    println!("{SEPARATOR}Creating Practice Problem Set...");
    let request = PracticeProblemSetCreateRequest {
        count: Some(3),
        set_name: Some("Linear Algebra Practice".into()),
        search_for_problems: Some(true),
        ..PracticeProblemSetCreateRequest::new(
            "Linear algebra concepts including matrices, eigenvalues, and vector spaces",
        )
    };
    let created = client.practice().create(request).await?;
    println!("{created:#?}\n{SEPARATOR}");

    let Some(set_id) = created.set_id.filter(|_| created.success) else {
        eprintln!("Failed to create practice set: {:?}", created.message);
        return Ok(());
    };

    let opts = PollOptions::default()
        .with_interval(Duration::from_secs(10))
        .on_progress(|n, status| println!("Checking Practice Set Status (#{n}): {status:?}"));
    let done = client.practice().wait(&set_id, &opts).await?;
    println!("{SEPARATOR}Practice Set Final Status\n{done:#?}\n{SEPARATOR}");

    let Some(problem) = done
        .response
        .and_then(|set| set.problems.into_iter().next())
    else {
        return Ok(());
    };

    println!("{SEPARATOR}Grading Example - First Problem...");
    let problem = problem.with_user_answer(
        "A matrix is a rectangular array of numbers. Eigenvalues are scalar values \
         that represent how a matrix transforms vectors.",
    );
    let graded = client.practice().grade(&problem).await?;
    println!(
        "Score: {}/{} ({:.0}%)\n{}",
        graded.score,
        graded.max_score,
        graded.percentage,
        graded.explanation.as_deref().unwrap_or("")
    );

    Ok(())
}

//! Analyze a sentence for sentiment, keywords and categories.
//!
//! Run with:
//! ```bash
//! export NLU_USERNAME="your-username"
//! export NLU_PASSWORD="your-password"
//! RUST_LOG=nlu=debug cargo run --example analyze_text
//! ```

use nlu::features::{CategoriesOptions, Features, KeywordsOptions, SentimentOptions};
use nlu::options::{Credentials, HttpTransport, ServiceOptions, TransportOptions};
use nlu::{AnalysisRequest, NaturalLanguageUnderstanding};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Get credentials from environment
    let username =
        std::env::var("NLU_USERNAME").expect("NLU_USERNAME environment variable must be set");
    let password =
        std::env::var("NLU_PASSWORD").expect("NLU_PASSWORD environment variable must be set");

    let transport_options = TransportOptions::new(HttpTransport::new(Credentials::basic(
        username, password,
    )))
    .with_timeout(Duration::from_secs(30));

    let service = NaturalLanguageUnderstanding::new(ServiceOptions::default(), transport_options)?;

    let text = "In 2009, Elliot Turner launched AlchemyAPI to process the written word, \
                with all of its quirks and nuances, and got immediate traction.";

    let request = AnalysisRequest::builder()
        .text(text)
        .features(
            Features::default()
                .with_sentiment(
                    SentimentOptions::default().with_targets(["Elliot Turner", "traction"]),
                )
                .with_keywords(KeywordsOptions::default().with_limit(5).with_sentiment(true))
                .with_categories(CategoriesOptions::default()),
        )
        .return_analyzed_text(true)
        .build()?;

    println!("Sending request...");

    match service.analyze(&request).await {
        Ok(result) => {
            println!("\n=== Result ===");

            if let Some(language) = &result.language {
                println!("Language: {}", language);
            }

            if let Some(sentiment) = &result.sentiment {
                if let Some(score) = sentiment.document.as_ref().and_then(|d| d.score) {
                    println!("Document sentiment: {:.3}", score);
                }
                for target in sentiment.targets.iter().flatten() {
                    println!(
                        "  {}: {:?}",
                        target.text.as_deref().unwrap_or("?"),
                        target.score
                    );
                }
            }

            for keyword in result.keywords.iter().flatten() {
                println!(
                    "Keyword: {} (relevance {:?})",
                    keyword.text.as_deref().unwrap_or("?"),
                    keyword.relevance
                );
            }

            for category in result.categories.iter().flatten() {
                println!(
                    "Category: {} ({:?})",
                    category.label.as_deref().unwrap_or("?"),
                    category.score
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}

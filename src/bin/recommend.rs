// Recommend Binary Entry Point
//
// Purpose: Rank a catalog file against a conditions file and print the result
// Usage: cargo run --features cli --bin recommend

use anyhow::Context;
use fly_scorer_rust::data::{load_catalog, load_conditions};
use fly_scorer_rust::explanation::{JsonFormatter, MarkdownFormatter};
use fly_scorer_rust::{EngineConfig, RecommendationEngine};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging); stdout is reserved for results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "fly_scorer_rust=info,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Configuration from environment variables
    let catalog_path = PathBuf::from(
        std::env::var("CATALOG_PATH").unwrap_or_else(|_| "data/catalog.json".to_string()),
    );
    let conditions_path = PathBuf::from(
        std::env::var("CONDITIONS_PATH").unwrap_or_else(|_| "data/conditions.json".to_string()),
    );
    let output_format = std::env::var("OUTPUT_FORMAT").unwrap_or_else(|_| "json".to_string());

    let mut config = match std::env::var("ENGINE_CONFIG") {
        Ok(path) => EngineConfig::load(&PathBuf::from(path))?,
        Err(_) => EngineConfig::default(),
    };
    if let Ok(top_n) = std::env::var("TOP_N") {
        config.top_n = top_n
            .parse()
            .with_context(|| format!("TOP_N must be a non-negative integer, got '{}'", top_n))?;
    }

    tracing::info!("Configuration:");
    tracing::info!("  CATALOG_PATH: {}", catalog_path.display());
    tracing::info!("  CONDITIONS_PATH: {}", conditions_path.display());
    tracing::info!("  TOP_N: {}", config.top_n);
    tracing::info!("  OUTPUT_FORMAT: {}", output_format);

    let catalog = load_catalog(&catalog_path)?;
    let conditions =
        load_conditions(&conditions_path)?.with_clock_defaults(chrono::Local::now().naive_local());

    let engine = RecommendationEngine::new(config);
    let response = engine.recommend(&conditions, &catalog);

    let rendered = match output_format.to_lowercase().as_str() {
        "json" => JsonFormatter::format(&response)?,
        "markdown" | "md" => MarkdownFormatter::format(&response),
        other => anyhow::bail!("Unsupported OUTPUT_FORMAT '{}' (expected json or markdown)", other),
    };
    println!("{}", rendered);

    Ok(())
}

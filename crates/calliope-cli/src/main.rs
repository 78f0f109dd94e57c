//! Calliope developer CLI — run one matching call against a catalog file.
//!
//! Usage: `calliope "<description>"`. Loads TOML configuration (path from
//! `CALLIOPE_CONFIG_PATH`, default `config.toml`), initializes structured
//! logging, reads the catalog through the JSON provider, runs the matcher
//! once, and prints the ranked results as pretty JSON. An empty array is a
//! valid outcome, not an error.

mod config;

use calliope_catalog::{JsonFileProvider, VoiceProvider};
use calliope_match::{match_voices_with, MatchOptions};
use tracing_subscriber::EnvFilter;

fn resolve_config_path() -> (Option<String>, &'static str) {
    if let Ok(path) = std::env::var("CALLIOPE_CONFIG_PATH") {
        if !path.trim().is_empty() {
            return (Some(path), "env-var");
        }
    }
    (None, "default")
}

#[tokio::main]
async fn main() {
    let description = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if description.trim().is_empty() {
        eprintln!("usage: calliope \"<voice description>\"");
        std::process::exit(2);
    }

    let (resolved_config_path, config_source) = resolve_config_path();
    let selected_config_path = resolved_config_path.as_deref().or(Some("config.toml"));

    // Load configuration
    let config = config::load_config(selected_config_path)
        .expect("failed to load configuration — check the config file syntax");

    // Initialize tracing
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        source = config_source,
        path = selected_config_path.unwrap_or("<none>"),
        "resolved startup configuration path"
    );

    // Load the catalog
    let provider = JsonFileProvider::new(&config.catalog.path);
    let voices = provider
        .fetch()
        .await
        .expect("failed to load catalog — check catalog.path in config");

    tracing::info!(count = voices.len(), "catalog loaded");

    // Run one matching call
    let options = MatchOptions {
        max_results: config.matching.max_results,
        strict_gender: config.matching.strict_gender,
        ..Default::default()
    };
    let results = match_voices_with(&description, &voices, &options);

    if results.is_empty() {
        tracing::info!("no voices matched the description");
    }

    let rendered =
        serde_json::to_string_pretty(&results).expect("match results serialize to JSON");
    println!("{}", rendered);
}

use calliope_catalog::{validate_records, CatalogStore, JsonFileProvider, VoiceProvider};
use calliope_types::{Gender, QualityTier, SourceProvider, Voice};
use std::io::Write;

fn voice(id: &str) -> Voice {
    Voice {
        id: id.to_string(),
        display_name: id.to_string(),
        source_provider: SourceProvider::ElevenLabs,
        accent: None,
        gender: None,
        age_bracket: None,
        timbre_tags: Vec::new(),
        tone_words: Vec::new(),
        description: None,
        use_cases: Vec::new(),
        quality_tier: QualityTier::Standard,
    }
}

#[tokio::test]
async fn json_provider_round_trips_a_catalog_file() {
    let mut records = vec![voice("v1"), voice("v2")];
    records[0].accent = Some("British".to_string());
    records[0].gender = Some(Gender::Female);
    records[0].timbre_tags = vec!["deep".to_string()];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(serde_json::to_vec(&records).unwrap().as_slice())
        .unwrap();

    let provider = JsonFileProvider::new(&path);
    let fetched = provider.fetch().await.unwrap();

    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[0].accent.as_deref(), Some("British"));
    assert_eq!(fetched[0].gender, Some(Gender::Female));
}

#[tokio::test]
async fn json_provider_missing_file_is_an_error() {
    let provider = JsonFileProvider::new("/nonexistent/catalog.json");
    assert!(provider.fetch().await.is_err());
}

#[tokio::test]
async fn json_provider_rejects_malformed_payload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, b"{not json").unwrap();

    let provider = JsonFileProvider::new(&path);
    assert!(provider.fetch().await.is_err());
}

#[test]
fn validation_skips_records_with_empty_ids() {
    let records = vec![voice(""), voice("kept"), voice("   ")];
    let valid = validate_records(records);
    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].id, "kept");
}

#[tokio::test]
async fn store_refresh_swaps_in_the_fetched_catalog() {
    let records = vec![voice("a"), voice(""), voice("b")];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, serde_json::to_vec(&records).unwrap()).unwrap();

    let store = CatalogStore::new();
    let provider = JsonFileProvider::new(&path);

    let count = store.refresh(&provider).await.unwrap();
    // The invalid record is dropped by provider-side validation.
    assert_eq!(count, 2);
    assert_eq!(store.current().voices.len(), 2);
}

#[tokio::test]
async fn store_keeps_previous_snapshot_on_failed_refresh() {
    let store = CatalogStore::new();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    std::fs::write(&path, serde_json::to_vec(&vec![voice("a")]).unwrap()).unwrap();
    let provider = JsonFileProvider::new(&path);
    store.refresh(&provider).await.unwrap();
    assert_eq!(store.current().voices.len(), 1);

    std::fs::remove_file(&path).unwrap();
    assert!(store.refresh(&provider).await.is_err());
    assert_eq!(store.current().voices.len(), 1);
}

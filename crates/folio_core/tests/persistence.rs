use folio_core::model::seed::{
    seed_document, CANONICAL_EMAIL, CANONICAL_HERO_HEADLINE, CANONICAL_PHONE,
};
use folio_core::repo::portfolio_repo::{decode_document, encode_document};
use folio_core::{
    ContactForm, JsonPortfolioRepository, KeyValueStore, LoadSource, MemoryKeyValueStore,
    PortfolioRepository, SqliteKeyValueStore, StorageError, StorageResult, DEFAULT_STORAGE_KEY,
};
use serde_json::json;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

fn persisted_blob(headline: &str, email: &str) -> String {
    json!({
        "projects": [],
        "testimonials": [],
        "leads": [],
        "settings": {
            "name": "Old Name",
            "brandName": "Old Brand",
            "bio": "old bio",
            "heroHeadline": headline,
            "heroSubline": "old subline",
            "email": email,
            "socials": {}
        }
    })
    .to_string()
}

#[test]
fn absent_key_loads_seed_document() {
    let repo = JsonPortfolioRepository::new(MemoryKeyValueStore::new());
    let (document, source) = repo.load_with_source();
    assert_eq!(source, LoadSource::SeedAbsent);
    assert_eq!(document, seed_document());
}

#[test]
fn corrupt_blob_falls_back_to_seed() {
    let backend = MemoryKeyValueStore::with_entry(DEFAULT_STORAGE_KEY, "{not json");
    let repo = JsonPortfolioRepository::new(backend);
    let (document, source) = repo.load_with_source();
    assert_eq!(source, LoadSource::SeedCorrupt);
    assert_eq!(document, seed_document());
}

#[test]
fn blob_without_settings_is_treated_as_corrupt() {
    let backend = MemoryKeyValueStore::with_entry(DEFAULT_STORAGE_KEY, r#"{"projects":[]}"#);
    let repo = JsonPortfolioRepository::new(backend);
    assert_eq!(repo.load_with_source().1, LoadSource::SeedCorrupt);
}

#[test]
fn backend_read_failure_falls_back_to_seed() {
    let repo = JsonPortfolioRepository::new(BrokenStore);
    let (document, source) = repo.load_with_source();
    assert_eq!(source, LoadSource::SeedUnavailable);
    assert_eq!(document, seed_document());
}

#[test]
fn backend_write_failure_is_swallowed() {
    let mut repo = JsonPortfolioRepository::new(BrokenStore);
    repo.save(&seed_document());
}

#[test]
fn load_forces_canonical_settings_fields() {
    let backend = MemoryKeyValueStore::with_entry(
        DEFAULT_STORAGE_KEY,
        persisted_blob("old", "old@x.com"),
    );
    let repo = JsonPortfolioRepository::new(backend);

    let (document, source) = repo.load_with_source();
    assert_eq!(source, LoadSource::Persisted);
    assert_eq!(document.settings.hero_headline, CANONICAL_HERO_HEADLINE);
    assert_eq!(document.settings.email, CANONICAL_EMAIL);
    assert_eq!(document.settings.phone.as_deref(), Some(CANONICAL_PHONE));
    assert_eq!(document.settings.name, "Old Name");
    assert_eq!(document.settings.bio, "old bio");
}

#[test]
fn missing_sequences_decode_as_empty() {
    let raw = json!({
        "settings": {
            "name": "N",
            "brandName": "B",
            "bio": "b",
            "heroHeadline": "h",
            "heroSubline": "s",
            "email": "e@x.com",
            "socials": {"github": "https://github.com/n"}
        }
    })
    .to_string();
    let document = decode_document(&raw).unwrap();
    assert!(document.projects.is_empty());
    assert!(document.leads.is_empty());
    assert_eq!(
        document.settings.socials.github.as_deref(),
        Some("https://github.com/n")
    );
}

#[test]
fn encode_then_decode_preserves_document() {
    let mut document = seed_document();
    document.prepend_lead(
        ContactForm::new("Ada", "ada@x.com", "Hi", "Test")
            .to_lead("1700000000000", 1_700_000_000_000)
            .unwrap(),
    );
    document.settings.phone = None;

    let decoded = decode_document(&encode_document(&document).unwrap()).unwrap();
    assert_eq!(decoded, document);
}

#[test]
fn persisted_json_uses_camel_case_field_names() {
    let value: serde_json::Value =
        serde_json::from_str(&encode_document(&seed_document()).unwrap()).unwrap();

    let project = &value["projects"][0];
    assert_eq!(project["imageUrl"], "https://picsum.photos/seed/ecommerce/800/600");
    assert_eq!(project["category"], "Web Development");
    assert!(project.get("link").is_none());
    assert_eq!(value["settings"]["brandName"], "Dagim.dev");
    assert_eq!(value["settings"]["heroHeadline"], CANONICAL_HERO_HEADLINE);
    assert_eq!(value["leads"], json!([]));
}

#[test]
fn save_replaces_whole_blob_under_configured_key() {
    let mut repo = JsonPortfolioRepository::with_key(MemoryKeyValueStore::new(), "custom_key");
    let mut document = seed_document();
    repo.save(&document);

    document.projects.clear();
    repo.save(&document);

    assert_eq!(repo.backend().len(), 1);
    let raw = repo.backend().get("custom_key").unwrap().unwrap();
    assert_eq!(decode_document(&raw).unwrap(), document);
}

#[test]
fn sqlite_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.sqlite3");

    let mut document = seed_document();
    document.projects.truncate(1);
    {
        let mut repo = JsonPortfolioRepository::new(SqliteKeyValueStore::open(&path).unwrap());
        repo.save(&document);
    }

    let repo = JsonPortfolioRepository::new(SqliteKeyValueStore::open(&path).unwrap());
    let (loaded, source) = repo.load_with_source();
    assert_eq!(source, LoadSource::Persisted);
    assert_eq!(loaded, document);
}

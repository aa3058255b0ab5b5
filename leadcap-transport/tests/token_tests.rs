use leadcap_transport::{
    ClientConfig, FileTokenStore, MemoryTokenStore, TokenStore, TransportClient,
};
use std::sync::Arc;
use tempfile::TempDir;

// ── MemoryTokenStore ──────────────────────────────────────────────

#[tokio::test]
async fn memory_store_round_trip() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.load().await.unwrap(), None);

    store.save("tk-1").await.unwrap();
    assert_eq!(store.load().await.unwrap().as_deref(), Some("tk-1"));

    store.clear().await.unwrap();
    assert_eq!(store.load().await.unwrap(), None);
}

// ── FileTokenStore ────────────────────────────────────────────────

#[tokio::test]
async fn file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("auth").join("token"));

    assert_eq!(store.load().await.unwrap(), None);

    store.save("tk-file").await.unwrap();
    assert!(store.path().exists());
    assert_eq!(store.load().await.unwrap().as_deref(), Some("tk-file"));

    store.clear().await.unwrap();
    assert!(!store.path().exists());
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn file_store_clear_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));
    store.clear().await.unwrap();
    store.clear().await.unwrap();
}

#[tokio::test]
async fn file_store_survives_reload() {
    // A new client over the same slot hydrates the previous session's token,
    // mirroring a page reload picking up persistent storage.
    let dir = TempDir::new().unwrap();
    let slot = dir.path().join("token");

    let first = TransportClient::new(
        ClientConfig::new("http://localhost:1"),
        Arc::new(FileTokenStore::new(&slot)),
    )
    .unwrap();
    first.set_token(Some("tk-persisted".into())).await.unwrap();

    let second = TransportClient::new(
        ClientConfig::new("http://localhost:1"),
        Arc::new(FileTokenStore::new(&slot)),
    )
    .unwrap();
    assert_eq!(second.token().await.as_deref(), Some("tk-persisted"));
}

#[tokio::test]
async fn blank_slot_reads_as_logged_out() {
    let dir = TempDir::new().unwrap();
    let slot = dir.path().join("token");
    tokio::fs::write(&slot, "  \n").await.unwrap();

    let store = FileTokenStore::new(&slot);
    assert_eq!(store.load().await.unwrap(), None);
}

// ── Client-side credential cache ──────────────────────────────────

#[tokio::test]
async fn token_hydrates_lazily_and_caches() {
    let store = Arc::new(MemoryTokenStore::with_token("tk-seed"));
    let client =
        TransportClient::new(ClientConfig::new("http://localhost:1"), store.clone()).unwrap();

    assert_eq!(client.token().await.as_deref(), Some("tk-seed"));

    // The cache is authoritative after first access: a store mutation made
    // behind the client's back is not observed within this client lifetime.
    store.clear().await.unwrap();
    assert_eq!(client.token().await.as_deref(), Some("tk-seed"));
}

#[tokio::test]
async fn set_token_updates_cache_and_store_together() {
    let store = Arc::new(MemoryTokenStore::new());
    let client =
        TransportClient::new(ClientConfig::new("http://localhost:1"), store.clone()).unwrap();

    client.set_token(Some("tk-new".into())).await.unwrap();
    assert_eq!(client.token().await.as_deref(), Some("tk-new"));
    assert_eq!(store.load().await.unwrap().as_deref(), Some("tk-new"));

    client.set_token(None).await.unwrap();
    assert_eq!(client.token().await, None);
    assert_eq!(store.load().await.unwrap(), None);
}

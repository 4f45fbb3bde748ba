//! Local Storage Tests
//!
//! `BrowserStorage` against the real `window.localStorage`.

use stock_quote::services::profile_registry::ProfileRegistry;
use stock_quote::services::storage::{BrowserStorage, KeyValueStore};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_browser_storage_roundtrip() {
    let store = BrowserStorage;
    store.set_item("test-storage-roundtrip", "[\"A\"]").unwrap();

    assert_eq!(
        store.get_item("test-storage-roundtrip").unwrap().as_deref(),
        Some("[\"A\"]")
    );
}

#[wasm_bindgen_test]
fn test_browser_storage_missing_key() {
    assert_eq!(BrowserStorage.get_item("test-storage-never-written").unwrap(), None);
}

#[wasm_bindgen_test]
fn test_registry_persists_to_local_storage() {
    let key = "test-storage-registry";
    BrowserStorage.set_item(key, "[]").unwrap();

    let mut registry = ProfileRegistry::load(BrowserStorage, key);
    registry.save("Retail").unwrap();
    registry.save("Export").unwrap();

    let reloaded = ProfileRegistry::load(BrowserStorage, key);
    assert_eq!(reloaded.profiles(), ["Retail", "Export"]);
}

#[wasm_bindgen_test]
fn test_registry_ignores_malformed_local_storage() {
    let key = "test-storage-malformed";
    BrowserStorage.set_item(key, "{broken").unwrap();

    let registry = ProfileRegistry::load(BrowserStorage, key);
    assert!(registry.profiles().is_empty());
}

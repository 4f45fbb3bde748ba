//! Profile Service Tests
//!
//! Reactive profile state: input handling, selection reset and the
//! notifications produced for every outcome.

use stock_quote::services::dialogs::ScriptedDialogs;
use stock_quote::services::notification_service::{NotificationState, ToastType};
use stock_quote::services::profile_service::ProfileState;
use stock_quote::services::storage::{BrowserStorage, KeyValueStore};
use wasm_bindgen_test::*;

fn fresh_state(key: &str, stored: &str) -> (ProfileState, NotificationState) {
    BrowserStorage.set_item(key, stored).unwrap();
    let toasts = NotificationState::new(3000);
    (ProfileState::load(key, toasts), toasts)
}

fn stored(key: &str) -> Vec<String> {
    let raw = BrowserStorage.get_item(key).unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}

// ============================================================================
// save Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_save_new_profile() {
    let key = "test-profiles-save";
    let (state, toasts) = fresh_state(key, "[\"Retail\"]");

    state.name_input.set("  Wholesale ".to_string());
    state.save();

    assert_eq!(state.profiles(), vec!["Retail", "Wholesale"]);
    assert_eq!(stored(key), vec!["Retail", "Wholesale"]);
    assert_eq!(state.name_input.get_untracked(), "");
    assert_eq!(state.options().len(), 3);
    assert_eq!(toasts.message(), "Profile \"Wholesale\" saved successfully!");
    assert_eq!(toasts.notification.get_untracked().toast_type, ToastType::Success);
}

#[wasm_bindgen_test]
fn test_save_duplicate_profile() {
    let key = "test-profiles-duplicate";
    let (state, toasts) = fresh_state(key, "[\"Retail\"]");

    state.name_input.set("Retail".to_string());
    state.save();

    assert_eq!(state.profiles(), vec!["Retail"]);
    assert_eq!(stored(key), vec!["Retail"]);
    // Input is kept so the user can edit it
    assert_eq!(state.name_input.get_untracked(), "Retail");
    assert_eq!(toasts.message(), "Profile already exists!");
    assert_eq!(toasts.notification.get_untracked().toast_type, ToastType::Error);
}

#[wasm_bindgen_test]
fn test_save_blank_profile() {
    let key = "test-profiles-blank";
    let (state, toasts) = fresh_state(key, "[]");

    state.name_input.set("   ".to_string());
    state.save();

    assert!(state.profiles().is_empty());
    assert_eq!(toasts.message(), "Please enter a valid profile name.");
}

// ============================================================================
// delete Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_delete_without_selection() {
    let key = "test-profiles-no-selection";
    let (state, toasts) = fresh_state(key, "[\"Retail\"]");

    state.delete(&ScriptedDialogs::new().confirm_with(true));

    assert_eq!(state.profiles(), vec!["Retail"]);
    assert_eq!(toasts.message(), "Please select a profile to delete.");
}

#[wasm_bindgen_test]
fn test_delete_confirmed() {
    let key = "test-profiles-delete";
    let (state, toasts) = fresh_state(key, "[\"Retail\",\"Export\"]");

    state.selected.set("Retail".to_string());
    state.delete(&ScriptedDialogs::new().confirm_with(true));

    assert_eq!(state.profiles(), vec!["Export"]);
    assert_eq!(stored(key), vec!["Export"]);
    assert_eq!(state.selected.get_untracked(), "");
    assert_eq!(toasts.message(), "Profile \"Retail\" deleted successfully!");
}

#[wasm_bindgen_test]
fn test_delete_declined_is_silent() {
    let key = "test-profiles-declined";
    let (state, toasts) = fresh_state(key, "[\"Retail\"]");

    state.selected.set("Retail".to_string());
    state.delete(&ScriptedDialogs::new().confirm_with(false));

    assert_eq!(state.profiles(), vec!["Retail"]);
    assert_eq!(stored(key), vec!["Retail"]);
    assert_eq!(state.selected.get_untracked(), "Retail");
    assert!(!toasts.is_visible());
    assert_eq!(toasts.message(), "");
}

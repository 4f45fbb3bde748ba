//! Notification Service Tests
//!
//! Timing of the toast hide and the overlap behaviour between toasts.

use gloo_timers::future::TimeoutFuture;
use stock_quote::services::notification_service::{NotificationState, ToastType};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_notify_shows_immediately() {
    let state = NotificationState::new(3000);
    state.notify(ToastType::Success, "Saved");

    assert!(state.is_visible());
    assert_eq!(state.message(), "Saved");
}

#[wasm_bindgen_test]
async fn test_notify_hides_after_delay() {
    let state = NotificationState::new(100);
    state.notify(ToastType::Info, "hello");

    TimeoutFuture::new(50).await;
    assert!(state.is_visible());

    TimeoutFuture::new(100).await;
    assert!(!state.is_visible());
    // Text is left in place, only hidden
    assert_eq!(state.message(), "hello");
}

#[wasm_bindgen_test]
async fn test_first_timer_hides_second_toast() {
    let state = NotificationState::new(300);
    state.notify(ToastType::Info, "first");

    TimeoutFuture::new(200).await;
    state.notify(ToastType::Error, "second");
    assert!(state.is_visible());
    assert_eq!(state.message(), "second");

    // First timer fires at ~300ms, before the second one's at ~500ms
    TimeoutFuture::new(150).await;
    assert!(!state.is_visible());
    assert_eq!(state.message(), "second");
}

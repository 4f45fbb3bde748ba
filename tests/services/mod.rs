//! Service tests module
//!
//! Frontend service tests using wasm-bindgen-test for browser testing.

pub mod notification_tests;
pub mod profile_service_tests;
pub mod storage_tests;

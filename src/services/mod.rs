pub mod calculator;
pub mod dialogs;
pub mod ledger;
pub mod ledger_service;
pub mod notification_service;
pub mod profile_registry;
pub mod profile_service;
pub mod storage;

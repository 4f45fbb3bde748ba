//! Component tests module
//!
//! Mounts components into detached containers and inspects the DOM.

pub mod stock_table_tests;

pub mod design_system;
pub mod profile_panel;
pub mod stock_table;

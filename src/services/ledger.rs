//! Line items and the prompted item flow

use serde::{Deserialize, Serialize};

use crate::services::dialogs::Dialogs;
use crate::utils::formatting::{format_field_value, parse_float_prefix};

pub const NAME_PROMPT: &str = "Enter item name:";
pub const RATE_PROMPT: &str = "Enter item rate:";

/// Rejected item additions. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid item name or rate.")]
    InvalidItem,
}

/// One row of the quote table as first rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(default)]
    pub rate: f64,
}

fn default_quantity() -> f64 {
    1.0
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: f64, rate: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            rate,
        }
    }

    /// Quantity 1 at the given rate.
    pub fn single(name: impl Into<String>, rate: f64) -> Self {
        Self::new(name, default_quantity(), rate)
    }

    /// Initial text of the quantity field.
    pub fn quantity_text(&self) -> String {
        format_field_value(self.quantity)
    }

    /// Initial text of the rate field.
    pub fn rate_text(&self) -> String {
        format_field_value(self.rate)
    }
}

pub fn added_message(name: &str) -> String {
    format!("Item \"{name}\" added successfully!")
}

/// Ask for a name and a rate and build the item to append.
///
/// Both questions are always asked. A cancelled or empty rate means 0;
/// the rate is read like `parseFloat`, so `"12abc"` is 12. Only a missing or
/// empty name is rejected, whitespace counts as a name.
pub fn prompt_line_item(dialogs: &dyn Dialogs) -> Result<LineItem, LedgerError> {
    let name = dialogs.prompt_text(NAME_PROMPT);
    let rate_answer = dialogs
        .prompt_text(RATE_PROMPT)
        .filter(|answer| !answer.is_empty())
        .unwrap_or_else(|| "0".to_string());

    let rate = parse_float_prefix(&rate_answer).ok_or(LedgerError::InvalidItem)?;

    match name {
        Some(name) if !name.is_empty() => Ok(LineItem::single(name, rate)),
        _ => Err(LedgerError::InvalidItem),
    }
}

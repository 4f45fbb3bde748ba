//! Amount Calculator
//!
//! Pure computation over the current field text of every row. The reactive
//! layer copies the result into the table; nothing here touches the view.

use crate::utils::formatting::{format_amount, parse_field_or_zero};

/// Raw quantity and rate text of one row, as currently typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowFields<'a> {
    pub quantity: &'a str,
    pub rate: &'a str,
}

/// Formatted amounts in row order plus the running total.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub amounts: Vec<String>,
    pub total: f64,
}

impl Calculation {
    pub fn total_text(&self) -> String {
        format_amount(self.total)
    }

    /// Text of the total display, e.g. `Total: 290.00`.
    pub fn total_label(&self) -> String {
        format!("Total: {}", self.total_text())
    }
}

/// Compute every row's amount and the total.
pub fn calculate(rows: &[RowFields<'_>]) -> Calculation {
    let mut total = 0.0;
    let amounts = rows
        .iter()
        .map(|row| {
            let amount = parse_field_or_zero(row.quantity) * parse_field_or_zero(row.rate);
            total += amount;
            format_amount(amount)
        })
        .collect();

    Calculation { amounts, total }
}

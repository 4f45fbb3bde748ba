//! Reactive line-item table
//!
//! The field text held in each row's signals is the source of truth; amounts
//! are only written when a calculation is requested.

use leptos::prelude::*;

use crate::services::calculator::{calculate, Calculation, RowFields};
use crate::services::dialogs::Dialogs;
use crate::services::ledger::{added_message, prompt_line_item, LineItem};
use crate::services::notification_service::{NotificationState, ToastType};

/// One rendered table row.
#[derive(Clone, Debug)]
pub struct LedgerRow {
    pub id: usize,
    pub name: String,
    pub quantity: RwSignal<String>,
    pub rate: RwSignal<String>,
    /// Formatted amount, empty until the first calculation that sees the row.
    pub amount: RwSignal<Option<String>>,
}

impl LedgerRow {
    fn from_item(id: usize, item: &LineItem) -> Self {
        Self {
            id,
            name: item.name.clone(),
            quantity: RwSignal::new(item.quantity_text()),
            rate: RwSignal::new(item.rate_text()),
            amount: RwSignal::new(None),
        }
    }
}

#[derive(Clone, Copy)]
pub struct LedgerState {
    pub rows: RwSignal<Vec<LedgerRow>>,
    /// `Total: …` text; `None` keeps the total display hidden.
    pub total: RwSignal<Option<String>>,
    toasts: NotificationState,
}

impl LedgerState {
    pub fn new(toasts: NotificationState) -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            total: RwSignal::new(None),
            toasts,
        }
    }

    /// Append a row. No validation.
    pub fn add_item(&self, item: &LineItem) {
        self.rows.update(|rows| {
            let id = rows.len();
            rows.push(LedgerRow::from_item(id, item));
        });
    }

    pub fn seed_initial_rows(&self, items: &[LineItem]) {
        for item in items {
            self.add_item(item);
        }
        log::debug!("Seeded {} demonstration rows", items.len());
    }

    /// Ask the user for an item and append it with quantity 1.
    pub fn prompt_add_item(&self, dialogs: &dyn Dialogs) {
        match prompt_line_item(dialogs) {
            Ok(item) => {
                self.add_item(&item);
                self.toasts
                    .notify(ToastType::Success, added_message(&item.name));
            }
            Err(e) => self.toasts.notify(ToastType::Error, e.to_string()),
        }
    }

    /// Recompute every amount and the total from the current field text.
    pub fn calculate(&self) -> Calculation {
        let rows = self.rows.get_untracked();
        let fields: Vec<(String, String)> = rows
            .iter()
            .map(|row| (row.quantity.get_untracked(), row.rate.get_untracked()))
            .collect();
        let inputs: Vec<RowFields<'_>> = fields
            .iter()
            .map(|(quantity, rate)| RowFields {
                quantity: quantity.as_str(),
                rate: rate.as_str(),
            })
            .collect();

        let result = calculate(&inputs);
        for (row, amount) in rows.iter().zip(&result.amounts) {
            row.amount.set(Some(amount.clone()));
        }
        self.total.set(Some(result.total_label()));
        result
    }

    pub fn row_count(&self) -> usize {
        self.rows.with(|rows| rows.len())
    }
}

pub fn provide_ledger_state(seed: &[LineItem], toasts: NotificationState) {
    let state = LedgerState::new(toasts);
    state.seed_initial_rows(seed);
    provide_context(state);
}

pub fn use_ledger_state() -> LedgerState {
    expect_context::<LedgerState>()
}

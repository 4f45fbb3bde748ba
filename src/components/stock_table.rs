//! Quote table with add-item and calculate actions

use leptos::prelude::*;

use crate::components::design_system::{Button, ButtonVariant};
use crate::services::dialogs::BrowserDialogs;
use crate::services::ledger_service::{use_ledger_state, LedgerRow};

const CELL_CLASS: &str = "px-3 py-2 border-b border-gray-700";
const FIELD_CLASS: &str = "w-24 p-1 rounded bg-gray-900 text-white border border-gray-700 focus:border-blue-500 outline-none";

#[component]
fn StockRow(row: LedgerRow) -> impl IntoView {
    let quantity = row.quantity;
    let rate = row.rate;
    let amount = row.amount;

    view! {
        <tr>
            <td class=CELL_CLASS>{row.name}</td>
            <td class=CELL_CLASS>
                <input
                    type="number"
                    class=format!("quantity {FIELD_CLASS}")
                    prop:value=move || quantity.get()
                    on:input=move |evt| quantity.set(event_target_value(&evt))
                />
            </td>
            <td class=CELL_CLASS>
                <input
                    type="number"
                    class=format!("rate {FIELD_CLASS}")
                    prop:value=move || rate.get()
                    on:input=move |evt| rate.set(event_target_value(&evt))
                />
            </td>
            <td class=format!("amount text-right {CELL_CLASS}")>
                {move || amount.get().unwrap_or_default()}
            </td>
        </tr>
    }
}

#[component]
pub fn StockTable() -> impl IntoView {
    let state = use_ledger_state();

    let total_style = move || {
        if state.total.with(Option::is_some) {
            "display: block"
        } else {
            "display: none"
        }
    };

    view! {
        <section class="flex flex-col gap-3 p-4 bg-gray-800 border border-gray-700 rounded-lg">
            <h2 class="text-lg font-semibold text-gray-100">"Stock"</h2>
            <table id="stockTable" class="w-full text-left text-gray-200">
                <thead>
                    <tr>
                        <th class=CELL_CLASS>"Item"</th>
                        <th class=CELL_CLASS>"Quantity"</th>
                        <th class=CELL_CLASS>"Rate"</th>
                        <th class=CELL_CLASS>"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.rows.get()
                        key=|row| row.id
                        children=|row| view! { <StockRow row=row /> }
                    />
                </tbody>
            </table>
            <div class="flex gap-2">
                <Button
                    id="addItemButton"
                    variant=ButtonVariant::Secondary
                    on_click=move |_| state.prompt_add_item(&BrowserDialogs)
                >
                    "Add Item"
                </Button>
                <Button id="calculateButton" on_click=move |_| {
                    state.calculate();
                }>
                    "Calculate"
                </Button>
            </div>
            <div id="totalLabel" class="text-xl font-bold text-gray-100" style=total_style>
                {move || state.total.get().unwrap_or_default()}
            </div>
        </section>
    }
}

//! Stock Table Component Tests
//!
//! The total display stays hidden until the first calculation and amount
//! cells are filled from the calculation.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use stock_quote::components::stock_table::StockTable;
use stock_quote::config::LedgerConfig;
use stock_quote::services::ledger::LineItem;
use stock_quote::services::ledger_service::LedgerState;
use stock_quote::services::notification_service::NotificationState;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

fn mount_table(ledger: LedgerState, toasts: NotificationState) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: web_sys::HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    leptos::mount::mount_to(container.clone(), move || {
        provide_context(toasts);
        provide_context(ledger);
        view! { <StockTable /> }
    })
    .forget();

    container
}

fn text_of(container: &web_sys::HtmlElement, selector: &str) -> String {
    container
        .query_selector(selector)
        .unwrap()
        .and_then(|element| element.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn test_total_hidden_until_calculated() {
    let toasts = NotificationState::new(3000);
    let ledger = LedgerState::new(toasts);
    ledger.seed_initial_rows(&LedgerConfig::default().seed_items);
    let container = mount_table(ledger, toasts);

    let total = container.query_selector("#totalLabel").unwrap().unwrap();
    assert_eq!(total.get_attribute("style").as_deref(), Some("display: none"));
    assert_eq!(text_of(&container, "td.amount"), "");

    ledger.calculate();
    TimeoutFuture::new(10).await;

    assert_eq!(total.get_attribute("style").as_deref(), Some("display: block"));
    assert_eq!(text_of(&container, "#totalLabel"), "Total: 290.00");
    assert_eq!(text_of(&container, "td.amount"), "100.00");
}

#[wasm_bindgen_test]
async fn test_added_row_is_rendered_last() {
    let toasts = NotificationState::new(3000);
    let ledger = LedgerState::new(toasts);
    ledger.seed_initial_rows(&LedgerConfig::default().seed_items);
    let container = mount_table(ledger, toasts);

    ledger.add_item(&LineItem::single("Widget", 12.5));
    TimeoutFuture::new(10).await;

    assert_eq!(text_of(&container, "tbody tr:last-child td"), "Widget");
    let rate = container
        .query_selector("tbody tr:last-child input.rate")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    assert_eq!(rate.value(), "12.5");
}

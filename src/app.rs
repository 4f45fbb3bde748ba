use leptos::prelude::*;

use crate::components::design_system::ToastBanner;
use crate::components::profile_panel::ProfilePanel;
use crate::components::stock_table::StockTable;
use crate::config::AppConfig;
use crate::services::ledger_service::provide_ledger_state;
use crate::services::notification_service::{provide_notification_state, use_notification_state};
use crate::services::profile_service::provide_profile_state;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    // Provide global services
    provide_notification_state(config.toast.duration_ms);
    let toasts = use_notification_state();
    provide_profile_state(&config.storage.profiles_key, toasts);
    provide_ledger_state(&config.ledger.seed_items, toasts);
    provide_context(config);

    view! {
        <main class="max-w-3xl mx-auto p-6 flex flex-col gap-6 text-gray-100">
            <h1 class="text-2xl font-bold">"Stock Quote"</h1>
            <ProfilePanel />
            <StockTable />
            <ToastBanner />
        </main>
    }
}

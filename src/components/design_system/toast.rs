use crate::services::notification_service::{use_notification_state, ToastType};
use leptos::prelude::*;

impl ToastType {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ToastType::Success => "border-l-4 border-green-500",
            ToastType::Error => "border-l-4 border-red-500",
            ToastType::Info => "border-l-4 border-blue-500",
        }
    }
}

/// Bottom status line. Only the `show` class toggles; the text stays.
#[component]
pub fn ToastBanner() -> impl IntoView {
    let state = use_notification_state();

    let class = move || {
        let kind = state.notification.with(|n| n.toast_type);
        format!(
            "toast fixed bottom-4 left-1/2 -translate-x-1/2 min-w-[250px] p-4 rounded shadow-lg bg-gray-800 text-white transition-opacity duration-300 {} {}",
            kind.class(),
            if state.visible.get() { "show opacity-100" } else { "opacity-0 pointer-events-none" }
        )
    };

    view! {
        <div id="toast" class=class role="status" aria-live="polite">
            {move || state.notification.with(|n| n.message.clone())}
        </div>
    }
}

use leptos::ev;
use leptos::prelude::*;

use crate::services::profile_registry::DropdownOption;

/// A styled select dropdown rendered from a list of options
#[component]
pub fn Select(
    /// Current selected value (two-way binding signal)
    #[prop(into)]
    value: RwSignal<String>,
    /// Options in display order
    #[prop(into)]
    options: Signal<Vec<DropdownOption>>,
    /// Element id
    #[prop(into, optional)]
    id: String,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let base_class = "w-full bg-zinc-800 border border-zinc-700 rounded p-2 text-white focus:outline-none focus:ring-2 focus:ring-purple-500/50 focus:border-purple-500";
    let full_class = format!("{base_class} {class}");

    let handle_change = move |evt: ev::Event| {
        let target = event_target::<web_sys::HtmlSelectElement>(&evt);
        value.set(target.value());
    };

    view! {
        <select
            id=id
            class=full_class
            on:change=handle_change
            prop:value=move || value.get()
        >
            {move || {
                let current = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let is_selected = option.value == current;
                        view! {
                            <option
                                value=option.value
                                disabled=option.disabled
                                selected=is_selected
                            >
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

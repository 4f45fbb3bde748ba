//! Profile save/select/delete controls

use leptos::ev;
use leptos::prelude::*;

use crate::components::design_system::{Button, ButtonVariant, Input, Select};
use crate::services::dialogs::BrowserDialogs;
use crate::services::profile_service::use_profile_state;

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let state = use_profile_state();

    let options = Signal::derive(move || state.options());

    let on_keydown = Callback::new(move |evt: ev::KeyboardEvent| {
        if evt.key() == "Enter" {
            state.save();
        }
    });

    view! {
        <section class="flex flex-col gap-3 p-4 bg-gray-800 border border-gray-700 rounded-lg">
            <h2 class="text-lg font-semibold text-gray-100">"Profiles"</h2>
            <div class="flex gap-2">
                <Input
                    id="profileInput"
                    value=state.name_input
                    placeholder="Profile name"
                    on_keydown=on_keydown
                />
                <Button id="saveButton" on_click=move |_| state.save()>
                    "Save"
                </Button>
            </div>
            <div class="flex gap-2">
                <Select id="profileDropdown" value=state.selected options=options />
                <Button
                    id="deleteButton"
                    variant=ButtonVariant::Danger
                    on_click=move |_| state.delete(&BrowserDialogs)
                >
                    "Delete"
                </Button>
            </div>
        </section>
    }
}

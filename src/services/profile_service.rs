//! Reactive profile state
//!
//! Wraps the [`ProfileRegistry`] in a signal together with the name input and
//! dropdown selection, and turns registry results into notifications.

use leptos::prelude::*;

use crate::services::dialogs::Dialogs;
use crate::services::notification_service::{NotificationState, ToastType};
use crate::services::profile_registry::{
    deleted_message, saved_message, DeleteOutcome, DropdownOption, ProfileRegistry,
};
use crate::services::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct ProfileState {
    pub registry: RwSignal<ProfileRegistry<BrowserStorage>>,
    /// Text of the profile name input.
    pub name_input: RwSignal<String>,
    /// Current dropdown value; empty means the placeholder.
    pub selected: RwSignal<String>,
    toasts: NotificationState,
}

impl ProfileState {
    /// Load the registry from local storage under `key`.
    pub fn load(key: &str, toasts: NotificationState) -> Self {
        Self {
            registry: RwSignal::new(ProfileRegistry::load(BrowserStorage, key)),
            name_input: RwSignal::new(String::new()),
            selected: RwSignal::new(String::new()),
            toasts,
        }
    }

    pub fn profiles(&self) -> Vec<String> {
        self.registry.with(|registry| registry.profiles().to_vec())
    }

    pub fn options(&self) -> Vec<DropdownOption> {
        self.registry.with(|registry| registry.options())
    }

    /// Save the typed name. Clears the input and resets the dropdown on success.
    pub fn save(&self) {
        let input = self.name_input.get_untracked();
        let Some(result) = self.registry.try_update(|registry| registry.save(&input)) else {
            return;
        };

        match result {
            Ok(name) => {
                log::info!("Saved profile \"{}\"", name);
                self.name_input.set(String::new());
                self.selected.set(String::new());
                self.toasts.notify(ToastType::Success, saved_message(&name));
            }
            Err(e) => self.toasts.notify(ToastType::Error, e.to_string()),
        }
    }

    /// Delete the selected profile after confirmation. Declining is silent.
    pub fn delete(&self, dialogs: &dyn Dialogs) {
        let selected = self.selected.get_untracked();
        let Some(result) = self
            .registry
            .try_update(|registry| registry.delete(Some(selected.as_str()), dialogs))
        else {
            return;
        };

        match result {
            Ok(DeleteOutcome::Deleted(name)) => {
                log::info!("Deleted profile \"{}\"", name);
                self.selected.set(String::new());
                self.toasts.notify(ToastType::Success, deleted_message(&name));
            }
            Ok(DeleteOutcome::Cancelled) => {}
            Err(e) => self.toasts.notify(ToastType::Error, e.to_string()),
        }
    }
}

pub fn provide_profile_state(key: &str, toasts: NotificationState) {
    provide_context(ProfileState::load(key, toasts));
}

pub fn use_profile_state() -> ProfileState {
    expect_context::<ProfileState>()
}

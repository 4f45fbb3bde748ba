//! Profile Registry
//!
//! Ordered set of unique profile names mirrored to a key-value store as a
//! JSON array. The registry owns the list; the store is injected so the
//! same code runs against `localStorage` and against `MemoryStore`.

use crate::services::dialogs::Dialogs;
use crate::services::storage::{self, KeyValueStore};

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Rejected profile operations. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("Please enter a valid profile name.")]
    InvalidName,

    #[error("Profile already exists!")]
    AlreadyExists,

    #[error("Please select a profile to delete.")]
    NothingSelected,
}

/// What a delete request ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The profile was removed and the store rewritten.
    Deleted(String),
    /// The user declined the confirmation.
    Cancelled,
}

/// Label of the non-selectable first dropdown entry.
pub const PLACEHOLDER_LABEL: &str = "Select a profile";

/// One `<option>` of the profile dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl DropdownOption {
    fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: PLACEHOLDER_LABEL.to_string(),
            disabled: true,
        }
    }

    fn profile(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
            disabled: false,
        }
    }
}

/// Dropdown contents for a profile list: placeholder, then one per profile.
pub fn dropdown_options(profiles: &[String]) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption::placeholder())
        .chain(profiles.iter().map(|name| DropdownOption::profile(name)))
        .collect()
}

pub fn saved_message(name: &str) -> String {
    format!("Profile \"{name}\" saved successfully!")
}

pub fn deleted_message(name: &str) -> String {
    format!("Profile \"{name}\" deleted successfully!")
}

pub fn confirm_delete_message(name: &str) -> String {
    format!("Are you sure you want to delete the profile \"{name}\"?")
}

/// Owned profile list plus the store it is mirrored to.
#[derive(Debug, Clone)]
pub struct ProfileRegistry<S> {
    store: S,
    key: String,
    profiles: Vec<String>,
}

impl<S: KeyValueStore> ProfileRegistry<S> {
    /// Read the stored list. Any failure yields an empty registry.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let profiles = match Self::read(&store, &key) {
            Ok(profiles) => {
                log::info!("Loaded {} profiles from \"{}\"", profiles.len(), key);
                profiles
            }
            Err(e) => {
                log::warn!("Ignoring stored profiles under \"{}\": {}", key, e);
                Vec::new()
            }
        };

        Self {
            store,
            key,
            profiles,
        }
    }

    fn read(store: &S, key: &str) -> storage::Result<Vec<String>> {
        match store.get_item(key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.iter().any(|profile| profile == name)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn options(&self) -> Vec<DropdownOption> {
        dropdown_options(&self.profiles)
    }

    /// Append a new profile. Returns the trimmed name that was stored.
    pub fn save(&mut self, raw_name: &str) -> Result<String> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(ProfileError::InvalidName);
        }
        if self.contains(name) {
            return Err(ProfileError::AlreadyExists);
        }

        self.profiles.push(name.to_string());
        self.persist();
        Ok(name.to_string())
    }

    /// Remove the selected profile after asking the user to confirm.
    ///
    /// An empty selection is the placeholder and counts as no selection.
    pub fn delete(
        &mut self,
        selected: Option<&str>,
        dialogs: &dyn Dialogs,
    ) -> Result<DeleteOutcome> {
        let selected = match selected {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ProfileError::NothingSelected),
        };

        if !dialogs.confirm(&confirm_delete_message(selected)) {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.profiles.retain(|profile| profile != selected);
        self.persist();
        Ok(DeleteOutcome::Deleted(selected.to_string()))
    }

    /// Rewrite the whole list. A failed write keeps the in-memory change.
    fn persist(&self) {
        let result = serde_json::to_string(&self.profiles)
            .map_err(storage::StorageError::from)
            .and_then(|raw| self.store.set_item(&self.key, &raw));

        if let Err(e) = result {
            log::warn!("Failed to persist profiles under \"{}\": {}", self.key, e);
        }
    }
}

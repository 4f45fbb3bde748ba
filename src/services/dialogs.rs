//! Blocking user dialogs (confirm / prompt)

use std::cell::RefCell;
use std::collections::VecDeque;

/// Synchronous dialogs that block until the user answers.
pub trait Dialogs {
    /// Ask a yes/no question. `false` when dismissed.
    fn confirm(&self, message: &str) -> bool;
    /// Ask for free text. `None` when cancelled.
    fn prompt_text(&self, message: &str) -> Option<String>;
}

/// `window.confirm` / `window.prompt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn prompt_text(&self, message: &str) -> Option<String> {
        web_sys::window()
            .and_then(|window| window.prompt_with_message(message).ok())
            .flatten()
    }
}

/// Replays canned answers in order and records every question asked.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    confirms: RefCell<VecDeque<bool>>,
    prompts: RefCell<VecDeque<Option<String>>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next `confirm`.
    pub fn confirm_with(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    /// Queue an answer for the next `prompt_text`; `None` means cancel.
    pub fn prompt_with(self, answer: Option<&str>) -> Self {
        self.prompts
            .borrow_mut()
            .push_back(answer.map(String::from));
        self
    }

    /// Every dialog message shown so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.confirms.borrow_mut().pop_front().unwrap_or(false)
    }

    fn prompt_text(&self, message: &str) -> Option<String> {
        self.asked.borrow_mut().push(message.to_string());
        self.prompts.borrow_mut().pop_front().flatten()
    }
}

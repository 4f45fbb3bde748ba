use leptos::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastType {
    Success,
    Error,
    #[default]
    Info,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Notification {
    pub toast_type: ToastType,
    pub message: String,
}

/// Single status line. Hiding keeps the last text, only visibility changes.
#[derive(Clone, Copy)]
pub struct NotificationState {
    pub notification: RwSignal<Notification>,
    pub visible: RwSignal<bool>,
    pub duration: Duration,
}

impl NotificationState {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            notification: RwSignal::new(Notification::default()),
            visible: RwSignal::new(false),
            duration: Duration::from_millis(u64::from(duration_ms)),
        }
    }

    /// Replace the text, show it, and hide after the configured delay.
    ///
    /// Timers are never cancelled: an earlier call's timer also hides text
    /// set by a later call.
    pub fn notify(&self, toast_type: ToastType, message: impl Into<String>) {
        let message = message.into();
        log::debug!("Toast ({:?}): {}", toast_type, message);

        self.notification.set(Notification {
            toast_type,
            message,
        });
        self.visible.set(true);

        let visible = self.visible;
        hide_after(self.duration, move || visible.set(false));
    }

    pub fn message(&self) -> String {
        self.notification.with(|n| n.message.clone())
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

/// Fire-and-forget timeout; no handle is kept.
fn hide_after<F>(delay: Duration, callback: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Timeout;
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback).forget();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // No event loop outside the browser, hide straight away
        let _ = delay;
        callback();
    }
}

// Global accessor helpers
pub fn provide_notification_state(duration_ms: u32) {
    provide_context(NotificationState::new(duration_ms));
}

pub fn use_notification_state() -> NotificationState {
    expect_context::<NotificationState>()
}

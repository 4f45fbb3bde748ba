//! Design System Components for Leptos
//!
//! Small set of reusable, styled building blocks.

mod button;
mod input;
mod select;
mod toast;


pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use select::Select;
pub use toast::ToastBanner;

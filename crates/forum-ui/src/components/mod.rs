//! Yew components rendering the presentation logic in [`crate::core`].

pub mod button;
pub mod icon;

pub use button::{Button, ButtonProps};
pub use icon::{Icon, IconProps};

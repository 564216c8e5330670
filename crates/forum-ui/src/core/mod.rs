//! Framework-free presentation logic shared by the components.

pub mod button;
pub mod icon;

pub use button::{ButtonStyle, ButtonType, ButtonVariant, ParseVariantError, visible_content};
pub use icon::{IconStyle, icon_class_names};

#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Forum web UI controls.
//! This crate holds the Yew action button, its glyph icon, and the framework-free logic behind them.

pub mod components;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;

pub use components::{Button, ButtonProps, Icon, IconProps};
pub use crate::core::{ButtonStyle, ButtonType, ButtonVariant, ParseVariantError};

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

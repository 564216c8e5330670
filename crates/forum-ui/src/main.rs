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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Button gallery: mounts in the browser on wasm32, explains itself elsewhere.

#[cfg(target_arch = "wasm32")]
fn main() {
    forum_ui::run_app();
}

/// Text shown when the gallery binary is launched outside a browser.
#[cfg(not(target_arch = "wasm32"))]
fn native_notice() -> String {
    let variants: Vec<&str> = forum_ui::ButtonVariant::all()
        .into_iter()
        .map(forum_ui::ButtonVariant::as_str)
        .collect();
    format!(
        "forum-ui button gallery runs in the browser (target wasm32-unknown-unknown, e.g. `trunk serve`).\n\
         Variants on display: {}\n",
        variants.join(", ")
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    std::io::stderr().lock().write_all(native_notice().as_bytes())
}

//! UI library for DioSpoof
//! Contains Dioxus components with custom CSS (offline)

mod components;
mod helpers;
mod state;
mod styles;

pub use components::{App, DummyWindow};
pub use helpers::{copy_to_clipboard, display_path};
pub use state::*;
pub use styles::CUSTOM_STYLES;

//! Placeholder window shown by the spawned spoofed copy

use std::time::Duration;

use dioxus::prelude::*;

use crate::styles::CUSTOM_STYLES;

/// What the spoofed copy displays: a tiny window named after its own
/// executable that minimizes itself and then idles until closed or
/// force-killed by the launcher.
#[component]
pub fn DummyWindow() -> Element {
    let exe_name = current_exe_name();

    // Let the first frame land, then get out of the way. The window
    // stays on the taskbar so observers still see the process.
    use_future(move || async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        dioxus::desktop::window().set_minimized(true);
    });

    rsx! {
        style { {CUSTOM_STYLES} }
        div { class: "dummy-container",
            span { class: "dummy-text", "Game Simulator Running..." }
            span { class: "dummy-name", "({exe_name})" }
        }
    }
}

/// File name this process is running under, i.e. the spoofed name.
fn current_exe_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "game.exe".to_string())
}

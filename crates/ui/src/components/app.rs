//! Main application component with window chrome

use dioxus::prelude::*;
use history::HistoryStore;
use launcher::{remove_spoofed_copy, Launcher};

use super::LauncherPanel;
use crate::state::SpooferConfig;
use crate::styles::CUSTOM_STYLES;

/// Root component of the spoofer window.
///
/// Owns the launcher and the history store; the frameless window gets
/// its own title bar with drag, about, minimize and close controls.
#[component]
pub fn App() -> Element {
    let config = use_context::<SpooferConfig>();
    let mut launcher = use_signal({
        let spoof_dir = config.spoof_dir.clone();
        move || Launcher::new(spoof_dir.clone())
    });
    let history = use_signal({
        let history_path = config.history_path.clone();
        move || HistoryStore::load(history_path.clone())
    });
    let mut about_popup = use_signal(|| false);

    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");

    let about_message = format!(
        r#"
    DioSpoof copies its own executable into the temp
    directory under a game's name and runs the copy in
    dummy mode, so presence reporters reading the process
    list see that game as running.

    Launch • Spoof • History • Stop

    Version: {}
    "#,
        version
    );

    rsx! {
        style { {CUSTOM_STYLES} }

        div {
            class: "main-container",

            // Custom title bar
            div { class: "title-bar",
                div {
                    class: "title-bar-drag",
                    onmousedown: move |_| {
                        let window = dioxus::desktop::window();
                        let _ = window.drag_window();
                    },
                    span { class: "title-icon", "🎮" }
                    span { class: "title-text", "DIOSPOOF | GAME PRESENCE SPOOFER" }
                }
                div { class: "title-bar-buttons",
                    button {
                        class: "title-btn",
                        onclick: move |_| {
                            about_popup.set(true);
                        },
                        "?"
                    }
                    button {
                        class: "title-btn",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.set_minimized(true);
                        },
                        "─"
                    }
                    button {
                        class: "title-btn title-btn-close",
                        onclick: move |_| {
                            // kill and clean up before the window goes away
                            if let Some(outcome) = launcher.write().stop() {
                                let _ = remove_spoofed_copy(&outcome.exe_path);
                            }
                            dioxus::desktop::window().close();
                        },
                        "✕"
                    }
                }
            }

            LauncherPanel { launcher, history }

            div { class: "footer", "DioSpoof v{version}" }

            if *about_popup.read() {
                div {
                    class: "about-modal-overlay",
                    onclick: move |_| about_popup.set(false),

                    div {
                        class: "about-modal",
                        onclick: |e| e.stop_propagation(),

                        div {
                            class: "about-modal-header",
                            h2 { class: "about-modal-title", "🎮 About: DioSpoof" }
                            button {
                                class: "about-modal-close",
                                onclick: move |_| about_popup.set(false),
                                "✕"
                            }
                        }

                        span {
                            style: "white-space: pre-line; padding: 10px; color: #E1E1E1;",
                            "{about_message}"
                        }

                        span {
                            style: "padding: 10px; color: #E1E1E1;",
                            "Developer: "
                            a {
                                href: "https://github.com/un4ckn0wl3z",
                                target: "_blank",
                                class: "about-link",
                                "un4ckn0wl3z"
                            }
                        }
                    }
                }
            }
        }
    }
}

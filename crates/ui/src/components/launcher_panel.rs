//! Launcher panel component: status, target input, history, actions

use std::path::PathBuf;
use std::time::Duration;

use dioxus::prelude::*;
use history::HistoryStore;
use launcher::{
    normalize_name, remove_spoofed_copy, spoof_visible, LaunchError, Launcher,
    CLEANUP_ATTEMPTS, CLEANUP_RETRY_DELAY,
};

use crate::helpers::{copy_to_clipboard, display_path};
use crate::state::{default_target, DEFAULT_TARGET};

/// The single screen of the spoofer: status dot, target name input with
/// a history popup, launch/stop buttons.
#[component]
pub fn LauncherPanel(mut launcher: Signal<Launcher>, mut history: Signal<HistoryStore>) -> Element {
    let mut target_name = use_signal(move || default_target(&history.read()));
    let mut show_history = use_signal(|| false);
    let status_message = use_signal(String::new);
    let mut visible_in_table = use_signal(|| false);

    // Watch the child: observe exits so the UI never shows a spoof that
    // is no longer there, and refresh the process-table presence check.
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            if !launcher.read().is_running() {
                continue;
            }

            let exited = launcher.write().poll_exited();
            if let Some(path) = exited {
                visible_in_table.set(false);
                flash(status_message, "spoofed process exited on its own");
                cleanup_copy(path);
            } else if let Some(info) = launcher.read().active().cloned() {
                visible_in_table.set(spoof_visible(&info.name));
            }
        }
    });

    let on_launch = move |_| {
        let raw = target_name.read().clone();
        let name = match normalize_name(&raw) {
            Ok(name) => name,
            // the button is disabled on empty input, this is the race fallback
            Err(LaunchError::EmptyName) => return,
            Err(e) => {
                show_launch_error(&e);
                return;
            }
        };

        history.write().record(&name);
        target_name.set(name.clone());
        show_history.set(false);

        // keep the launcher borrow out of scope before any blocking dialog
        let started = launcher.write().start(&name);
        match started {
            Ok(info) => {
                visible_in_table.set(false);
                flash(status_message, format!("🚀 spoofing as {}", info.name));
            }
            Err(e) => {
                tracing::error!("launch failed: {}", e);
                show_launch_error(&e);
            }
        }
    };

    let on_stop = move |_| {
        let Some(outcome) = launcher.write().stop() else {
            return;
        };
        visible_in_table.set(false);
        if outcome.tree_killed {
            flash(status_message, "🛑 spoofed process stopped");
        } else {
            flash(status_message, "⚠ stop requested, process may linger");
        }
        cleanup_copy(outcome.exe_path);
    };

    let active = launcher.read().active().cloned();
    let input_value = target_name.read().clone();
    let can_launch = active.is_none() && !input_value.trim().is_empty();
    let history_entries: Vec<String> = history.read().entries().to_vec();
    let show_popup = *show_history.read() && active.is_none() && !history_entries.is_empty();

    let (dot_class, text_class, status_label) = match &active {
        Some(info) => (
            "status-dot status-dot-running",
            "status-text status-text-running",
            format!("PLAYING: {}", info.name),
        ),
        None => ("status-dot", "status-text", "OFFLINE / IDLE".to_string()),
    };

    rsx! {
        div {
            class: "panel",
            // a click anywhere else dismisses the history popup
            onclick: move |_| show_history.set(false),

            // Status
            div { class: "status-area",
                span { class: "{dot_class}" }
                span { class: "{text_class}", "{status_label}" }
            }

            if let Some(info) = &active {
                div { class: "presence-line",
                    if *visible_in_table.read() {
                        span { class: "presence-ok", "✓ visible in the process list as {info.name}" }
                    } else {
                        span { class: "presence-pending", "waiting for {info.name} to appear in the process list…" }
                    }
                    button {
                        class: "btn-small",
                        onclick: {
                            let path = info.exe_path.clone();
                            move |_| {
                                if copy_to_clipboard(&path.to_string_lossy()) {
                                    flash(status_message, "📋 spoofed path copied");
                                }
                            }
                        },
                        "📋 {display_path(&info.exe_path)}"
                    }
                }
            }

            // Target input + history popup
            div { class: "input-container",
                label { class: "input-label", "Target Executable Name" }
                input {
                    class: "target-input",
                    r#type: "text",
                    value: "{input_value}",
                    placeholder: "{DEFAULT_TARGET}",
                    disabled: active.is_some(),
                    onclick: move |e| {
                        e.stop_propagation();
                        show_history.set(true);
                    },
                    onfocusin: move |_| show_history.set(true),
                    oninput: move |e| {
                        target_name.set(e.value());
                        // typing means the user is not picking from the list
                        show_history.set(false);
                    },
                }

                if show_popup {
                    div {
                        class: "history-popup",
                        onclick: move |e| e.stop_propagation(),
                        for entry in history_entries.clone() {
                            button {
                                key: "{entry}",
                                class: "history-item",
                                onclick: {
                                    let entry = entry.clone();
                                    move |e| {
                                        e.stop_propagation();
                                        target_name.set(entry.clone());
                                        show_history.set(false);
                                    }
                                },
                                "{entry}"
                            }
                        }
                    }
                }
            }

            // Actions
            div { class: "action-area",
                button {
                    class: "btn btn-launch",
                    disabled: !can_launch,
                    onclick: on_launch,
                    "🚀 LAUNCH GAME"
                }
                button {
                    class: "btn btn-stop",
                    disabled: active.is_none(),
                    onclick: on_stop,
                    "🛑 STOP PROCESS"
                }
            }

            if !status_message.read().is_empty() {
                div { class: "status-message", "{status_message}" }
            }
        }
    }
}

/// Show a transient status line, cleared after a few seconds.
fn flash(mut status_message: Signal<String>, text: impl Into<String>) {
    status_message.set(text.into());
    spawn(async move {
        tokio::time::sleep(Duration::from_secs(3)).await;
        status_message.set(String::new());
    });
}

/// Blocking error dialog. The locked-destination case gets its own
/// actionable message, anything else the generic one.
fn show_launch_error(error: &LaunchError) {
    let description = if error.is_locked() {
        format!("{error}.\n\nClose the old spoofed process in Task Manager and try again.")
    } else {
        format!("Could not launch the spoofed process.\n\n{error}")
    };
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("DioSpoof")
        .set_description(description)
        .show();
}

/// Delete the spoofed copy, retrying on the event loop: the OS can keep
/// the file locked for a moment after the process dies.
fn cleanup_copy(path: PathBuf) {
    spawn(async move {
        for _ in 0..CLEANUP_ATTEMPTS {
            if remove_spoofed_copy(&path) {
                return;
            }
            tokio::time::sleep(CLEANUP_RETRY_DELAY).await;
        }
        tracing::warn!("leaving spoofed copy behind: {}", path.display());
    });
}

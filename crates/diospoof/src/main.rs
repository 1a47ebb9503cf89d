#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! DioSpoof, a game presence spoofer
//! Copies itself under a game's name and runs the copy in dummy mode so
//! process-list observers see that game as running

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, DummyWindow, SpooferConfig};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The spawned copy runs the same binary with the dummy-mode flag.
    let dummy_mode = std::env::args().any(|arg| arg == launcher::DUMMY_MODE_FLAG);
    if dummy_mode {
        run_dummy_mode();
    } else {
        run_launcher();
    }
}

/// The spoofer UI: frameless, fixed-size, custom title bar.
fn run_launcher() {
    tracing::info!("starting DioSpoof");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_disable_context_menu(true)
                .with_window(
                    WindowBuilder::new()
                        .with_title("DioSpoof")
                        .with_decorations(false)
                        .with_inner_size(LogicalSize::new(460.0, 560.0))
                        .with_resizable(false),
                ),
        )
        .with_context(SpooferConfig::default())
        .launch(App);
}

/// Dummy mode: the copy shows a small placeholder window titled after
/// its own (spoofed) file name and idles until closed or killed.
fn run_dummy_mode() {
    let title = std::env::current_exe()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "game".to_string());
    tracing::info!("running in dummy mode as {}", title);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(title)
                    .with_inner_size(LogicalSize::new(300.0, 100.0))
                    .with_resizable(false),
            ),
        )
        .launch(DummyWindow);
}

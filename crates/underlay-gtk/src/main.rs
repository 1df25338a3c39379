//! Underlay GTK4 frontend - invisible desktop click target
//!
//! Places a transparent full-screen surface on the Bottom layer of Wayland
//! compositors that support wlr-layer-shell (Wayfire, Hyprland, Niri,
//! Sway). A primary click on empty desktop releases focus from the
//! focused window; a secondary click opens a configurable action menu.

mod compositor;
mod input;
mod menu_model;
mod surface;

use gtk4::glib;
use gtk4::prelude::*;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use underlay_core::MenuTree;
use underlay_core::config::{Config, Directories};

use crate::compositor::Compositor;
use crate::surface::DesktopSurface;

const APP_ID: &str = "org.underlay.Desktop";

/// `gtk4::init()` aborts if no display is available, so we must verify connectivity first.
/// Checking socket existence isn't enough - compositor may not be accepting connections yet.
fn wayland_display_ready() -> bool {
    use std::os::unix::net::UnixStream;

    let runtime_dir = std::env::var("XDG_RUNTIME_DIR")
        .unwrap_or_else(|_| format!("/run/user/{}", unsafe { libc::getuid() }));

    if let Ok(display) = std::env::var("WAYLAND_DISPLAY") {
        let socket_path = std::path::Path::new(&runtime_dir).join(&display);
        if UnixStream::connect(&socket_path).is_ok() {
            return true;
        }
    }

    let runtime_path = std::path::Path::new(&runtime_dir);
    if let Ok(entries) = std::fs::read_dir(runtime_path) {
        for entry in entries.flatten() {
            let path = entry.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                let is_lock = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("lock"));
                if name.starts_with("wayland-") && !is_lock && UnixStream::connect(&path).is_ok() {
                    return true;
                }
            }
        }
    }

    false
}

fn setup_logging() {
    #[cfg(debug_assertions)]
    {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let log_filename = format!("underlay-{timestamp}.log");
        let log_path = std::path::Path::new("/tmp").join(&log_filename);

        let symlink_path = std::path::Path::new("/tmp/underlay.log");
        let _ = std::fs::remove_file(symlink_path);
        let _ = std::os::unix::fs::symlink(&log_path, symlink_path);

        let file_appender = tracing_appender::rolling::never("/tmp", &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(
                EnvFilter::from_default_env()
                    .add_directive("underlay=debug".parse().unwrap())
                    .add_directive("underlay_core=debug".parse().unwrap()),
            )
            .init();

        std::mem::forget(guard);
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(
                EnvFilter::from_default_env()
                    .add_directive("underlay=info".parse().unwrap())
                    .add_directive("underlay_core=info".parse().unwrap()),
            )
            .init();
    }
}

fn main() -> glib::ExitCode {
    setup_logging();

    info!("Starting underlay");

    // Optional single argument overrides the config file path; no other flags
    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| Directories::new().config_file, PathBuf::from);

    let max_wait = std::time::Duration::from_secs(10);
    let poll_interval = std::time::Duration::from_millis(100);
    let start = std::time::Instant::now();

    while !wayland_display_ready() {
        if start.elapsed() >= max_wait {
            error!(
                "Wayland display not available after {}s",
                max_wait.as_secs()
            );
            return glib::ExitCode::FAILURE;
        }
        std::thread::sleep(poll_interval);
    }

    let compositor = Compositor::detect();
    if !compositor.supports_layer_shell() {
        error!("Layer shell not supported. Requires wlr-layer-shell compatible compositor.");
        return glib::ExitCode::FAILURE;
    }

    // Config problems are never fatal: fall back to the built-in menu
    let config = Config::load(&config_path);
    let tree = MenuTree::build(&config.menu_items).unwrap_or_else(|e| {
        warn!("Invalid menu configuration: {e}; using default menu");
        MenuTree::default_tree()
    });

    let app = gtk4::Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        if let Some(window) = app.windows().first() {
            window.present();
            return;
        }

        let desktop = DesktopSurface::new(app, &tree);
        desktop.present();

        println!("Left-click: release focus from open windows");
        println!("Right-click: open the action menu");
    });

    // Termination signals only request loop exit; teardown runs on the
    // loop's normal exit path
    for signum in [libc::SIGINT, libc::SIGTERM] {
        let app_weak = app.downgrade();
        glib::unix_signal_add_local(signum, move || {
            info!("Termination signal received, quitting");
            if let Some(app) = app_weak.upgrade() {
                app.quit();
            }
            glib::ControlFlow::Break
        });
    }

    // Run without forwarding argv; the config path is ours, not a
    // GApplication option
    app.run_with_args::<&str>(&[])
}

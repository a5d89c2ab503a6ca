//! Renamer With Subs
//!
//! A desktop application that pairs video clips with subtitles and renames
//! one side of each pair after the other.
//! Built with Rust and egui for cross-platform use.

use eframe::egui;
use log::{error, info, warn};

use renamer_with_subs::{
    config::{APP_NAME, MIN_WINDOW_SIZE, WINDOW_SIZE},
    logging::{setup_logging, shutdown_logging},
    RenamerApp,
};

/// Load the optional window icon shipped next to the executable
fn load_app_icon() -> Option<egui::IconData> {
    let exe_path = std::env::current_exe().ok()?;
    let icon_path = exe_path.parent()?.join("resources").join("rws.png");
    if !icon_path.exists() {
        return None;
    }
    match image::open(&icon_path) {
        Ok(image) => {
            let rgba = image.to_rgba8();
            let (width, height) = rgba.dimensions();
            Some(egui::IconData {
                rgba: rgba.into_raw(),
                width,
                height,
            })
        }
        Err(e) => {
            warn!("Failed to load application icon {}: {}", icon_path.display(), e);
            None
        }
    }
}

/// Configure the application window
fn configure_window(icon_data: Option<egui::IconData>) -> eframe::NativeOptions {
    let mut viewport_builder = egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size(WINDOW_SIZE)
        .with_min_inner_size(MIN_WINDOW_SIZE)
        .with_resizable(true)
        .with_drag_and_drop(true);

    if let Some(icon) = icon_data {
        viewport_builder = viewport_builder.with_icon(icon);
    }

    eframe::NativeOptions {
        viewport: viewport_builder,
        ..Default::default()
    }
}

/// Dark theme with purple accents
fn configure_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.selection.bg_fill = egui::Color32::from_rgb(189, 147, 249);
    visuals.hyperlink_color = egui::Color32::from_rgb(139, 233, 253);
    visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(98, 114, 164);
    visuals.widgets.inactive.bg_fill = egui::Color32::from_rgb(68, 71, 90);
    visuals.striped = true;
    ctx.set_visuals(visuals);
}

fn main() {
    if let Err(e) = setup_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }
    info!("Starting {}", APP_NAME);

    let native_options = configure_window(load_app_icon());
    info!("Initializing GUI with window size: {}x{}", WINDOW_SIZE[0], WINDOW_SIZE[1]);

    let result = eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| {
            configure_visuals(&cc.egui_ctx);
            info!("GUI initialized successfully");
            Box::new(RenamerApp::default())
        }),
    );

    let failed = match result {
        Ok(()) => false,
        Err(e) => {
            error!("Failed to start the window: {}", e);
            eprintln!("Failed to start the window: {}", e);
            true
        }
    };
    shutdown_logging();
    if failed {
        std::process::exit(1);
    }
}

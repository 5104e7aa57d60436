mod app;
mod app_dir;
mod load_bridge;
mod panel_board;
mod preferences;
mod ui;

use eframe::egui;
use tracing::info;

use app::MetaSearchApp;
use preferences::AppPreferences;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting MetaSearch");

    let prefs = AppPreferences::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(metasearch_core::DEFAULT_PAGE_TITLE)
            .with_inner_size([prefs.window_width, prefs.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "MetaSearch",
        options,
        Box::new(move |cc| {
            egui_material_icons::initialize(&cc.egui_ctx);
            Ok(Box::new(MetaSearchApp::new(&cc.egui_ctx, prefs)))
        }),
    )
}

use eframe::egui;
use tracing::info;

use metasearch_core::{EngineRegistry, PanelController, Slot};

use crate::load_bridge::LoadBridge;
use crate::panel_board::PanelBoard;
use crate::preferences::AppPreferences;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const PANEL_MARGIN: i8 = 8;
pub(crate) const PANEL_CORNER_RADIUS: f32 = 6.0;
pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(80, 200, 255);
pub(crate) const WARN: egui::Color32 = egui::Color32::from_rgb(255, 180, 50);
pub(crate) const ERROR: egui::Color32 = egui::Color32::from_rgb(240, 90, 90);

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

pub(crate) struct MetaSearchApp {
    pub(crate) controller: PanelController,
    pub(crate) board: PanelBoard,
    pub(crate) preferences: AppPreferences,

    // UI state
    pub(crate) query_input: String,
    /// Move keyboard focus to the search field on the next frame.
    pub(crate) focus_search: bool,
    pub(crate) show_help: bool,
    window_title: String,
}

impl MetaSearchApp {
    pub(crate) fn new(egui_ctx: &egui::Context, prefs: AppPreferences) -> Self {
        let registry = EngineRegistry::with_custom(prefs.custom_engines.iter().cloned());
        info!("{} search engines available", registry.len());

        let loads = LoadBridge::new(
            Some(egui_ctx.clone()),
            prefs.fetch_config(),
            prefs.load_previews,
        );
        let mut board = PanelBoard::new(loads);
        let mut controller = PanelController::new(registry, prefs.initial_engines.clone());
        controller.refresh_titles(&mut board);

        Self {
            controller,
            board,
            preferences: prefs,
            query_input: String::new(),
            focus_search: true,
            show_help: false,
            window_title: String::new(),
        }
    }

    // -- Inbound actions ----------------------------------------------------

    pub(crate) fn on_submit(&mut self) {
        let query = self.query_input.clone();
        if self.controller.submit_query(&query, &mut self.board).is_err() {
            self.focus_search = true;
        } else {
            self.board.status = None;
        }
    }

    /// Run the stored query again, e.g. to retry panels after a network hiccup.
    pub(crate) fn on_resubmit(&mut self) {
        if let Some(q) = self.controller.query() {
            self.query_input = q.to_string();
        }
        self.on_submit();
    }

    pub(crate) fn on_engine_select(&mut self, slot: Slot, code: &str) {
        self.controller.select_engine(slot, code, &mut self.board);
        self.remember_selections();
    }

    pub(crate) fn on_swap_requested(&mut self) {
        self.controller.swap(Slot::One, Slot::Two, &mut self.board);
        self.remember_selections();
    }

    pub(crate) fn on_preset_requested(&mut self, name: &str) {
        if self.controller.apply_preset(name, &mut self.board).is_ok() {
            self.remember_selections();
        }
        self.focus_search = true;
    }

    fn remember_selections(&mut self) {
        if !self.preferences.remember_selections {
            return;
        }
        let current = self.controller.selections();
        if &self.preferences.initial_engines != current {
            self.preferences.initial_engines = current.clone();
            self.preferences.save();
        }
    }

    // -- Frame helpers ------------------------------------------------------

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = self.controller.page_title();
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (help, swap, rerun, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::F1),
                i.key_pressed(egui::Key::F2),
                i.key_pressed(egui::Key::F5),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if help {
            self.show_help = !self.show_help;
        }
        if swap {
            self.on_swap_requested();
        }
        if rerun {
            self.on_resubmit();
        }
        if escape {
            self.show_help = false;
            self.board.show_empty_query_notice = false;
        }
    }
}

impl eframe::App for MetaSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());
        self.board.poll_loads();
        self.handle_shortcuts(ctx);

        self.draw_search_bar(ctx);
        self.draw_status_bar(ctx);
        self.draw_panels(ctx);

        self.show_help_window(ctx);
        self.show_empty_query_notice(ctx);
        self.sync_window_title(ctx);
    }
}

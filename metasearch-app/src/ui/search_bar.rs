use eframe::egui;

use metasearch_core::Preset;

use crate::app::{MetaSearchApp, ACCENT};

enum BarAction {
    None,
    Submit,
    Preset(Preset),
    Swap,
    Help,
}

impl MetaSearchApp {
    /// Query field, search button, presets and swap. Must be drawn before
    /// the central panel so `egui` reserves space for it.
    pub(crate) fn draw_search_bar(&mut self, ctx: &egui::Context) {
        use egui_material_icons::icons::*;

        let mut action = BarAction::None;

        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("MetaSearch").strong().size(18.0).color(ACCENT));
                ui.add_space(12.0);

                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.query_input)
                        .hint_text("Search across engines\u{2026}")
                        .desired_width(460.0),
                );
                if self.focus_search {
                    resp.request_focus();
                    self.focus_search = false;
                }
                if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = BarAction::Submit;
                }
                if ui.button(format!("{ICON_SEARCH} Search")).clicked() {
                    action = BarAction::Submit;
                }

                ui.separator();
                ui.label("Presets:");
                for preset in Preset::ALL {
                    let engines = preset.engines().join(", ");
                    if ui.button(preset.label()).on_hover_text(engines).clicked() {
                        action = BarAction::Preset(preset);
                    }
                }

                ui.separator();
                if ui
                    .button(format!("{ICON_SWAP_HORIZ} Swap 1 \u{2194} 2"))
                    .on_hover_text("Swap the engines of panels 1 and 2 (F2)")
                    .clicked()
                {
                    action = BarAction::Swap;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(egui::RichText::new(ICON_HELP_OUTLINE).size(18.0))
                        .on_hover_text("Help (F1)")
                        .clicked()
                    {
                        action = BarAction::Help;
                    }
                });
            });
            ui.add_space(6.0);
        });

        match action {
            BarAction::Submit => self.on_submit(),
            BarAction::Preset(preset) => self.on_preset_requested(preset.name()),
            BarAction::Swap => self.on_swap_requested(),
            BarAction::Help => self.show_help = !self.show_help,
            BarAction::None => {}
        }
    }

    pub(crate) fn draw_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match self.controller.query() {
                    Some(q) => ui.label(format!("Query: \u{201c}{q}\u{201d}")),
                    None => ui.weak("No search yet"),
                };
                for (i, panel) in self.board.panels.iter().enumerate() {
                    ui.separator();
                    ui.label(format!("Panel {}: {}", i + 1, panel.embed.label()));
                }
                if self.board.any_loading() {
                    ui.spinner();
                }
                if let Some(status) = &self.board.status {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.colored_label(crate::app::WARN, status.as_str());
                    });
                }
            });
        });
    }
}

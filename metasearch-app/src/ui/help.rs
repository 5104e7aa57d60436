use eframe::egui;

use crate::app::MetaSearchApp;

impl MetaSearchApp {
    pub(crate) fn show_help_window(&mut self, ctx: &egui::Context) {
        if !self.show_help {
            return;
        }

        let mut open = true;
        egui::Window::new("Controls & Shortcuts")
            .open(&mut open)
            .resizable(false)
            .default_width(340.0)
            .show(ctx, |ui| {
                ui.heading("Keyboard");
                ui.add_space(2.0);
                egui::Grid::new("help_kb")
                    .num_columns(2)
                    .spacing([12.0, 2.0])
                    .show(ui, |ui| {
                        let keys: &[(&str, &str)] = &[
                            ("Enter", "Search all three panels"),
                            ("F1", "Toggle this window"),
                            ("F2", "Swap engines of panels 1 and 2"),
                            ("F5", "Run the current search again"),
                            ("Esc", "Close dialogs"),
                        ];
                        for &(k, d) in keys {
                            ui.label(egui::RichText::new(k).strong().color(egui::Color32::WHITE));
                            ui.label(d);
                            ui.end_row();
                        }
                    });

                ui.add_space(8.0);
                ui.heading("Panels");
                ui.add_space(2.0);
                ui.label(
                    "Each panel loads its engine's results page in the background. \
                     Many engines refuse to be embedded; when that happens the panel \
                     says so and the \u{201c}Open directly\u{201d} link opens the \
                     results in your browser.",
                );
                ui.add_space(4.0);
                ui.label(
                    "Presets switch all three engines at once and keep the current \
                     query; press Enter or F5 to search with the new engines.",
                );
            });

        if !open {
            self.show_help = false;
        }
    }

    pub(crate) fn show_empty_query_notice(&mut self, ctx: &egui::Context) {
        if !self.board.show_empty_query_notice {
            return;
        }

        let mut dismissed = false;
        egui::Window::new("Nothing to search")
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Please enter a search query.");
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.board.show_empty_query_notice = false;
            self.focus_search = true;
        }
    }
}

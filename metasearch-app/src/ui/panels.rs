use eframe::egui;

use metasearch_core::{EngineCategory, Slot};

use crate::app::{MetaSearchApp, ACCENT, ERROR, PANEL_CORNER_RADIUS, PANEL_MARGIN, WARN};
use crate::panel_board::{EmbedState, PanelState};

impl MetaSearchApp {
    pub(crate) fn draw_panels(&mut self, ctx: &egui::Context) {
        let mut picked: Option<(Slot, String)> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(3, |columns| {
                for slot in Slot::ALL {
                    let ui = &mut columns[slot.index()];
                    egui::Frame::NONE
                        .fill(egui::Color32::from_gray(24))
                        .inner_margin(egui::Margin::same(PANEL_MARGIN))
                        .corner_radius(PANEL_CORNER_RADIUS)
                        .show(ui, |ui| {
                            ui.set_min_height(ui.available_height());
                            if let Some(code) = self.engine_picker(ui, slot) {
                                picked = Some((slot, code));
                            }
                            ui.add_space(4.0);
                            draw_panel_body(ui, self.board.panel(slot));
                        });
                }
            });
        });

        if let Some((slot, code)) = picked {
            self.on_engine_select(slot, &code);
        }
    }

    /// Engine combo box, grouped by category. Returns a newly picked code.
    fn engine_picker(&self, ui: &mut egui::Ui, slot: Slot) -> Option<String> {
        let registry = self.controller.registry();
        let current = self.controller.selection(slot);
        let selected_text = registry
            .lookup(current)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| format!("Unknown ({current})"));

        let mut picked = None;
        ui.horizontal(|ui| {
            ui.label(format!("Panel {slot}"));
            egui::ComboBox::from_id_salt(("engine_select", slot.number()))
                .selected_text(selected_text)
                .width(180.0)
                .show_ui(ui, |ui| {
                    for category in EngineCategory::ALL {
                        let mut engines = registry.by_category(category).peekable();
                        if engines.peek().is_none() {
                            continue;
                        }
                        ui.label(egui::RichText::new(category.label()).small().weak());
                        for (code, engine) in engines {
                            if ui.selectable_label(code == current, engine.name.as_str()).clicked()
                                && code != current
                            {
                                picked = Some(code.to_string());
                            }
                        }
                        ui.separator();
                    }
                });
        });
        picked
    }
}

fn draw_panel_body(ui: &mut egui::Ui, panel: &PanelState) {
    use egui_material_icons::icons::*;

    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new(&panel.title).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match &panel.direct_url {
                Some(url) => {
                    ui.hyperlink_to(format!("{ICON_OPEN_IN_NEW} Open directly"), url)
                        .on_hover_text(url.as_str());
                }
                None => {
                    ui.add_enabled(
                        false,
                        egui::Button::new(format!("{ICON_OPEN_IN_NEW} Open directly")),
                    );
                }
            }
        });
    });
    ui.separator();
    draw_viewport(ui, &panel.embed);
}

/// The embedded viewport: placeholder, progress, page summary, or notice.
fn draw_viewport(ui: &mut egui::Ui, embed: &EmbedState) {
    match embed {
        EmbedState::Placeholder => {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.35);
                ui.weak("Enter a search query to see results here.");
            });
        }
        EmbedState::Disabled { url } => {
            ui.weak("Page previews are turned off in preferences.");
            ui.add_space(4.0);
            ui.small(url.as_str());
        }
        EmbedState::Loading { url } => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading\u{2026}");
            });
            ui.small(url.as_str());
        }
        EmbedState::Loaded(outcome) => {
            let title = outcome.page_title.as_deref().unwrap_or("(untitled page)");
            ui.label(egui::RichText::new(title).size(15.0).color(ACCENT));
            ui.small(format!(
                "HTTP {} \u{00b7} {:.1} KiB \u{00b7} {} ms",
                outcome.status,
                outcome.bytes as f64 / 1024.0,
                outcome.elapsed.as_millis()
            ));
            ui.add_space(6.0);
            if let metasearch_embed::EmbedVerdict::Blocked { reason } = &outcome.verdict {
                ui.colored_label(
                    WARN,
                    "This site may be blocked from embedding. Use \u{201c}Open directly\u{201d} instead.",
                );
                ui.small(reason.as_str());
            } else if outcome.status >= 400 {
                ui.colored_label(
                    WARN,
                    format!("The engine answered with HTTP {}.", outcome.status),
                );
            } else {
                ui.label("Results are ready.");
                if ui.button("Open in browser").clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(&outcome.url));
                }
            }
        }
        EmbedState::Failed { url, error } => {
            ui.colored_label(ERROR, "Could not load this panel.");
            ui.small(error.as_str());
            ui.add_space(4.0);
            ui.small(url.as_str());
            ui.weak("The \u{201c}Open directly\u{201d} link still works.");
        }
    }
}

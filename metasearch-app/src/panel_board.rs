use tracing::debug;

use metasearch_core::{CoreError, PanelRenderer, Slot};
use metasearch_embed::{EmbedError, EmbedOutcome};

use crate::load_bridge::LoadBridge;

/// What a panel's embedded viewport is showing.
#[derive(Debug, Clone)]
pub(crate) enum EmbedState {
    /// No search since the panel's engine was set.
    Placeholder,
    /// A URL is set but background loading is turned off.
    Disabled { url: String },
    Loading { url: String },
    Loaded(EmbedOutcome),
    Failed { url: String, error: String },
}

impl EmbedState {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Placeholder => "Idle",
            Self::Disabled { .. } => "Preview off",
            Self::Loading { .. } => "Loading\u{2026}",
            Self::Loaded(o) if o.verdict.is_blocked() => "Blocked",
            Self::Loaded(_) => "Loaded",
            Self::Failed { .. } => "Failed",
        }
    }
}

/// UI-side copy of one panel.
#[derive(Debug, Clone)]
pub(crate) struct PanelState {
    pub(crate) title: String,
    pub(crate) direct_url: Option<String>,
    pub(crate) embed: EmbedState,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            title: String::new(),
            direct_url: None,
            embed: EmbedState::Placeholder,
        }
    }
}

/// The presentation state the controller renders into.
pub(crate) struct PanelBoard {
    pub(crate) panels: [PanelState; 3],
    /// Last non-blocking error, shown in the status bar.
    pub(crate) status: Option<String>,
    pub(crate) show_empty_query_notice: bool,
    loads: LoadBridge,
}

impl PanelBoard {
    pub(crate) fn new(loads: LoadBridge) -> Self {
        Self {
            panels: Default::default(),
            status: None,
            show_empty_query_notice: false,
            loads,
        }
    }

    pub(crate) fn panel(&self, slot: Slot) -> &PanelState {
        &self.panels[slot.index()]
    }

    /// Apply finished background loads to their panels.
    pub(crate) fn poll_loads(&mut self) {
        for result in self.loads.poll() {
            let panel = &mut self.panels[result.slot.index()];
            let url = match &panel.embed {
                EmbedState::Loading { url } => url.clone(),
                _ => continue,
            };
            panel.embed = match result.outcome {
                Ok(outcome) => EmbedState::Loaded(outcome),
                Err(EmbedError::Cancelled) => continue,
                Err(e) => EmbedState::Failed {
                    url,
                    error: e.to_string(),
                },
            };
        }
    }

    pub(crate) fn any_loading(&self) -> bool {
        self.panels
            .iter()
            .any(|p| matches!(p.embed, EmbedState::Loading { .. }))
    }
}

impl PanelRenderer for PanelBoard {
    fn render_title(&mut self, slot: Slot, title: &str) {
        self.panels[slot.index()].title = title.to_string();
    }

    fn render_direct_link(&mut self, slot: Slot, url: Option<&str>) {
        self.panels[slot.index()].direct_url = url.map(str::to_string);
    }

    fn render_embedded_content(&mut self, slot: Slot, url: Option<&str>) {
        let panel = &mut self.panels[slot.index()];
        panel.embed = match url {
            None => {
                self.loads.cancel(slot);
                EmbedState::Placeholder
            }
            Some(url) if !self.loads.enabled() => EmbedState::Disabled {
                url: url.to_string(),
            },
            Some(url) => {
                self.loads.request(slot, url);
                EmbedState::Loading {
                    url: url.to_string(),
                }
            }
        };
    }

    fn report_error(&mut self, error: &CoreError) {
        debug!("Reporting: {error}");
        match error {
            CoreError::EmptyQuery => self.show_empty_query_notice = true,
            other => self.status = Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metasearch_core::{EngineRegistry, PanelController, Preset};
    use metasearch_embed::FetchConfig;

    fn offline_board() -> PanelBoard {
        PanelBoard::new(LoadBridge::new(None, FetchConfig::default(), false))
    }

    #[test]
    fn titles_render_before_any_search() {
        let mut board = offline_board();
        let mut c = PanelController::with_preset(EngineRegistry::builtin(), Preset::Privacy);
        c.refresh_titles(&mut board);
        assert_eq!(board.panel(Slot::One).title, "Startpage Results");
        assert_eq!(board.panel(Slot::Two).title, "Brave Search Results");
        assert_eq!(board.panel(Slot::Three).title, "Mojeek Results");
        assert!(board.panels.iter().all(|p| p.direct_url.is_none()));
        assert!(board
            .panels
            .iter()
            .all(|p| matches!(p.embed, EmbedState::Placeholder)));
    }

    #[test]
    fn submit_fills_links_and_viewports() {
        let mut board = offline_board();
        let mut c = PanelController::with_preset(EngineRegistry::builtin(), Preset::General);
        c.submit_query("cats", &mut board).unwrap();
        let p1 = board.panel(Slot::One);
        assert_eq!(p1.direct_url.as_deref(), Some("https://www.google.com/search?q=cats"));
        match &p1.embed {
            EmbedState::Disabled { url } => assert_eq!(url, "https://www.google.com/search?q=cats"),
            other => panic!("unexpected embed state {other:?}"),
        }
    }

    #[test]
    fn empty_query_raises_notice_only() {
        let mut board = offline_board();
        let mut c = PanelController::with_preset(EngineRegistry::builtin(), Preset::General);
        assert!(c.submit_query("  ", &mut board).is_err());
        assert!(board.show_empty_query_notice);
        assert!(board.status.is_none());
        assert!(board.panels.iter().all(|p| p.title.is_empty()));
    }

    #[test]
    fn unknown_engine_goes_to_status_bar() {
        let mut board = offline_board();
        let mut c = PanelController::with_preset(EngineRegistry::builtin(), Preset::General);
        c.refresh_titles(&mut board);
        c.select_engine(Slot::Three, "lycos", &mut board);
        assert_eq!(board.panel(Slot::Three).title, "DuckDuckGo Results");
        assert!(board.status.as_deref().unwrap().contains("lycos"));
        assert!(!board.show_empty_query_notice);
    }

    #[test]
    fn changing_engine_clears_link_and_viewport() {
        let mut board = offline_board();
        let mut c = PanelController::with_preset(EngineRegistry::builtin(), Preset::General);
        c.submit_query("cats", &mut board).unwrap();
        c.select_engine(Slot::One, "naver", &mut board);
        let p1 = board.panel(Slot::One);
        assert_eq!(p1.title, "Naver Results");
        assert_eq!(p1.direct_url, None);
        assert!(matches!(p1.embed, EmbedState::Placeholder));
        assert_eq!(
            board.panel(Slot::Two).direct_url.as_deref(),
            Some("https://www.bing.com/search?q=cats")
        );
    }

    #[test]
    fn disabled_loads_never_report_back() {
        let mut board = offline_board();
        let mut c = PanelController::with_preset(EngineRegistry::builtin(), Preset::General);
        c.submit_query("cats", &mut board).unwrap();
        board.poll_loads();
        assert!(!board.any_loading());
        assert_eq!(board.panel(Slot::Two).embed.label(), "Preview off");
    }
}

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::engine::EngineRegistry;
use crate::error::CoreError;
use crate::preset::Preset;
use crate::render::PanelRenderer;
use crate::slot::Slot;

/// Window title used before any query has been submitted.
pub const DEFAULT_PAGE_TITLE: &str = "MetaSearch";

/// What a panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelView {
    pub title: String,
    /// Resolved search URL; `None` until a query has been submitted.
    pub direct_url: Option<String>,
}

/// Selections, query and derived views for the three panels.
///
/// Owned by the presentation layer, which forwards user actions to the
/// methods below and passes itself (or a recorder) as the [`PanelRenderer`].
/// Each method runs to completion and renders every slot it touched.
#[derive(Debug, Clone)]
pub struct PanelController {
    registry: EngineRegistry,
    selections: [String; 3],
    views: [Option<PanelView>; 3],
    query: Option<String>,
}

impl PanelController {
    /// Create a controller with explicit initial engine codes for slots 1..3.
    ///
    /// Codes are not checked here; an unknown one is reported the first time
    /// its slot is rendered.
    pub fn new(registry: EngineRegistry, initial: [String; 3]) -> Self {
        Self {
            registry,
            selections: initial,
            views: Default::default(),
            query: None,
        }
    }

    /// Create a controller whose slots start out on `preset`.
    pub fn with_preset(registry: EngineRegistry, preset: Preset) -> Self {
        Self::new(registry, preset.engines().map(str::to_string))
    }

    // -- Accessors ----------------------------------------------------------

    pub fn registry(&self) -> &EngineRegistry {
        &self.registry
    }

    pub fn selection(&self, slot: Slot) -> &str {
        &self.selections[slot.index()]
    }

    pub fn selections(&self) -> &[String; 3] {
        &self.selections
    }

    /// Last successfully rendered view, if the slot has been rendered yet.
    pub fn view(&self, slot: Slot) -> Option<&PanelView> {
        self.views[slot.index()].as_ref()
    }

    /// The trimmed query of the last successful submission.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Window title reflecting the current query.
    pub fn page_title(&self) -> String {
        match &self.query {
            Some(q) => format!("\"{q}\" - MetaSearch Results"),
            None => DEFAULT_PAGE_TITLE.to_string(),
        }
    }

    // -- Pure computation ---------------------------------------------------

    /// Derive the view for `slot` from its selection and the stored query.
    pub fn compute_view(&self, slot: Slot) -> crate::Result<PanelView> {
        let code = self.selection(slot);
        let engine = self
            .registry
            .lookup(code)
            .ok_or_else(|| CoreError::UnknownEngine {
                slot,
                code: code.to_string(),
            })?;
        Ok(PanelView {
            title: engine.results_title(),
            direct_url: self.query.as_deref().map(|q| engine.resolve(q)),
        })
    }

    // -- Operations ---------------------------------------------------------

    /// Render every slot's title. Called once when the UI attaches.
    pub fn refresh_titles<R: PanelRenderer>(&mut self, out: &mut R) {
        for slot in Slot::ALL {
            self.refresh_title(slot, out);
        }
    }

    /// Change the engine shown in `slot`. Only that slot is redrawn: its title
    /// follows the new engine and its link and viewport are cleared until the
    /// next submit. An unknown code leaves the previous view in place.
    pub fn select_engine<R: PanelRenderer>(&mut self, slot: Slot, code: &str, out: &mut R) {
        debug!(slot = %slot, code, "Engine selected");
        self.selections[slot.index()] = code.to_string();
        if self.refresh_title(slot, out) {
            out.render_direct_link(slot, None);
            out.render_embedded_content(slot, None);
            if let Some(view) = self.views[slot.index()].as_mut() {
                view.direct_url = None;
            }
        }
    }

    /// Store `query` (trimmed) and render full views for all three slots.
    ///
    /// A blank query fails with [`CoreError::EmptyQuery`] before anything is
    /// changed. Unknown engines are reported per slot and do not fail the
    /// submission.
    pub fn submit_query<R: PanelRenderer>(
        &mut self,
        query: &str,
        out: &mut R,
    ) -> crate::Result<()> {
        let query = query.trim();
        if query.is_empty() {
            out.report_error(&CoreError::EmptyQuery);
            return Err(CoreError::EmptyQuery);
        }
        info!(query, "Submitting search");
        self.query = Some(query.to_string());
        for slot in Slot::ALL {
            self.refresh_view(slot, out);
        }
        Ok(())
    }

    /// Exchange the selections of two slots. With a stored query both slots
    /// are fully re-rendered; otherwise only their titles change.
    pub fn swap<R: PanelRenderer>(&mut self, a: Slot, b: Slot, out: &mut R) {
        debug!(a = %a, b = %b, "Swapping panels");
        self.selections.swap(a.index(), b.index());
        let slots: &[Slot] = if a == b { &[a] } else { &[a, b] };
        for &slot in slots {
            if self.query.is_some() {
                self.refresh_view(slot, out);
            } else {
                self.refresh_title(slot, out);
            }
        }
    }

    /// Apply the preset called `name`. Unknown names change nothing.
    pub fn apply_preset<R: PanelRenderer>(
        &mut self,
        name: &str,
        out: &mut R,
    ) -> crate::Result<Preset> {
        let preset = match name.parse::<Preset>() {
            Ok(p) => p,
            Err(e) => {
                warn!("{e}");
                out.report_error(&e);
                return Err(e);
            }
        };
        self.apply(preset, out);
        Ok(preset)
    }

    /// Set all three selections from `preset` and redraw titles. The stored
    /// query and any rendered links are left alone.
    pub fn apply<R: PanelRenderer>(&mut self, preset: Preset, out: &mut R) {
        info!(preset = preset.name(), "Applying preset");
        self.selections = preset.engines().map(str::to_string);
        self.refresh_titles(out);
    }

    // -- Internals ----------------------------------------------------------

    /// Returns `false` if the slot's engine is unknown.
    fn refresh_title<R: PanelRenderer>(&mut self, slot: Slot, out: &mut R) -> bool {
        let code = self.selection(slot);
        match self.registry.lookup(code) {
            Some(engine) => {
                let title = engine.results_title();
                out.render_title(slot, &title);
                self.views[slot.index()]
                    .get_or_insert_with(PanelView::default)
                    .title = title;
                true
            }
            None => {
                self.report_unknown(slot, out);
                false
            }
        }
    }

    fn refresh_view<R: PanelRenderer>(&mut self, slot: Slot, out: &mut R) {
        match self.compute_view(slot) {
            Ok(view) => {
                out.render_title(slot, &view.title);
                out.render_direct_link(slot, view.direct_url.as_deref());
                out.render_embedded_content(slot, view.direct_url.as_deref());
                self.views[slot.index()] = Some(view);
            }
            Err(_) => self.report_unknown(slot, out),
        }
    }

    fn report_unknown<R: PanelRenderer>(&self, slot: Slot, out: &mut R) {
        let err = CoreError::UnknownEngine {
            slot,
            code: self.selection(slot).to_string(),
        };
        warn!("{err}");
        out.report_error(&err);
    }
}

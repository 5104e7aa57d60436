use crate::error::CoreError;
use crate::slot::Slot;

/// Presentation-layer observer driven by [`PanelController`](crate::PanelController).
///
/// The controller calls these once per affected slot after every operation.
/// Implementations decide how to show the result; they never call back into
/// the controller.
pub trait PanelRenderer {
    fn render_title(&mut self, slot: Slot, title: &str);

    fn render_direct_link(&mut self, slot: Slot, url: Option<&str>);

    /// Load `url` into the slot's embedded viewport, or show the placeholder
    /// when `None`. The outcome of the load is never reported back.
    fn render_embedded_content(&mut self, slot: Slot, url: Option<&str>);

    fn report_error(&mut self, error: &CoreError);
}

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Title { slot: Slot, title: String },
    DirectLink { slot: Slot, url: Option<String> },
    EmbeddedContent { slot: Slot, url: Option<String> },
    Error(CoreError),
}

impl RenderEvent {
    pub fn slot(&self) -> Option<Slot> {
        match self {
            Self::Title { slot, .. }
            | Self::DirectLink { slot, .. }
            | Self::EmbeddedContent { slot, .. } => Some(*slot),
            Self::Error(e) => e.slot(),
        }
    }
}

/// Records calls so they can be applied later, outside the controller borrow.
impl PanelRenderer for Vec<RenderEvent> {
    fn render_title(&mut self, slot: Slot, title: &str) {
        self.push(RenderEvent::Title {
            slot,
            title: title.to_string(),
        });
    }

    fn render_direct_link(&mut self, slot: Slot, url: Option<&str>) {
        self.push(RenderEvent::DirectLink {
            slot,
            url: url.map(str::to_string),
        });
    }

    fn render_embedded_content(&mut self, slot: Slot, url: Option<&str>) {
        self.push(RenderEvent::EmbeddedContent {
            slot,
            url: url.map(str::to_string),
        });
    }

    fn report_error(&mut self, error: &CoreError) {
        self.push(RenderEvent::Error(error.clone()));
    }
}

pub mod controller;
pub mod engine;
pub mod error;
pub mod preset;
pub mod render;
pub mod slot;

// Re-export primary types for convenience.
pub use controller::{PanelController, PanelView, DEFAULT_PAGE_TITLE};
pub use engine::{
    resolve, EngineCategory, EngineDescriptor, EngineEntry, EngineRegistry, QUERY_PLACEHOLDER,
};
pub use error::CoreError;
pub use preset::Preset;
pub use render::{PanelRenderer, RenderEvent};
pub use slot::Slot;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;

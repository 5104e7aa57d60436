pub mod cancel;
pub mod document;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod verdict;

pub use cancel::LoadCancel;
pub use document::extract_title;
pub use error::EmbedError;
pub use fetch::{fetch, EmbedOutcome, FetchConfig};
pub use loader::{spawn_load, LoadRequest, LoadResult};
pub use verdict::{embed_verdict, EmbedVerdict};

/// Convenience result type for the embed crate.
pub type Result<T> = std::result::Result<T, EmbedError>;

use std::sync::Arc;

use tracing::{debug, info, warn};

use metasearch_core::Slot;

use crate::cancel::LoadCancel;
use crate::error::EmbedError;
use crate::fetch::{fetch, EmbedOutcome, FetchConfig};

/// One panel load to run in the background.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub slot: Slot,
    /// Generation of the slot's [`LoadCancel`] when the load was requested.
    pub generation: u64,
    pub url: String,
}

/// Result of a background load, tagged so stale ones can be discarded.
#[derive(Debug)]
pub struct LoadResult {
    pub slot: Slot,
    pub generation: u64,
    pub outcome: crate::Result<EmbedOutcome>,
}

/// Start `request` on the rayon pool and hand the result to `on_done`.
///
/// Fire-and-forget: nothing waits on the load, there is no retry, and
/// loads for different slots complete in any order.
pub fn spawn_load<F>(request: LoadRequest, cancel: Arc<LoadCancel>, config: FetchConfig, on_done: F)
where
    F: FnOnce(LoadResult) + Send + 'static,
{
    rayon::spawn(move || {
        let LoadRequest {
            slot,
            generation,
            url,
        } = request;
        let outcome = fetch(&url, &cancel, generation, &config);
        match &outcome {
            Ok(o) => info!(
                panel = slot.number(),
                status = o.status,
                ms = o.elapsed.as_millis() as u64,
                "Panel {} loaded",
                slot
            ),
            Err(EmbedError::Cancelled) => debug!(panel = slot.number(), "Panel load cancelled"),
            Err(e) => warn!(
                "Panel {slot} failed to load: {e}. Users can still use the \"Open directly\" link."
            ),
        }
        on_done(LoadResult {
            slot,
            generation,
            outcome,
        });
    });
}

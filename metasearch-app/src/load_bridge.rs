use std::sync::mpsc;
use std::sync::Arc;

use eframe::egui;
use tracing::debug;

use metasearch_core::Slot;
use metasearch_embed::{spawn_load, FetchConfig, LoadCancel, LoadRequest, LoadResult};

/// Hands panel URLs to background loads and collects their results on the
/// UI thread. Each slot has its own cancel generation, so a newer load for a
/// slot silently supersedes the older one.
pub(crate) struct LoadBridge {
    /// Woken when a load finishes. `None` when running headless.
    ctx: Option<egui::Context>,
    tx: mpsc::Sender<LoadResult>,
    rx: mpsc::Receiver<LoadResult>,
    cancels: [Arc<LoadCancel>; 3],
    config: FetchConfig,
    enabled: bool,
}

impl LoadBridge {
    pub(crate) fn new(ctx: Option<egui::Context>, config: FetchConfig, enabled: bool) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            ctx,
            tx,
            rx,
            cancels: Default::default(),
            config,
            enabled,
        }
    }

    pub(crate) fn enabled(&self) -> bool {
        self.enabled
    }

    /// Supersede any load in flight for `slot`.
    pub(crate) fn cancel(&self, slot: Slot) {
        self.cancels[slot.index()].advance();
    }

    /// Start loading `url` for `slot`, superseding the previous load.
    pub(crate) fn request(&self, slot: Slot, url: &str) {
        let cancel = &self.cancels[slot.index()];
        let generation = cancel.advance();
        debug!(panel = slot.number(), generation, url, "Requesting panel load");

        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        spawn_load(
            LoadRequest {
                slot,
                generation,
                url: url.to_string(),
            },
            Arc::clone(cancel),
            self.config.clone(),
            move |result| {
                let _ = tx.send(result);
                if let Some(ctx) = ctx {
                    ctx.request_repaint();
                }
            },
        );
    }

    /// Drain finished loads, dropping any that were superseded.
    pub(crate) fn poll(&self) -> Vec<LoadResult> {
        let mut fresh = Vec::new();
        while let Ok(result) = self.rx.try_recv() {
            if self.cancels[result.slot.index()].is_stale(result.generation) {
                debug!(
                    panel = result.slot.number(),
                    generation = result.generation,
                    "Dropping stale load result"
                );
                continue;
            }
            fresh.push(result);
        }
        fresh
    }
}

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation counter shared between the UI and in-flight loads of one panel.
///
/// A load records the generation it was started under; bumping the counter
/// makes every older load give up at its next checkpoint.
#[derive(Debug)]
pub struct LoadCancel {
    generation: AtomicU64,
}

impl LoadCancel {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
        }
    }

    /// Invalidate all loads started so far and return the new generation.
    pub fn advance(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// `true` if a load started under `generation` has been superseded.
    #[inline]
    pub fn is_stale(&self, generation: u64) -> bool {
        self.generation() != generation
    }
}

impl Default for LoadCancel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_marks_older_generations_stale() {
        let cancel = LoadCancel::new();
        let first = cancel.generation();
        assert!(!cancel.is_stale(first));
        let second = cancel.advance();
        assert_eq!(second, first + 1);
        assert!(cancel.is_stale(first));
        assert!(!cancel.is_stale(second));
    }
}

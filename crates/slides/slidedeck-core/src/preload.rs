//! Bookkeeping for best-effort image preloading.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PreloadStatus {
    Pending,
    /// Every image loaded successfully.
    Complete,
    /// Every image settled but at least one failed.
    Settled,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreloadTracker {
    total: usize,
    loaded: usize,
    failed: usize,
}

impl PreloadTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Number of images queued.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn record_load(&mut self) -> PreloadStatus {
        self.loaded += 1;
        self.status()
    }

    pub fn record_failure(&mut self) -> PreloadStatus {
        self.failed += 1;
        self.status()
    }

    pub fn status(&self) -> PreloadStatus {
        if self.loaded + self.failed < self.total {
            PreloadStatus::Pending
        } else if self.failed == 0 {
            PreloadStatus::Complete
        } else {
            PreloadStatus::Settled
        }
    }
}

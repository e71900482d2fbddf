use std::sync::Arc;

use parking_lot::Mutex;

use crate::canvas::CanvasHistory;
use crate::stroke::StrokeRef;

/// A canvas history shared by several independently tracked hands.
///
/// Each hand owns its own [`crate::StrokeEngine`] and
/// [`crate::PointerSmoother`]; only the committed history is shared, and
/// every mutation of it is serialized through this handle's lock.
#[derive(Debug, Clone, Default)]
pub struct SharedHistory {
    inner: Arc<Mutex<CanvasHistory>>,
}

impl SharedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to the history.
    pub fn with<R>(&self, f: impl FnOnce(&mut CanvasHistory) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn snapshot(&self) -> Vec<StrokeRef> {
        self.inner.lock().snapshot()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

//! Deferred repaint: a dirty flag plus one scheduled animation frame
//!
//! Several state updates in the same tick mark the line dirty once and are
//! painted together on the next frame.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
struct RepaintFlags {
    dirty: AtomicBool,
    scheduled: AtomicBool,
}

/// Coalesces repaint requests into at most one pending frame
#[derive(Debug, Clone, Default)]
pub struct RepaintScheduler {
    flags: Arc<RepaintFlags>,
}

impl RepaintScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark dirty; returns true when no frame is pending yet
    pub fn invalidate(&self) -> bool {
        self.flags.dirty.store(true, Ordering::Relaxed);
        !self.flags.scheduled.swap(true, Ordering::Relaxed)
    }

    /// Called from the frame; returns true when a paint is due
    pub fn take(&self) -> bool {
        self.flags.scheduled.store(false, Ordering::Relaxed);
        self.flags.dirty.swap(false, Ordering::Relaxed)
    }

    pub fn is_dirty(&self) -> bool {
        self.flags.dirty.load(Ordering::Relaxed)
    }

    pub fn is_scheduled(&self) -> bool {
        self.flags.scheduled.load(Ordering::Relaxed)
    }

    /// Paint on the next frame unless one is already pending.
    ///
    /// `paint` should read the latest state when it runs, not capture it.
    pub fn request(&self, paint: impl FnOnce() + 'static) {
        if !self.invalidate() {
            return;
        }

        let scheduler = self.clone();
        let frame = move || {
            if scheduler.take() {
                paint();
            }
        };
        if !schedule_frame(frame) {
            self.flags.scheduled.store(false, Ordering::Relaxed);
        }
    }
}

/// Run `callback` on the next animation frame; false if none could be requested
#[cfg(target_arch = "wasm32")]
pub fn schedule_frame(callback: impl FnOnce() + 'static) -> bool {
    use wasm_bindgen::{JsCast, closure::Closure};

    let Some(window) = web_sys::window() else {
        tracing::warn!("No window to schedule a repaint on");
        return false;
    };
    let callback = Closure::once_into_js(callback);
    match window.request_animation_frame(callback.unchecked_ref::<js_sys::Function>()) {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(?err, "requestAnimationFrame failed");
            false
        }
    }
}

/// Without a browser the frame runs immediately
#[cfg(not(target_arch = "wasm32"))]
pub fn schedule_frame(callback: impl FnOnce() + 'static) -> bool {
    callback();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_updates_coalesce_into_one_frame() {
        let scheduler = RepaintScheduler::new();
        assert!(scheduler.invalidate());
        assert!(!scheduler.invalidate());
        assert!(!scheduler.invalidate());
        assert!(scheduler.is_scheduled());

        assert!(scheduler.take());
        assert!(!scheduler.is_dirty());
        assert!(!scheduler.take());
    }

    #[test]
    fn test_request_paints_once_per_frame() {
        let scheduler = RepaintScheduler::new();
        let paints = Rc::new(Cell::new(0));

        let counter = paints.clone();
        scheduler.request(move || counter.set(counter.get() + 1));
        assert_eq!(paints.get(), 1);
        assert!(!scheduler.is_scheduled());

        let counter = paints.clone();
        scheduler.request(move || counter.set(counter.get() + 1));
        assert_eq!(paints.get(), 2);
    }
}

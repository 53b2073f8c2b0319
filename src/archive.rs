//! Single-slot color archive.
//!
//! Holds at most one color. Every operation completes after a fixed
//! simulated latency through the archive's [`Scheduler`], so callers see
//! the same timing they would against a remote store. There is no failure
//! path: an empty slot loads as `None`.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::color::SolidColor;
use crate::constants;
use crate::scheduler::Scheduler;

/// An explicitly constructed single-slot store.
///
/// Clones share the slot. The type is `!Send`; all access happens on the
/// UI thread and no locking is done.
#[derive(Clone)]
pub struct ColorArchive {
    slot: Rc<Cell<Option<SolidColor>>>,
    scheduler: Rc<dyn Scheduler>,
    latency: Duration,
}

impl ColorArchive {
    /// An empty archive completing after [`constants::ARCHIVE_LATENCY`].
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            slot: Rc::new(Cell::new(None)),
            scheduler,
            latency: constants::ARCHIVE_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The stored color, if any. Does not wait.
    pub fn stored(&self) -> Option<SolidColor> {
        self.slot.get()
    }

    /// Overwrite the slot with `color`; `on_saved` receives it after the
    /// latency.
    pub fn save(&self, color: SolidColor, on_saved: impl FnOnce(SolidColor) + 'static) {
        self.slot.set(Some(color));
        tracing::debug!(color = %color, "archive save scheduled");
        self.scheduler.schedule(
            self.latency,
            Box::new(move || {
                tracing::debug!(color = %color, "archive save completed");
                on_saved(color);
            }),
        );
    }

    /// Read the slot as it is now; `on_loaded` receives it after the
    /// latency. `None` means nothing has been saved yet.
    pub fn load(&self, on_loaded: impl FnOnce(Option<SolidColor>) + 'static) {
        let snapshot = self.slot.get();
        tracing::debug!(stored = snapshot.is_some(), "archive load scheduled");
        self.scheduler.schedule(
            self.latency,
            Box::new(move || {
                tracing::debug!(stored = snapshot.is_some(), "archive load completed");
                on_loaded(snapshot);
            }),
        );
    }
}

//! Cancellation token tied to a screen's lifetime.

use std::cell::Cell;
use std::rc::Rc;

/// Shared alive flag. Clones observe the same flag.
///
/// Deferred completions wrap their side effects with [`Lifetime::guard`] so
/// that nothing touches the screen's state after it has been dismissed.
#[derive(Debug, Clone)]
pub struct Lifetime {
    alive: Rc<Cell<bool>>,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifetime {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Ends the lifetime. Returns `false` if it had already ended.
    pub fn end(&self) -> bool {
        self.alive.replace(false)
    }

    /// Wrap `f` so it only runs while the lifetime is alive.
    pub fn guard<T: 'static>(&self, f: impl FnOnce(T) + 'static) -> impl FnOnce(T) + 'static {
        let alive = self.alive.clone();
        move |value| {
            if alive.get() {
                f(value);
            } else {
                tracing::trace!("dropping completion for a dismissed screen");
            }
        }
    }
}

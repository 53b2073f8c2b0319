//! Deferred work on the UI thread.
//!
//! The archive never blocks: it hands its completion to a [`Scheduler`]
//! which runs it later on the same thread. Inside a running Floem app that
//! is [`UiScheduler`]; headless hosts and tests drive a [`ManualScheduler`].

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

type Task = Box<dyn FnOnce()>;

/// Runs a task once `delay` has elapsed, on the UI thread.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Floem timer backed scheduler. Requires a running application.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiScheduler;

impl Scheduler for UiScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        floem::action::exec_after(delay, move |_| task());
    }
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    queue: Vec<Pending>,
}

/// A virtual clock. Nothing runs until [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time advanced so far.
    pub fn elapsed(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of tasks not yet run.
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Move the clock forward by `by`, running every task that falls due,
    /// earliest first. Tasks scheduled while advancing run too if they fall
    /// inside the window. Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.state.borrow().now + by;
        let mut ran = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }
        self.state.borrow_mut().now = target;
        ran
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut state = self.state.borrow_mut();
        let index = state
            .queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let pending = state.queue.swap_remove(index);
        // Tasks observe the clock at their own due time.
        state.now = state.now.max(pending.due);
        Some(pending.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.queue.push(Pending { due, seq, task });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, ManualScheduler) {
        (Rc::new(RefCell::new(Vec::new())), ManualScheduler::new())
    }

    #[test]
    fn nothing_runs_before_due() {
        let (log, sched) = recorder();
        let l = log.clone();
        sched.schedule(Duration::from_millis(700), Box::new(move || l.borrow_mut().push("a")));

        assert_eq!(sched.advance(Duration::from_millis(699)), 0);
        assert!(log.borrow().is_empty());
        assert_eq!(sched.advance(Duration::from_millis(1)), 1);
        assert_eq!(*log.borrow(), vec!["a"]);
        assert_eq!(sched.elapsed(), Duration::from_millis(700));
    }

    #[test]
    fn runs_in_due_then_insertion_order() {
        let (log, sched) = recorder();
        for (delay, name) in [(20, "late"), (10, "first"), (10, "second")] {
            let l = log.clone();
            sched.schedule(
                Duration::from_millis(delay),
                Box::new(move || l.borrow_mut().push(name)),
            );
        }
        assert_eq!(sched.pending(), 3);
        assert_eq!(sched.advance(Duration::from_millis(50)), 3);
        assert_eq!(*log.borrow(), vec!["first", "second", "late"]);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn nested_tasks_inside_window_run() {
        let (log, sched) = recorder();
        let l = log.clone();
        let inner = sched.clone();
        sched.schedule(
            Duration::from_millis(100),
            Box::new(move || {
                l.borrow_mut().push("outer");
                let l = l.clone();
                inner.schedule(
                    Duration::from_millis(100),
                    Box::new(move || l.borrow_mut().push("inner")),
                );
            }),
        );

        assert_eq!(sched.advance(Duration::from_millis(150)), 1);
        assert_eq!(sched.pending(), 1);
        assert_eq!(sched.advance(Duration::from_millis(50)), 1);
        assert_eq!(*log.borrow(), vec!["outer", "inner"]);
    }
}

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A single-threaded cooperative timer queue driving deferred state
/// transitions.
///
/// Every mutation in the shell runs synchronously on one thread; the
/// only suspension point is a one-shot task scheduled here (today: the
/// deferred `Closing -> Closed` commit). Time is a logical tick count
/// advanced explicitly by the caller, which keeps timer behavior exact
/// in tests.
///
/// Tasks are fire-and-forget: there is no cancellation, and two tasks
/// due at the same tick run in the order they were scheduled.
pub struct EventLoop<S> {
    now: u64,
    seq: u64,
    queue: BinaryHeap<Scheduled<S>>,
}

struct Scheduled<S> {
    due: u64,
    seq: u64,
    task: Box<dyn FnOnce(&mut S)>,
}

// Ordering is by (due, seq), inverted so the BinaryHeap pops the
// earliest task first. The task itself never participates in ordering.
impl<S> PartialEq for Scheduled<S> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<S> Eq for Scheduled<S> {}

impl<S> PartialOrd for Scheduled<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Scheduled<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due, other.seq).cmp(&(self.due, self.seq))
    }
}

impl<S> EventLoop<S> {
    pub fn new() -> Self {
        Self {
            now: 0,
            seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current logical time in ticks.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of tasks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Schedule `task` to run once `delay` ticks from now.
    pub fn schedule(&mut self, delay: u64, task: impl FnOnce(&mut S) + 'static) {
        let due = self.now.saturating_add(delay);
        let seq = self.seq;
        self.seq += 1;
        self.queue.push(Scheduled {
            due,
            seq,
            task: Box::new(task),
        });
    }

    /// Advance the clock by `ticks`, running every task that falls due.
    ///
    /// Tasks run to completion against `state` in due order; each one
    /// observes `now()` at its own due time.
    pub fn advance(&mut self, ticks: u64, state: &mut S) {
        let target = self.now.saturating_add(ticks);
        while self.queue.peek().is_some_and(|head| head.due <= target) {
            let Some(scheduled) = self.queue.pop() else {
                break;
            };
            self.now = scheduled.due;
            (scheduled.task)(state);
        }
        self.now = target;
    }
}

impl<S> Default for EventLoop<S> {
    fn default() -> Self {
        Self::new()
    }
}

//! Virtual clock and timer queue
//!
//! Stands in for `setTimeout`, `setInterval` and animation frames. Time only
//! moves when the owner calls [`Scheduler::pop_due`] or [`Scheduler::settle`],
//! which keeps every timed transition deterministic under test.

use tracing::trace;

/// Handle returned when a timer is scheduled, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct ScheduledTask<E> {
    id: TimerId,
    due_at: u64,
    order: u64,
    interval_ms: Option<u64>,
    event: E,
}

/// Snapshot of a pending timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: TimerId,
    pub due_at: u64,
    pub interval_ms: Option<u64>,
}

/// Timer queue driven by a virtual millisecond clock
///
/// Timers are ordered by `(due_at, insertion order)`, so two timers due at
/// the same instant fire in the order they were scheduled.
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now_ms: u64,
    next_id: u64,
    next_order: u64,
    queue: Vec<ScheduledTask<E>>,
}

impl<E: Clone> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            next_order: 0,
            queue: Vec::new(),
        }
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedules `event` to fire once after `delay_ms`
    pub fn schedule_once(&mut self, delay_ms: u64, event: E) -> TimerId {
        self.push(delay_ms, None, event)
    }

    /// Schedules `event` to fire every `period_ms` until cancelled
    ///
    /// A zero period is bumped to 1ms so an interval can never spin
    /// without the clock advancing.
    pub fn schedule_interval(&mut self, period_ms: u64, event: E) -> TimerId {
        let period_ms = period_ms.max(1);
        self.push(period_ms, Some(period_ms), event)
    }

    fn push(&mut self, delay_ms: u64, interval_ms: Option<u64>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due_at = self.now_ms.saturating_add(delay_ms);
        self.queue.push(ScheduledTask {
            id,
            due_at,
            order: self.next_order,
            interval_ms,
            event,
        });
        self.next_order += 1;
        trace!(timer = id.0, due_at, ?interval_ms, "timer scheduled");
        id
    }

    /// Cancels a pending timer. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|task| task.id != id);
        let removed = self.queue.len() != before;
        if removed {
            trace!(timer = id.0, "timer cancelled");
        }
        removed
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.queue.iter().any(|task| task.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Pending timers sorted by firing order
    pub fn pending(&self) -> Vec<PendingTimer> {
        let mut tasks: Vec<&ScheduledTask<E>> = self.queue.iter().collect();
        tasks.sort_by_key(|task| (task.due_at, task.order));
        tasks
            .into_iter()
            .map(|task| PendingTimer {
                id: task.id,
                due_at: task.due_at,
                interval_ms: task.interval_ms,
            })
            .collect()
    }

    fn next_index(&self, due_limit: u64) -> Option<usize> {
        self.queue
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_at <= due_limit)
            .min_by_key(|(_, task)| (task.due_at, task.order))
            .map(|(idx, _)| idx)
    }

    /// Pops the next timer due at or before `until`, moving the clock to its due time
    ///
    /// Interval timers are re-armed before the event is handed out, so the
    /// caller may cancel them while handling it.
    pub fn pop_due(&mut self, until: u64) -> Option<E> {
        let idx = self.next_index(until)?;
        let task = self.queue.remove(idx);
        if task.due_at > self.now_ms {
            self.now_ms = task.due_at;
        }

        if let Some(period) = task.interval_ms {
            self.queue.push(ScheduledTask {
                id: task.id,
                due_at: self.now_ms.saturating_add(period),
                order: self.next_order,
                interval_ms: task.interval_ms,
                event: task.event.clone(),
            });
            self.next_order += 1;
        }

        trace!(timer = task.id.0, now = self.now_ms, "timer fired");
        Some(task.event)
    }

    /// Moves the clock forward to `target` once all due timers have been drained
    pub fn settle(&mut self, target: u64) {
        if target > self.now_ms {
            self.now_ms = target;
        }
    }

    /// Advances by `delta_ms` and collects everything that fired
    ///
    /// Handy when timer handlers never schedule new timers. Owners that do
    /// schedule from handlers drive [`Scheduler::pop_due`] themselves.
    pub fn advance(&mut self, delta_ms: u64) -> Vec<E> {
        let target = self.now_ms.saturating_add(delta_ms);
        let mut fired = Vec::new();
        while let Some(event) = self.pop_due(target) {
            fired.push(event);
        }
        self.settle(target);
        fired
    }
}

/// Trailing-edge debouncer on top of [`Scheduler`]
///
/// Each trigger cancels the previous pending timer, so only the last trigger
/// within `wait_ms` fires.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait_ms: u64,
    pending: Option<TimerId>,
}

impl Debouncer {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    /// Restarts the wait and schedules `event` at its end
    pub fn trigger<E: Clone>(&mut self, scheduler: &mut Scheduler<E>, event: E) -> TimerId {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        let id = scheduler.schedule_once(self.wait_ms, event);
        self.pending = Some(id);
        id
    }

    /// Marks the pending timer as fired
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

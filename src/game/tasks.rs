//! Clock service: the deferred-task queue and the question countdown.
//!
//! Every "do X after Y milliseconds" step in the game goes through
//! [`TaskQueue`] instead of raw host timeouts, so a superseded step can be
//! cancelled and a cancelled step's firing is a guaranteed no-op. Time enters
//! as explicit `f64` millisecond timestamps (`performance.now()` in the
//! browser, synthetic in tests).

/// Deferred steps the engine schedules against wall clock time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Deferred {
    /// Chest-open animation finished; reveal the question and arm the countdown.
    RevealQuestion,
    /// Answer feedback dwell elapsed; resolve the question.
    FinishDwell { correct: bool },
    /// Post-resolution pause elapsed; resume scrolling.
    ResumeRunning,
}

/// Handle for cancelling a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskId(u64);

struct Scheduled {
    id: TaskId,
    due_ms: f64,
    action: Deferred,
    cancelled: bool,
}

/// Ordered queue of pending deferred actions.
#[derive(Default)]
pub struct TaskQueue {
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire `delay_ms` after `now_ms`.
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, action: Deferred) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.pending.push(Scheduled {
            id,
            due_ms: now_ms + delay_ms,
            action,
            cancelled: false,
        });
        log::trace!("scheduled {:?} as {:?} (+{delay_ms}ms)", action, id);
        id
    }

    /// Cancel a task. Unknown or already-fired ids are a no-op, so double
    /// cancellation is harmless.
    pub fn cancel(&mut self, id: TaskId) {
        for task in &mut self.pending {
            if task.id == id {
                task.cancelled = true;
            }
        }
    }

    /// Cancel everything outstanding (phase teardown / restart).
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Remove and return the actions due at `now_ms`, oldest deadline first.
    /// Cancelled tasks are dropped without firing.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<Deferred> {
        let mut due: Vec<(f64, Deferred)> = Vec::new();
        self.pending.retain(|task| {
            if task.due_ms > now_ms {
                return true;
            }
            if !task.cancelled {
                due.push((task.due_ms, task.action));
            }
            false
        });
        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        due.into_iter().map(|(_, action)| action).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.iter().all(|t| t.cancelled)
    }
}

/// Per-question countdown. One live instance at most; dropped when an answer
/// is accepted, so expiry can only be observed while the question is open.
#[derive(Clone, Copy, Debug)]
pub struct CountdownTimer {
    deadline_ms: f64,
    duration_ms: f64,
}

impl CountdownTimer {
    pub fn new(now_ms: f64, duration_ms: f64) -> Self {
        Self {
            deadline_ms: now_ms + duration_ms,
            duration_ms,
        }
    }

    /// Remaining time in seconds, clamped at zero for display.
    pub fn remaining_secs(&self, now_ms: f64) -> f64 {
        ((self.deadline_ms - now_ms) / 1000.0).max(0.0)
    }

    pub fn expired(&self, now_ms: f64) -> bool {
        now_ms >= self.deadline_ms
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}

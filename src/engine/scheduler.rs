/// Timed task scheduling for the pet's animation loop
///
/// The pet never runs on a free-running clock. Every tick decides what
/// happens next and schedules exactly one follow-up task, either the next
/// animation tick or a resume after a pause. The host event loop asks the
/// scheduler for its deadline and sleeps until then.
use std::time::{Duration, Instant};

/// Work the host should hand back to the pet when its deadline passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Advance the walk animation by one frame
    Tick,
    /// Leave the paused state and continue walking
    Resume,
}

/// A task together with the delay after which it should run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub task: Task,
    pub delay: Duration,
}

impl Schedule {
    pub fn tick(delay: Duration) -> Self {
        Self {
            task: Task::Tick,
            delay,
        }
    }

    pub fn resume(delay: Duration) -> Self {
        Self {
            task: Task::Resume,
            delay,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingTask {
    task: Task,
    due: Instant,
}

/// Holds at most one pending task
#[derive(Debug)]
pub struct Scheduler {
    /// The single outstanding task, replaced on every schedule
    pending: Option<PendingTask>,

    /// Time when the scheduler was created
    start_time: Instant,

    /// Total tasks handed out
    fired_count: u64,
}

impl Scheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self {
            pending: None,
            start_time: Instant::now(),
            fired_count: 0,
        }
    }

    /// Schedule a task relative to `now`, replacing whatever was pending
    pub fn schedule_at(&mut self, schedule: Schedule, now: Instant) {
        if let Some(previous) = self.pending {
            log::trace!("Replacing pending {:?}", previous.task);
        }
        self.pending = Some(PendingTask {
            task: schedule.task,
            due: now + schedule.delay,
        });
    }

    /// Schedule a task relative to the current time
    pub fn schedule(&mut self, schedule: Schedule) {
        self.schedule_at(schedule, Instant::now());
    }

    /// Take the pending task if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<Task> {
        match self.pending {
            Some(pending) if pending.due <= now => {
                self.pending = None;
                self.fired_count += 1;
                Some(pending.task)
            }
            _ => None,
        }
    }

    /// Deadline of the pending task, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    /// Total number of tasks fired so far
    pub fn fired_count(&self) -> u64 {
        self.fired_count
    }

    /// Time since the scheduler was created
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

//! Scheduled deferred transitions ("fire at tick N").
//!
//! Replaces wall-clock timers: events are evaluated inside the tick loop,
//! and cancelling is clearing the schedule.

/// What a scheduled event does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Begin the next wave, or settle the mission if waves are exhausted.
    StartNextWave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub fire_at_tick: u64,
    pub action: ScheduledAction,
}

/// Pending deferred transitions, ordered by insertion.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pending: Vec<ScheduledEvent>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, fire_at_tick: u64, action: ScheduledAction) {
        self.pending.push(ScheduledEvent {
            fire_at_tick,
            action,
        });
    }

    /// Remove and return every event due at or before `tick`, in insertion order.
    pub fn take_due(&mut self, tick: u64) -> Vec<ScheduledAction> {
        let mut due = Vec::new();
        self.pending.retain(|event| {
            if event.fire_at_tick <= tick {
                due.push(event.action);
                false
            } else {
                true
            }
        });
        due
    }

    /// Drop every pending event.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Tick of the earliest pending event, if any.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|e| e.fire_at_tick).min()
    }
}

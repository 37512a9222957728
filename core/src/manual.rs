use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::time::Duration;

use crate::*;

#[derive(Debug)]
struct Entry {
    id: u64,
    seq: u64,
    due: Duration,
    period: Option<Duration>,
    event: TimerEvent,
}

#[derive(Debug, Default)]
struct Queue {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    entries: Vec<Entry>,
}

impl Queue {
    fn push(&mut self, delay: Duration, period: Option<Duration>, event: TimerEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let seq = self.bump_seq();
        self.entries.push(Entry {
            id,
            seq,
            due: self.now + delay,
            period,
            event,
        });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Takes the earliest entry due by `deadline`, re-arming it when it repeats.
    fn pop_due(&mut self, deadline: Duration) -> Option<TimerEvent> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= deadline)
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(pos, _)| pos)?;

        let due = self.entries[pos].due;
        self.now = due;
        let event = self.entries[pos].event;
        match self.entries[pos].period {
            Some(period) => {
                let seq = self.bump_seq();
                let entry = &mut self.entries[pos];
                entry.due = due + period;
                entry.seq = seq;
            }
            None => {
                self.entries.swap_remove(pos);
            }
        }
        Some(event)
    }

    fn cancel(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }
}

/// Virtual clock scheduler, time only moves when [`advance`](Self::advance) is called.
///
/// Clones share the same queue, so one clone can be handed to a [`GameController`] while another drives it.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

/// Cancels its timer when dropped.
#[derive(Debug)]
pub struct ManualHandle {
    id: u64,
    queue: Weak<RefCell<Queue>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().cancel(self.id);
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    /// Moves the clock forward by `by`, firing every timer that falls due in order.
    ///
    /// Returns how many events were delivered.
    pub fn advance(&self, controller: &mut GameController<ManualScheduler>, by: Duration) -> usize {
        let deadline = self.now() + by;
        let mut fired = 0;
        loop {
            let Some(event) = self.queue.borrow_mut().pop_due(deadline) else {
                break;
            };
            controller.fire(event);
            fired += 1;
        }
        self.queue.borrow_mut().now = deadline;
        fired
    }

    fn handle(&self, id: u64) -> ManualHandle {
        ManualHandle {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) -> ManualHandle {
        let id = self.queue.borrow_mut().push(delay, None, event);
        self.handle(id)
    }

    fn schedule_repeating(&mut self, period: Duration, event: TimerEvent) -> ManualHandle {
        // a zero period would never let the clock move past it
        let period = period.max(Duration::from_millis(1));
        let id = self.queue.borrow_mut().push(period, Some(period), event);
        self.handle(id)
    }
}

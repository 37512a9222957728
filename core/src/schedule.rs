use alloc::collections::BTreeMap;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Identity of a round, every timer is tagged with the generation that armed it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// Hides the whole board and starts the active phase.
    PreviewEnd,
    /// Hides a wrongly guessed tile again.
    HideTile(TileIndex),
    /// One countdown step.
    Tick,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerEvent {
    pub generation: Generation,
    pub kind: TimerKind,
}

/// Source of deferred callbacks.
///
/// Implementations deliver the scheduled [`TimerEvent`] back to
/// [`GameController::fire`](crate::GameController::fire) once it is due. Dropping the returned handle must
/// cancel the timer, that is the only cancellation path the controller uses.
pub trait Scheduler {
    type Handle;

    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) -> Self::Handle;

    fn schedule_repeating(&mut self, period: Duration, event: TimerEvent) -> Self::Handle;
}

/// Every live timer of one round.
///
/// Dropping the arena cancels all of them at once.
#[derive(Debug)]
pub(crate) struct RoundTimers<H> {
    preview: Option<H>,
    countdown: Option<H>,
    hides: BTreeMap<TileIndex, H>,
}

impl<H> RoundTimers<H> {
    pub(crate) fn new() -> Self {
        Self {
            preview: None,
            countdown: None,
            hides: BTreeMap::new(),
        }
    }

    pub(crate) fn set_preview(&mut self, handle: H) {
        self.preview = Some(handle);
    }

    pub(crate) fn clear_preview(&mut self) {
        self.preview = None;
    }

    pub(crate) fn set_countdown(&mut self, handle: H) {
        self.countdown = Some(handle);
    }

    pub(crate) fn has_countdown(&self) -> bool {
        self.countdown.is_some()
    }

    pub(crate) fn set_hide(&mut self, index: TileIndex, handle: H) {
        self.hides.insert(index, handle);
    }

    pub(crate) fn clear_hide(&mut self, index: TileIndex) {
        self.hides.remove(&index);
    }

    pub(crate) fn pending(&self) -> usize {
        usize::from(self.preview.is_some()) + usize::from(self.countdown.is_some()) + self.hides.len()
    }

    /// Cancels everything, used once a round reaches a terminal phase.
    pub(crate) fn cancel_all(&mut self) {
        self.preview = None;
        self.countdown = None;
        self.hides.clear();
    }
}

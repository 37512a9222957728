use core::time::Duration;
use gloo::timers::callback::{Interval, Timeout};
use shape_memory_core::{Scheduler, TimerEvent};
use yew::html::Scope;

use crate::game::{GameView, Msg};

/// Browser timers, each due event is posted back to the component as [`Msg::Timer`].
pub(crate) struct GlooScheduler {
    link: Scope<GameView>,
}

impl GlooScheduler {
    pub(crate) fn new(link: Scope<GameView>) -> Self {
        Self { link }
    }
}

/// Dropping either variant clears the browser timer.
#[allow(dead_code)]
pub(crate) enum TimerHandle {
    Timeout(Timeout),
    Interval(Interval),
}

fn millis(duration: Duration) -> u32 {
    duration.as_millis().try_into().unwrap_or(u32::MAX)
}

impl Scheduler for GlooScheduler {
    type Handle = TimerHandle;

    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        let link = self.link.clone();
        TimerHandle::Timeout(Timeout::new(millis(delay), move || {
            link.send_message(Msg::Timer(event))
        }))
    }

    fn schedule_repeating(&mut self, period: Duration, event: TimerEvent) -> TimerHandle {
        let link = self.link.clone();
        TimerHandle::Interval(Interval::new(millis(period), move || {
            link.send_message(Msg::Timer(event))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_saturates() {
        assert_eq!(millis(Duration::from_millis(2500)), 2500);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}

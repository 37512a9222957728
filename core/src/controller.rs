use crate::*;

/// Owner of the running round and every timer it armed.
///
/// All mutation goes through [`start_round`](Self::start_round), [`reveal_tile`](Self::reveal_tile) and
/// [`fire`](Self::fire). Timers belong to the round that scheduled them: replacing the round drops their handles,
/// and events from an older generation that still get delivered are ignored. Dropping the controller cancels
/// everything that is still pending.
pub struct GameController<S: Scheduler> {
    scheduler: S,
    timing: Timing,
    seed: u64,
    level: Level,
    round: Round,
    timers: RoundTimers<S::Handle>,
}

impl<S: Scheduler> GameController<S> {
    /// Creates the controller and starts the first round right away.
    pub fn new(scheduler: S, seed: u64, level: Level) -> Self {
        Self::with_timing(scheduler, seed, level, Timing::default())
    }

    pub fn with_timing(scheduler: S, seed: u64, level: Level, timing: Timing) -> Self {
        let generation = Generation(1);
        let layout = RandomRoundGenerator::new(round_seed(seed, generation)).generate();
        let mut controller = Self {
            scheduler,
            timing,
            seed,
            level,
            round: Round::new(layout, level, generation),
            timers: RoundTimers::new(),
        };
        controller.arm_round();
        controller
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Number of timers the current round still holds.
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Replaces the current round with a freshly shuffled one, `None` keeps the selected level.
    pub fn start_round(&mut self, level: Option<Level>) {
        let generation = self.round.generation().next();
        let layout = RandomRoundGenerator::new(round_seed(self.seed, generation)).generate();
        self.start_round_with_layout(layout, level);
    }

    /// Replaces the current round with one played on a given layout.
    pub fn start_round_with_layout(&mut self, layout: RoundLayout, level: Option<Level>) {
        if let Some(level) = level {
            self.level = level;
        }

        // drop the old generation before anything new is armed
        self.timers = RoundTimers::new();
        let generation = self.round.generation().next();
        self.round = Round::new(layout, self.level, generation);
        self.arm_round();
    }

    /// Handles a click on a tile, anything that is not a valid move is ignored.
    pub fn reveal_tile(&mut self, index: TileIndex) -> RevealOutcome {
        let outcome = self.round.reveal(index);
        match outcome {
            RevealOutcome::Mistake => {
                let event = self.event(TimerKind::HideTile(index));
                let handle = self.scheduler.schedule_once(self.timing.mistake_hide, event);
                self.timers.set_hide(index, handle);
            }
            RevealOutcome::Won => self.timers.cancel_all(),
            RevealOutcome::Solved | RevealOutcome::NoChange => {}
        }
        outcome
    }

    /// Delivers a due timer, returns whether the round changed.
    pub fn fire(&mut self, event: TimerEvent) -> bool {
        if event.generation != self.round.generation() {
            log::trace!(
                "dropping {:?} from round {:?}, current is {:?}",
                event.kind,
                event.generation,
                self.round.generation()
            );
            return false;
        }

        match event.kind {
            TimerKind::PreviewEnd => {
                self.timers.clear_preview();
                let updated = self.round.end_preview();
                if updated && self.level.config().countdown == CountdownStart::AfterPreview {
                    self.start_countdown();
                }
                updated
            }
            TimerKind::HideTile(index) => {
                self.timers.clear_hide(index);
                let updated = self.round.hide(index);
                if !updated {
                    log::trace!("suppressed hide of tile {}", index);
                }
                updated
            }
            TimerKind::Tick => {
                let updated = self.round.tick();
                if self.round.is_finished() {
                    self.timers.cancel_all();
                }
                updated
            }
        }
    }

    fn arm_round(&mut self) {
        let config = self.level.config();
        log::debug!(
            "round {:?} started: level {}, target {:?}",
            self.round.generation(),
            self.level,
            self.round.target()
        );

        let event = self.event(TimerKind::PreviewEnd);
        let handle = self.scheduler.schedule_once(config.preview, event);
        self.timers.set_preview(handle);

        if config.countdown == CountdownStart::AtRoundStart {
            self.start_countdown();
        }
    }

    fn start_countdown(&mut self) {
        if self.timers.has_countdown() {
            return;
        }
        let event = self.event(TimerKind::Tick);
        let handle = self.scheduler.schedule_repeating(self.timing.tick, event);
        self.timers.set_countdown(handle);
    }

    fn event(&self, kind: TimerKind) -> TimerEvent {
        TimerEvent {
            generation: self.round.generation(),
            kind,
        }
    }
}

/// Per-round seed, consecutive rounds get unrelated boards while the whole sequence follows from one seed.
fn round_seed(seed: u64, generation: Generation) -> u64 {
    seed ^ generation.0.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

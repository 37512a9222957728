use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a round.
///
/// Transitions:
/// - Preview -> Active
/// - Preview -> TimedOutEnded (only when the clock already runs during the preview)
/// - Active -> WonEnded
/// - Active -> TimedOutEnded
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Preview,
    Active,
    WonEnded,
    TimedOutEnded,
}

impl RoundPhase {
    pub const fn is_preview(self) -> bool {
        matches!(self, Self::Preview)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::WonEnded | Self::TimedOutEnded)
    }

    pub const fn result(self) -> Option<RoundResult> {
        match self {
            Self::WonEnded => Some(RoundResult::Won),
            Self::TimedOutEnded => Some(RoundResult::TimedOut),
            Self::Preview | Self::Active => None,
        }
    }
}

impl Default for RoundPhase {
    fn default() -> Self {
        Self::Preview
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Won,
    TimedOut,
}

/// State of one round, replaced wholesale when a new round starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    layout: RoundLayout,
    tiles: Array2<TileFlags>,
    score: TileCount,
    time_remaining: u32,
    phase: RoundPhase,
    level: Level,
    generation: Generation,
}

impl Round {
    pub fn new(layout: RoundLayout, level: Level, generation: Generation) -> Self {
        let size = layout.size();
        Self {
            layout,
            tiles: Array2::from_elem(size, TileFlags::REVEALED),
            score: 0,
            time_remaining: level.config().round_secs,
            phase: Default::default(),
            level,
            generation,
        }
    }

    pub fn layout(&self) -> &RoundLayout {
        &self.layout
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn target(&self) -> Shape {
        self.layout.target()
    }

    pub fn target_count(&self) -> TileCount {
        self.layout.target_count()
    }

    pub fn score(&self) -> TileCount {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn shape_at(&self, index: TileIndex) -> Shape {
        self.layout.shape_at(index)
    }

    pub fn flags_at(&self, index: TileIndex) -> TileFlags {
        self.tiles[index.to_nd_index()]
    }

    pub fn is_revealed(&self, index: TileIndex) -> bool {
        self.flags_at(index).is_revealed()
    }

    pub fn is_solved(&self, index: TileIndex) -> bool {
        self.flags_at(index).is_solved()
    }

    pub fn all_revealed(&self) -> bool {
        self.tiles.iter().all(|flags| flags.is_revealed())
    }

    pub fn solved_count(&self) -> usize {
        self.tiles.iter().filter(|flags| flags.is_solved()).count()
    }

    /// Presentation of a tile, wrong guesses are not flagged while the whole board is showing.
    pub fn tile_view(&self, index: TileIndex) -> TileView {
        let flags = self.flags_at(index);
        if flags.is_solved() {
            TileView::Correct
        } else if flags.is_revealed() {
            if self.shape_at(index) != self.target() && !self.all_revealed() {
                TileView::Wrong
            } else {
                TileView::Revealed
            }
        } else {
            TileView::Hidden
        }
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            board: self.layout.tiles().to_vec(),
            revealed: self.tiles.iter().map(|flags| flags.is_revealed()).collect(),
            solved: self.tiles.iter().map(|flags| flags.is_solved()).collect(),
            target: self.target(),
            target_count: self.target_count(),
            score: self.score,
            time_remaining: self.time_remaining,
            phase: self.phase,
            level: self.level,
        }
    }

    pub(crate) fn reveal(&mut self, index: TileIndex) -> RevealOutcome {
        use RevealOutcome::*;

        let Ok(index) = self.layout.validate_index(index) else {
            log::trace!("ignoring reveal of out of range tile {}", index);
            return NoChange;
        };
        if self.phase.is_finished() {
            return NoChange;
        }

        let flags = &mut self.tiles[index.to_nd_index()];
        if flags.is_revealed() || flags.is_solved() {
            return NoChange;
        }
        flags.insert(TileFlags::REVEALED);

        if self.layout.shape_at(index) != self.layout.target() {
            return Mistake;
        }

        flags.insert(TileFlags::SOLVED);
        self.score = self.score.saturating_add(1);
        if self.score == self.target_count() {
            self.end(RoundPhase::WonEnded);
            Won
        } else {
            Solved
        }
    }

    /// Hides every unsolved tile and starts the active phase.
    pub(crate) fn end_preview(&mut self) -> bool {
        if !self.phase.is_preview() {
            return false;
        }
        for flags in self.tiles.iter_mut() {
            if !flags.is_solved() {
                flags.remove(TileFlags::REVEALED);
            }
        }
        self.phase = RoundPhase::Active;
        log::debug!("round {:?} active", self.generation);
        true
    }

    pub(crate) fn hide(&mut self, index: TileIndex) -> bool {
        if self.phase.is_finished() || self.layout.validate_index(index).is_err() {
            return false;
        }
        let flags = &mut self.tiles[index.to_nd_index()];
        if flags.is_solved() || !flags.is_revealed() {
            return false;
        }
        flags.remove(TileFlags::REVEALED);
        true
    }

    pub(crate) fn tick(&mut self) -> bool {
        if self.phase.is_finished() {
            return false;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.end(RoundPhase::TimedOutEnded);
        }
        true
    }

    fn end(&mut self, phase: RoundPhase) {
        if self.phase.is_finished() {
            return;
        }
        self.phase = phase;
        log::debug!(
            "round {:?} ended: {:?}, score {}/{}, {}s left",
            self.generation,
            phase,
            self.score,
            self.target_count(),
            self.time_remaining
        );
    }
}

/// Immutable copy of everything the view needs to draw a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub board: Vec<Shape>,
    pub revealed: Vec<bool>,
    pub solved: Vec<bool>,
    pub target: Shape,
    pub target_count: TileCount,
    pub score: TileCount,
    pub time_remaining: u32,
    pub phase: RoundPhase,
    pub level: Level,
}

impl RoundSnapshot {
    pub fn result(&self) -> Option<RoundResult> {
        self.phase.result()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use Shape::*;

    /// Stripes of five, row `r` holds `Shape::ALL[r]`.
    pub(crate) fn striped_layout(target: Shape) -> RoundLayout {
        let tiles: Vec<Shape> = Shape::ALL
            .iter()
            .flat_map(|&shape| core::iter::repeat_n(shape, 5))
            .collect();
        RoundLayout::from_tiles(&tiles, target).unwrap()
    }

    fn active_round(target: Shape) -> Round {
        let mut round = Round::new(striped_layout(target), Level::Easy, Generation(1));
        assert!(round.end_preview());
        round
    }

    #[test]
    fn new_round_starts_in_preview_fully_revealed() {
        let round = Round::new(striped_layout(Circle), Level::Medium, Generation(1));

        assert_eq!(round.phase(), RoundPhase::Preview);
        assert!(round.all_revealed());
        assert_eq!(round.solved_count(), 0);
        assert_eq!(round.score(), 0);
        assert_eq!(round.time_remaining(), 30);
        assert_eq!(round.target_count(), 5);
    }

    #[test]
    fn preview_clicks_are_ignored() {
        let mut round = Round::new(striped_layout(Circle), Level::Easy, Generation(1));

        assert_eq!(round.reveal(0), RevealOutcome::NoChange);
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn end_preview_hides_everything() {
        let round = active_round(Circle);

        assert_eq!(round.phase(), RoundPhase::Active);
        assert!((0..TILE_COUNT).all(|i| !round.is_revealed(i)));
    }

    #[test]
    fn reveal_target_solves_and_scores() {
        let mut round = active_round(Triangle);

        assert_eq!(round.reveal(5), RevealOutcome::Solved);
        assert!(round.is_revealed(5));
        assert!(round.is_solved(5));
        assert_eq!(round.score(), 1);
    }

    #[test]
    fn reveal_non_target_is_a_mistake() {
        let mut round = active_round(Triangle);

        assert_eq!(round.reveal(0), RevealOutcome::Mistake);
        assert!(round.is_revealed(0));
        assert!(!round.is_solved(0));
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn repeated_and_out_of_range_reveals_change_nothing() {
        let mut round = active_round(Triangle);
        round.reveal(5);
        round.reveal(0);
        let before = round.clone();

        assert_eq!(round.reveal(5), RevealOutcome::NoChange);
        assert_eq!(round.reveal(0), RevealOutcome::NoChange);
        assert_eq!(round.reveal(TILE_COUNT), RevealOutcome::NoChange);
        assert_eq!(round.reveal(u8::MAX), RevealOutcome::NoChange);
        assert_eq!(round, before);
    }

    #[test]
    fn last_target_wins_immediately() {
        let mut round = active_round(Star);
        for index in 20..24 {
            assert_eq!(round.reveal(index), RevealOutcome::Solved);
        }
        assert_eq!(round.time_remaining(), 45);

        assert_eq!(round.reveal(24), RevealOutcome::Won);
        assert_eq!(round.phase(), RoundPhase::WonEnded);
        assert_eq!(round.time_remaining(), 45);
        assert_eq!(round.reveal(0), RevealOutcome::NoChange);
    }

    #[test]
    fn tick_times_out_and_stops_at_zero() {
        let mut round = active_round(Star);
        while round.time_remaining() > 1 {
            assert!(round.tick());
        }

        assert!(round.tick());
        assert_eq!(round.phase(), RoundPhase::TimedOutEnded);
        assert_eq!(round.time_remaining(), 0);
        assert!(!round.tick());
        assert_eq!(round.time_remaining(), 0);
    }

    #[test]
    fn hide_skips_solved_and_finished() {
        let mut round = active_round(Diamond);
        round.reveal(0);
        round.reveal(15);

        assert!(!round.hide(15));
        assert!(round.hide(0));
        assert!(!round.hide(0));

        round.reveal(1);
        for index in 16..20 {
            round.reveal(index);
        }
        assert!(round.is_finished());
        assert!(!round.hide(1));
        assert!(round.is_revealed(1));
    }

    #[test]
    fn wrong_classification_is_suppressed_during_preview() {
        let mut round = Round::new(striped_layout(Circle), Level::Easy, Generation(1));
        assert_eq!(round.tile_view(10), TileView::Revealed);

        round.end_preview();
        assert_eq!(round.tile_view(10), TileView::Hidden);
        round.reveal(10);
        round.reveal(0);
        assert_eq!(round.tile_view(10), TileView::Wrong);
        assert_eq!(round.tile_view(0), TileView::Correct);
        assert_eq!(round.tile_view(1), TileView::Hidden);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut round = active_round(Square);
        round.reveal(10);
        round.reveal(3);
        let snapshot = round.snapshot();

        assert_eq!(snapshot.board.len(), usize::from(TILE_COUNT));
        assert_eq!(snapshot.board[10], Square);
        assert!(snapshot.revealed[10] && snapshot.solved[10]);
        assert!(snapshot.revealed[3] && !snapshot.solved[3]);
        assert_eq!(snapshot.score, 1);
        assert_eq!(
            usize::from(snapshot.score),
            snapshot.solved.iter().filter(|&&solved| solved).count()
        );
        assert_eq!(snapshot.result(), None);
    }
}

use core::fmt;
use core::str::FromStr;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// When the countdown starts ticking relative to the preview.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownStart {
    AfterPreview,
    AtRoundStart,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub preview: Duration,
    pub round_secs: u32,
    pub countdown: CountdownStart,
}

impl LevelConfig {
    pub const fn new(preview_ms: u64, round_secs: u32, countdown: CountdownStart) -> Self {
        Self {
            preview: Duration::from_millis(preview_ms),
            round_secs,
            countdown,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Easy,
    Medium,
    Hard,
    /// Fixed one minute round without difficulty selection, the clock runs during the preview too.
    Classic,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Easy, Level::Medium, Level::Hard, Level::Classic];

    pub const fn config(self) -> LevelConfig {
        use CountdownStart::*;
        use Level::*;
        match self {
            Easy => LevelConfig::new(5000, 45, AfterPreview),
            Medium => LevelConfig::new(5000, 30, AfterPreview),
            Hard => LevelConfig::new(2500, 30, AfterPreview),
            Classic => LevelConfig::new(5000, 60, AtRoundStart),
        }
    }

    pub const fn name(self) -> &'static str {
        use Level::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
            Classic => "classic",
        }
    }

    pub const fn label(self) -> &'static str {
        use Level::*;
        match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
            Classic => "Classic",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::Easy
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Level::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownLevel)
    }
}

/// Delays that do not depend on the level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// How long a wrongly guessed tile stays visible.
    pub mistake_hide: Duration,
    /// Countdown granularity, one second is taken off per tick.
    pub tick: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            mistake_hide: Duration::from_millis(2000),
            tick: Duration::from_millis(1000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_table_matches_difficulty_settings() {
        assert_eq!(Level::Easy.config().preview, Duration::from_millis(5000));
        assert_eq!(Level::Easy.config().round_secs, 45);
        assert_eq!(Level::Medium.config().round_secs, 30);
        assert_eq!(Level::Hard.config().preview, Duration::from_millis(2500));
        assert_eq!(Level::Classic.config().round_secs, 60);
        assert_eq!(Level::Classic.config().countdown, CountdownStart::AtRoundStart);
    }

    #[test]
    fn level_names_round_trip_through_from_str() {
        for level in Level::ALL {
            assert_eq!(level.name().parse::<Level>(), Ok(level));
        }
        assert_eq!("HARD".parse::<Level>(), Ok(Level::Hard));
        assert_eq!("nightmare".parse::<Level>(), Err(GameError::UnknownLevel));
    }
}

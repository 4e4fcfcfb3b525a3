//! Scoring module - line-clear points, level progression and gravity speed
//!
//! Rules:
//! - A clear of `n` lines is worth `n * 100 * level`, using the level in effect
//!   before the clear.
//! - Level is `lines / 10 + 1`; it only moves up because lines only accumulate.
//! - Gravity starts at 1000ms per row and speeds up by 100ms per level, floored at 100ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, POINTS_PER_LINE,
    START_LEVEL,
};

/// Points for clearing `lines` lines at `level`
pub fn calculate_line_score(lines: u32, level: u32) -> u64 {
    (lines as u64)
        .saturating_mul(POINTS_PER_LINE)
        .saturating_mul(level as u64)
}

/// Level reached after `total_lines` cleared lines
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval for a level (in milliseconds)
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(START_LEVEL).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Outcome of applying one line-clear pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearResult {
    pub lines: u32,
    pub points: u64,
    /// New level, if this clear crossed a level boundary
    pub level_up: Option<u32>,
}

/// Running score, line count and level of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    score: u64,
    lines: u32,
    level: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: START_LEVEL,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Credit a pass that removed `cleared` lines. A zero-line pass changes nothing.
    pub fn apply_clear(&mut self, cleared: u32) -> ClearResult {
        if cleared == 0 {
            return ClearResult {
                lines: 0,
                points: 0,
                level_up: None,
            };
        }

        let points = calculate_line_score(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);

        let level = calculate_level(self.lines);
        let level_up = (level > self.level).then_some(level);
        self.level = level;

        ClearResult {
            lines: cleared,
            points,
            level_up,
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

//! Render-time clock
//!
//! The footer year is the only value computed at render time. It is read
//! through this trait so tests can pin it.

use chrono::{Datelike, Local};

pub trait Clock {
    /// Current calendar year.
    fn year(&self) -> i32;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn year(&self) -> i32 {
        Local::now().year()
    }
}

/// A clock stuck in one year (`--year`, tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    year: i32,
}

impl FixedClock {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Clock for FixedClock {
    fn year(&self) -> i32 {
        self.year
    }
}

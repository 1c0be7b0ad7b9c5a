//! Scheduling settings: working days, per-day configuration, break rules.
//!
//! # Break Normalization
//!
//! Two legacy break shapes exist in stored settings documents:
//!
//! 1. `{ startAfterPeriod, minutes }` — the break occupies the single
//!    period immediately following `startAfterPeriod`
//! 2. `{ startPeriod, length }` — the break occupies `length` periods
//!    beginning at `startPeriod`
//!
//! Both convert to one canonical [`BreakWindow`] at ingestion, so the
//! placement loop only ever evaluates a single "is period P a break"
//! predicate. A rule from which neither shape yields a positive length
//! is disabled — never an error.

use serde::{Deserialize, Serialize};

/// Default number of periods per working day.
pub const DEFAULT_PERIODS: u32 = 6;

/// A break rule as authored in settings documents.
///
/// Carries both legacy shapes; [`BreakRule::normalize`] converts to the
/// canonical form. When both shapes are present, `startAfterPeriod` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakRule {
    /// Break starts after this period (shape 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_after_period: Option<u32>,
    /// Break duration in minutes (shape 1); only its positivity matters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    /// First period of the break (shape 2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_period: Option<u32>,
    /// Number of periods the break occupies (shape 2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

impl BreakRule {
    /// Shape 1: a one-period break after `start_after_period`.
    pub fn after_period(start_after_period: u32, minutes: u32) -> Self {
        Self {
            start_after_period: Some(start_after_period),
            minutes: Some(minutes),
            ..Self::default()
        }
    }

    /// Shape 2: a break of `length` periods starting at `start_period`.
    pub fn at_period(start_period: u32, length: u32) -> Self {
        Self {
            start_period: Some(start_period),
            length: Some(length),
            ..Self::default()
        }
    }

    /// Converts to the canonical window.
    ///
    /// "After period N" means the break occupies period N+1, always one
    /// period long. The positional shape keeps its length as given.
    pub fn normalize(&self) -> BreakWindow {
        if let Some(after) = self.start_after_period {
            if self.minutes.unwrap_or(0) > 0 {
                return BreakWindow::new(after + 1, 1);
            }
        } else if let Some(start) = self.start_period {
            let length = self.length.unwrap_or(0);
            if length > 0 {
                return BreakWindow::new(start, length);
            }
        }
        BreakWindow::disabled()
    }
}

/// Canonical break representation: `length` periods starting at `start`.
///
/// `start == 0` means disabled (periods are 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakWindow {
    start: u32,
    length: u32,
}

impl BreakWindow {
    /// Creates a window covering `[start, start + length)`.
    pub const fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// A window that never matches.
    pub const fn disabled() -> Self {
        Self::new(0, 0)
    }

    /// Whether this window is disabled.
    pub fn is_disabled(&self) -> bool {
        self.start == 0 || self.length == 0
    }

    /// Whether `period` falls inside this break.
    #[inline]
    pub fn contains(&self, period: u32) -> bool {
        self.start > 0 && period >= self.start && period < self.start + self.length
    }
}

/// Per-day scheduling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayConfig {
    /// Day number, 1=Monday .. 7=Sunday.
    pub day: u8,
    /// Teaching start, "HH:MM".
    #[serde(default)]
    pub start: String,
    /// Teaching end, "HH:MM".
    #[serde(default)]
    pub end: String,
    /// Length of one period in minutes.
    #[serde(default = "default_period_minutes")]
    pub period_minutes: u32,
    /// Number of periods in this day.
    #[serde(default = "default_periods")]
    pub periods: u32,
    /// Morning break rule, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tea_break: Option<BreakRule>,
    /// Midday break rule, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_break: Option<BreakRule>,
}

fn default_period_minutes() -> u32 {
    60
}

fn default_periods() -> u32 {
    DEFAULT_PERIODS
}

impl DayConfig {
    /// Creates a day configuration with default periods and no breaks.
    pub fn new(day: u8) -> Self {
        Self {
            day,
            start: String::new(),
            end: String::new(),
            period_minutes: default_period_minutes(),
            periods: DEFAULT_PERIODS,
            tea_break: None,
            lunch_break: None,
        }
    }

    /// Sets the teaching hours ("HH:MM" clock strings).
    pub fn with_hours(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start = start.into();
        self.end = end.into();
        self
    }

    /// Sets the period count.
    pub fn with_periods(mut self, periods: u32) -> Self {
        self.periods = periods;
        self
    }

    /// Sets the period length in minutes.
    pub fn with_period_minutes(mut self, minutes: u32) -> Self {
        self.period_minutes = minutes;
        self
    }

    /// Sets the tea break rule.
    pub fn with_tea_break(mut self, rule: BreakRule) -> Self {
        self.tea_break = Some(rule);
        self
    }

    /// Sets the lunch break rule.
    pub fn with_lunch_break(mut self, rule: BreakRule) -> Self {
        self.lunch_break = Some(rule);
        self
    }

    /// Normalized break windows (tea, lunch). Disabled when absent.
    pub fn break_windows(&self) -> [BreakWindow; 2] {
        [
            self.tea_break
                .as_ref()
                .map_or(BreakWindow::disabled(), BreakRule::normalize),
            self.lunch_break
                .as_ref()
                .map_or(BreakWindow::disabled(), BreakRule::normalize),
        ]
    }

    /// Teaching start as minutes from midnight, if parseable.
    pub fn start_minutes(&self) -> Option<u32> {
        parse_clock(&self.start)
    }

    /// Teaching end as minutes from midnight, if parseable.
    pub fn end_minutes(&self) -> Option<u32> {
        parse_clock(&self.end)
    }
}

/// Parses an "HH:MM" clock string into minutes from midnight.
pub fn parse_clock(clock: &str) -> Option<u32> {
    let (h, m) = clock.split_once(':')?;
    let hours: u32 = h.trim().parse().ok()?;
    let minutes: u32 = m.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Global scheduling settings: the working week and its day configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Ordered working-day numbers (1=Monday .. 7=Sunday).
    pub working_days: Vec<u8>,
    /// One configuration per working day.
    #[serde(default)]
    pub day_config: Vec<DayConfig>,
}

impl Settings {
    /// Creates settings with the default Monday–Friday week.
    pub fn new() -> Self {
        Self {
            working_days: vec![1, 2, 3, 4, 5],
            day_config: Vec::new(),
        }
    }

    /// Sets the working days.
    pub fn with_working_days(mut self, days: Vec<u8>) -> Self {
        self.working_days = days;
        self
    }

    /// Adds a day configuration.
    pub fn with_day(mut self, config: DayConfig) -> Self {
        self.day_config.push(config);
        self
    }

    /// Finds the configuration for a day.
    pub fn day_config_of(&self, day: u8) -> Option<&DayConfig> {
        self.day_config.iter().find(|c| c.day == day)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

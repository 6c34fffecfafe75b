//! Configuration types for earnings accrual.
//!
//! This module contains the strongly-typed compensation configuration the
//! calculator consumes, and the looser file shape it is loaded from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{WorkDays, WorkSegment};

/// The unit in which the configured salary is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBasis {
    /// Salary per month.
    #[default]
    #[serde(alias = "month")]
    Monthly,
    /// Salary per workday.
    #[serde(alias = "day")]
    Daily,
    /// Salary per hour worked.
    #[serde(alias = "hour")]
    Hourly,
}

/// The audible cue the audio collaborator plays when earnings tick over a cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    /// A coin drop.
    #[default]
    Coin,
    /// A short click.
    Click,
    /// No sound.
    Mute,
}

impl SoundCue {
    /// Returns `true` if a cue should be played for a tick with the given
    /// change flag.
    ///
    /// ```
    /// use payticker::config::SoundCue;
    ///
    /// assert!(SoundCue::Coin.should_play(true));
    /// assert!(!SoundCue::Coin.should_play(false));
    /// assert!(!SoundCue::Mute.should_play(true));
    /// ```
    pub fn should_play(self, changed: bool) -> bool {
        changed && self != SoundCue::Mute
    }
}

/// The compensation model the calculator works from.
///
/// Owned by the settings collaborator; the engine only ever reads it.
///
/// # Example
///
/// ```
/// use payticker::config::{CompensationConfig, RateBasis};
/// use payticker::models::{WorkDays, WorkSegment};
/// use rust_decimal::Decimal;
///
/// let config = CompensationConfig {
///     rate_basis: RateBasis::Hourly,
///     rate_amount: Decimal::from(50),
///     segments: vec![WorkSegment::new("09:00".parse().unwrap(), "17:00".parse().unwrap())],
///     work_days: WorkDays::weekdays(),
///     manual_hours: None,
/// };
/// assert_eq!(config.valid_segment_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationConfig {
    /// The unit of `rate_amount`.
    pub rate_basis: RateBasis,
    /// The salary magnitude, never negative once validated.
    pub rate_amount: Decimal,
    /// Paid time blocks within a workday; invalid entries are ignored.
    #[serde(default)]
    pub segments: Vec<WorkSegment>,
    /// Weekdays that count as workdays.
    #[serde(default)]
    pub work_days: WorkDays,
    /// Overrides the paid hours per day derived from `segments`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_hours: Option<Decimal>,
}

impl CompensationConfig {
    /// Number of segments that end strictly after they start.
    pub fn valid_segment_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_valid()).count()
    }
}

impl Default for CompensationConfig {
    fn default() -> Self {
        Self {
            rate_basis: RateBasis::Monthly,
            rate_amount: Decimal::from(10_000),
            segments: Vec::new(),
            work_days: WorkDays::weekdays(),
            manual_hours: None,
        }
    }
}

/// Everything a settings file provides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    /// The compensation model.
    pub compensation: CompensationConfig,
    /// The preferred audible cue.
    pub sound: SoundCue,
}

/// A time block as written in a settings file, before time parsing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SegmentEntry {
    pub start: String,
    pub end: String,
}

/// The on-disk settings layout.
///
/// Accepts both the current layout (`segments` list) and the older ones:
/// a morning/afternoon pair (`am_start` .. `pm_end`) and a single
/// `work_start`/`work_end` window. camelCase keys are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SettingsFile {
    #[serde(alias = "salaryType")]
    pub rate_basis: Option<RateBasis>,
    #[serde(alias = "salary")]
    pub rate_amount: Option<Decimal>,
    pub segments: Option<Vec<SegmentEntry>>,
    #[serde(alias = "amStart")]
    pub am_start: Option<String>,
    #[serde(alias = "amEnd")]
    pub am_end: Option<String>,
    #[serde(alias = "pmStart")]
    pub pm_start: Option<String>,
    #[serde(alias = "pmEnd")]
    pub pm_end: Option<String>,
    #[serde(alias = "workStart")]
    pub work_start: Option<String>,
    #[serde(alias = "workEnd")]
    pub work_end: Option<String>,
    #[serde(alias = "workDays")]
    pub work_days: Option<Vec<u8>>,
    #[serde(alias = "manualHours")]
    pub manual_hours: Option<Decimal>,
    #[serde(alias = "soundType")]
    pub sound: Option<SoundCue>,
}

impl SettingsFile {
    /// The time blocks in effect, by precedence: an explicit `segments`
    /// list, then the morning/afternoon pair, then the single window.
    pub fn segment_entries(&self) -> Vec<SegmentEntry> {
        if let Some(segments) = &self.segments {
            return segments.clone();
        }

        let pair = |start: &Option<String>, end: &Option<String>| SegmentEntry {
            start: start.clone().unwrap_or_default(),
            end: end.clone().unwrap_or_default(),
        };

        let has_split = [&self.am_start, &self.am_end, &self.pm_start, &self.pm_end]
            .iter()
            .any(|field| field.is_some());
        if has_split {
            return vec![
                pair(&self.am_start, &self.am_end),
                pair(&self.pm_start, &self.pm_end),
            ];
        }

        if self.work_start.is_some() || self.work_end.is_some() {
            return vec![pair(&self.work_start, &self.work_end)];
        }

        Vec::new()
    }
}

//! Core domain types for the liturgical calendar.
//!
//! This module defines the fundamental types used throughout the system:
//! - Patrons (the deities governing each month)
//! - Symbolic moon phases
//! - Days, months and the whole-year calendar
//! - Resolved positions and merged day views handed to callers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of months in one liturgical cycle
pub const MONTHS_PER_CYCLE: usize = 13;

/// Number of days in every liturgical month
pub const DAYS_PER_MONTH: usize = 28;

/// Length of the free-running liturgical cycle (13 × 28)
pub const CYCLE_LENGTH: u32 = (MONTHS_PER_CYCLE * DAYS_PER_MONTH) as u32;

// ============================================================================
// Patrons
// ============================================================================

/// Deity governing a liturgical month
///
/// Serialized with its Yorùbá display name.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Patron {
    #[serde(rename = "Ọbàtálá")]
    Obatala,
    #[serde(rename = "Ọ̀ṣun")]
    Osun,
    #[serde(rename = "Ṣàngó")]
    Sango,
    #[serde(rename = "Ògún")]
    Ogun,
    #[serde(rename = "Yemọja")]
    Yemoja,
    #[serde(rename = "Ọ̀rúnmìlà")]
    Orunmila,
    #[serde(rename = "Èṣù")]
    Esu,
    #[serde(rename = "Ọya")]
    Oya,
    #[serde(rename = "Ọ̀ṣọ́ọ̀sì")]
    Osoosi,
    #[serde(rename = "Ọbalúayé")]
    Obaluaye,
    #[serde(rename = "Ọ̀sanyìn")]
    Osanyin,
    #[serde(rename = "Olókun")]
    Olokun,
    #[serde(rename = "Egúngún")]
    Egungun,
}

impl Patron {
    /// Every patron, in the order their months appear in the cycle
    pub const ALL: [Patron; MONTHS_PER_CYCLE] = [
        Patron::Obatala,
        Patron::Osun,
        Patron::Sango,
        Patron::Ogun,
        Patron::Yemoja,
        Patron::Orunmila,
        Patron::Esu,
        Patron::Oya,
        Patron::Osoosi,
        Patron::Obaluaye,
        Patron::Osanyin,
        Patron::Olokun,
        Patron::Egungun,
    ];

    /// Yorùbá display name, with tone marks
    pub fn name(self) -> &'static str {
        match self {
            Patron::Obatala => "Ọbàtálá",
            Patron::Osun => "Ọ̀ṣun",
            Patron::Sango => "Ṣàngó",
            Patron::Ogun => "Ògún",
            Patron::Yemoja => "Yemọja",
            Patron::Orunmila => "Ọ̀rúnmìlà",
            Patron::Esu => "Èṣù",
            Patron::Oya => "Ọya",
            Patron::Osoosi => "Ọ̀ṣọ́ọ̀sì",
            Patron::Obaluaye => "Ọbalúayé",
            Patron::Osanyin => "Ọ̀sanyìn",
            Patron::Olokun => "Olókun",
            Patron::Egungun => "Egúngún",
        }
    }
}

impl fmt::Display for Patron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Moon Phases
// ============================================================================

/// Symbolic moon phase, assigned by position in the month rather than
/// by astronomy
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    WaxingGibbous,
    FirstQuarter,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
    DarkMoon,
    WaningMoon,
}

impl MoonPhase {
    pub fn display_name(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
            MoonPhase::DarkMoon => "Dark Moon",
            MoonPhase::WaningMoon => "Waning Moon",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Calendar Structure
// ============================================================================

/// One day within a liturgical month
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarDay {
    /// Position in the month, 1..=28
    pub day_number: u8,
    /// Cyclic day name; the same 28 labels repeat every month
    pub label: String,
    pub activity: String,
    pub moon_phase: MoonPhase,
    pub offerings: [String; 2],
    /// Present only on days 1, 15 and 28
    pub prayer: Option<String>,
}

/// One of the 13 liturgical months
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarMonth {
    pub name: String,
    pub patron: Patron,
    pub theme: String,
    pub color: String,
    pub taboos: Vec<String>,
    /// Always 28 entries ordered by `day_number`
    pub days: Vec<CalendarDay>,
}

/// The whole-year structure, built once and never mutated
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Calendar {
    /// Descriptive Gregorian anchor year; resolution does not depend on it
    pub year: i32,
    pub months: Vec<CalendarMonth>,
}

impl Calendar {
    /// Every day carrying a prayer, paired with its month
    pub fn sacred_days(&self) -> impl Iterator<Item = (&CalendarMonth, &CalendarDay)> + '_ {
        self.months.iter().flat_map(|month| {
            month
                .days
                .iter()
                .filter(|day| day.prayer.is_some())
                .map(move |day| (month, day))
        })
    }
}

// ============================================================================
// Resolution and Query Types
// ============================================================================

/// Coordinate inside the repeating 364-day cycle
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CalendarPosition {
    /// 0-based month index, 0..13
    pub month_index: usize,
    /// 1-based day within the month, 1..=28
    pub day_in_month: u8,
    /// Gregorian day-of-year wrapped onto the cycle, 1..=364
    pub adjusted_day: u32,
}

/// A day merged with its enclosing month's descriptive fields
///
/// Borrowed from the shared calendar; nothing here can mutate it.
#[derive(Clone, Debug, Serialize)]
pub struct DayView<'a> {
    pub date_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gregorian_date: Option<NaiveDate>,
    /// Cyclic label of the day, e.g. "Ọjọ́ Awo Kìíní"
    pub patron_day_name: &'a str,
    pub month_index: usize,
    pub month_name: &'a str,
    pub patron: Patron,
    pub theme: &'a str,
    pub color: &'a str,
    pub taboos: &'a [String],
    #[serde(flatten)]
    pub day: &'a CalendarDay,
}

impl<'a> DayView<'a> {
    pub(crate) fn new(
        month_index: usize,
        month: &'a CalendarMonth,
        day: &'a CalendarDay,
        gregorian_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            date_label: format!("{} {}", day.day_number, month.name),
            gregorian_date,
            patron_day_name: &day.label,
            month_index,
            month_name: &month.name,
            patron: month.patron,
            theme: &month.theme,
            color: &month.color,
            taboos: &month.taboos,
            day,
        }
    }
}

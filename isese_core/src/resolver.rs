//! Maps Gregorian dates onto the repeating 364-day liturgical cycle.
//!
//! The Gregorian day-of-year is wrapped modulo 364, so December 31 (and
//! December 30 in leap years) folds back onto the first days of Ṣẹ̀rẹ̀.
//! No intercalary days are modeled.
//!
//! Resolution re-anchors every January 1 to day 1 of Ṣẹ̀rẹ̀ rather than
//! running the cycle continuously across years, so the leftover one or two
//! days never accumulate into a yearly drift.

use crate::{CalendarPosition, CYCLE_LENGTH, DAYS_PER_MONTH, MONTHS_PER_CYCLE};
use chrono::{Datelike, NaiveDate};

/// Resolve any Gregorian date or instant to its position in the cycle
pub fn resolve<D: Datelike>(date: &D) -> CalendarPosition {
    let day_of_year = date.ordinal();
    let adjusted_day = ((day_of_year - 1) % CYCLE_LENGTH) + 1;
    let zero_based = (adjusted_day - 1) as usize;

    CalendarPosition {
        month_index: (zero_based / DAYS_PER_MONTH) % MONTHS_PER_CYCLE,
        day_in_month: ((zero_based % DAYS_PER_MONTH) + 1) as u8,
        adjusted_day,
    }
}

/// Positions for `count` consecutive Gregorian dates starting at `start`
///
/// Stops early if the date range leaves what `NaiveDate` can represent.
pub fn upcoming(start: NaiveDate, count: usize) -> Vec<(NaiveDate, CalendarPosition)> {
    std::iter::successors(Some(start), |date| date.succ_opt())
        .take(count)
        .map(|date| (date, resolve(&date)))
        .collect()
}

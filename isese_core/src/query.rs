//! Read-only queries over a built calendar.
//!
//! Every query borrows from the calendar; none of them can mutate it, so
//! the shared instance is safe to query from any number of threads.

use crate::resolver::resolve;
use crate::{Calendar, CalendarDay, CalendarMonth, DayView, Error, Result, DAYS_PER_MONTH};
use chrono::{Local, NaiveDate};

impl Calendar {
    /// Today's day (local time) merged with its month's context
    pub fn today(&self) -> Result<DayView<'_>> {
        self.on_date(Local::now().date_naive())
    }

    /// The liturgical day that `date` falls on, merged with its month's context
    ///
    /// Only fails if the calendar is missing the resolved month or day,
    /// which a calendar from the builder never is.
    pub fn on_date(&self, date: NaiveDate) -> Result<DayView<'_>> {
        let position = resolve(&date);
        let month = self.months.get(position.month_index).ok_or_else(|| {
            Error::NotFound(format!("month index {} for {}", position.month_index, date))
        })?;
        let day = month
            .days
            .get(position.day_in_month as usize - 1)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "day {} of {} for {}",
                    position.day_in_month, month.name, date
                ))
            })?;

        tracing::debug!(
            "Resolved {} to {} {} (adjusted day {})",
            date,
            day.day_number,
            month.name,
            position.adjusted_day
        );

        Ok(DayView::new(position.month_index, month, day, Some(date)))
    }

    /// Look up a month by its exact, case-sensitive name
    pub fn month_by_name(&self, name: &str) -> Result<&CalendarMonth> {
        self.months
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| Error::NotFound(format!("month '{}'", name)))
    }

    /// Look up a month by its 0-based position in the cycle
    pub fn month_by_index(&self, index: i64) -> Result<&CalendarMonth> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.months.get(i))
            .ok_or(Error::InvalidIndex {
                index,
                count: self.months.len(),
            })
    }

    /// One day of a named month, merged with that month's context
    ///
    /// Any day number outside `1..=28`, negative or huge, is NotFound.
    pub fn day(&self, month_name: &str, day_number: i64) -> Result<DayView<'_>> {
        let (index, month) = self
            .months
            .iter()
            .enumerate()
            .find(|(_, m)| m.name == month_name)
            .ok_or_else(|| Error::NotFound(format!("month '{}'", month_name)))?;

        let day = find_day(month, day_number).ok_or_else(|| {
            Error::NotFound(format!(
                "day {} of {} (must be 1..={})",
                day_number, month_name, DAYS_PER_MONTH
            ))
        })?;

        Ok(DayView::new(index, month, day, None))
    }
}

fn find_day(month: &CalendarMonth, day_number: i64) -> Option<&CalendarDay> {
    let index = usize::try_from(day_number.checked_sub(1)?).ok()?;
    month.days.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::calendar;
    use crate::{MoonPhase, Patron, MONTHS_PER_CYCLE};

    #[test]
    fn test_serere_month() {
        let month = calendar().unwrap().month_by_name("Ṣẹ̀rẹ̀").unwrap();

        assert_eq!(month.patron, Patron::Obatala);
        assert_eq!(month.patron.name(), "Ọbàtálá");
        assert_eq!(month.theme, "Purity, New Beginnings");
        assert_eq!(month.days.len(), 28);
        assert_eq!(month.days[0].moon_phase, MoonPhase::NewMoon);
        assert!(month.days[0].prayer.as_deref().is_some_and(|p| !p.is_empty()));
    }

    #[test]
    fn test_full_moon_day() {
        let view = calendar().unwrap().day("Ṣẹ̀rẹ̀", 15).unwrap();

        assert_eq!(view.day.moon_phase, MoonPhase::FullMoon);
        assert!(view.day.prayer.as_deref().is_some_and(|p| !p.is_empty()));
        assert_eq!(view.patron, Patron::Obatala);
        assert_eq!(view.date_label, "15 Ṣẹ̀rẹ̀");
    }

    #[test]
    fn test_index_past_end_is_invalid() {
        let result = calendar().unwrap().month_by_index(13);
        assert!(matches!(
            result,
            Err(Error::InvalidIndex { index: 13, count: 13 })
        ));
        assert!(matches!(
            calendar().unwrap().month_by_index(-1),
            Err(Error::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_unknown_month_not_found() {
        let result = calendar().unwrap().month_by_name("NotAMonth");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_month_name_is_case_sensitive() {
        let calendar = calendar().unwrap();
        assert!(calendar.month_by_name("Bélú").is_ok());
        assert!(calendar.month_by_name("bélú").is_err());
    }

    #[test]
    fn test_day_out_of_range_not_found() {
        let calendar = calendar().unwrap();
        assert!(matches!(calendar.day("Ṣẹ̀rẹ̀", 0), Err(Error::NotFound(_))));
        assert!(matches!(calendar.day("Ṣẹ̀rẹ̀", 29), Err(Error::NotFound(_))));
        assert!(matches!(calendar.day("NotAMonth", 3), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_day_far_out_of_range_not_found() {
        let calendar = calendar().unwrap();
        for day in [-1, i64::MIN, 4_294_967_296, i64::MAX] {
            assert!(
                matches!(calendar.day("Ṣẹ̀rẹ̀", day), Err(Error::NotFound(_))),
                "day {}",
                day
            );
        }
    }

    #[test]
    fn test_query_round_trip() {
        let calendar = calendar().unwrap();
        for i in 0..MONTHS_PER_CYCLE {
            let month = calendar.month_by_index(i as i64).unwrap();
            for d in 1..=DAYS_PER_MONTH {
                let view = calendar.day(&month.name, d as i64).unwrap();
                assert!(std::ptr::eq(view.day, &calendar.months[i].days[d - 1]));
                assert_eq!(view.month_index, i);
            }
        }
    }

    #[test]
    fn test_on_date_merges_month_context() {
        crate::logging::init_test();
        let calendar = calendar().unwrap();
        // 2026-10-19 is day 292 -> month 10 (Bélú), day 12
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let view = calendar.on_date(date).unwrap();

        assert_eq!(view.month_name, "Bélú");
        assert_eq!(view.day.day_number, 12);
        assert_eq!(view.patron, Patron::Osanyin);
        assert_eq!(view.gregorian_date, Some(date));
        assert_eq!(view.patron_day_name, view.day.label);
        assert_eq!(view.day.offerings.len(), 2);
    }

    #[test]
    fn test_today_resolves() {
        assert!(calendar().unwrap().today().is_ok());
    }

    #[test]
    fn test_day_view_serializes_flat() {
        let view = calendar().unwrap().day("Ṣẹ̀rẹ̀", 1).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["patron"], "Ọbàtálá");
        assert_eq!(json["moon_phase"], "new_moon");
        assert_eq!(json["day_number"], 1);
        assert_eq!(json["offerings"].as_array().unwrap().len(), 2);
        assert!(json.get("gregorian_date").is_none());
    }
}

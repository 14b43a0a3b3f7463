//! Builds the 13 × 28 liturgical calendar from the pattern tables.
//!
//! The standard calendar is built once per process and shared by reference;
//! [`build`] stays public for tests and custom tables.

use crate::moon::resolve_phase;
use crate::tables::{self, ActivityPools, MonthDescriptor, OfferingPools, DAY_LABELS};
use crate::{Calendar, CalendarDay, CalendarMonth, Error, Result, DAYS_PER_MONTH};
use once_cell::sync::OnceCell;

/// Anchor year used when none is configured
pub const DEFAULT_ANCHOR_YEAR: i32 = 2025;

/// Cached standard calendar - built once and reused across all queries
static CALENDAR: OnceCell<Calendar> = OnceCell::new();

/// Get the shared calendar, building it with the default anchor year if needed
pub fn calendar() -> Result<&'static Calendar> {
    init(DEFAULT_ANCHOR_YEAR)
}

/// Build the shared calendar exactly once
///
/// Concurrent first callers block until the single build finishes. Once
/// built, the anchor year is fixed for the life of the process.
pub fn init(anchor_year: i32) -> Result<&'static Calendar> {
    let calendar = CALENDAR.get_or_try_init(|| {
        build(
            anchor_year,
            &tables::MONTHS,
            &ActivityPools::standard(),
            &OfferingPools::standard(),
        )
    })?;

    if calendar.year != anchor_year {
        tracing::warn!(
            "Calendar already built for {}, ignoring anchor year {}",
            calendar.year,
            anchor_year
        );
    }

    Ok(calendar)
}

/// Build a calendar from month descriptors and patron pools
///
/// Fails with [`Error::BuildInconsistency`] if the tables are malformed.
pub fn build(
    anchor_year: i32,
    months: &[MonthDescriptor],
    activities: &ActivityPools,
    offerings: &OfferingPools,
) -> Result<Calendar> {
    let errors = tables::validate(months, activities, offerings);
    if !errors.is_empty() {
        for error in &errors {
            tracing::error!("Table validation: {}", error);
        }
        return Err(Error::BuildInconsistency(errors.join("; ")));
    }

    let months = months
        .iter()
        .map(|descriptor| build_month(descriptor, activities, offerings))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        "Built liturgical calendar for {} ({} months)",
        anchor_year,
        months.len()
    );

    Ok(Calendar {
        year: anchor_year,
        months,
    })
}

fn build_month(
    descriptor: &MonthDescriptor,
    activities: &ActivityPools,
    offerings: &OfferingPools,
) -> Result<CalendarMonth> {
    let patron = descriptor.patron;
    let missing = |what: &str| {
        Error::BuildInconsistency(format!("No {} pool for patron {}", what, patron))
    };
    let activity_pool = activities.get(patron).ok_or_else(|| missing("activity"))?;
    let offering_pool = offerings.get(patron).ok_or_else(|| missing("offering"))?;

    let days = (1..=DAYS_PER_MONTH)
        .map(|n| {
            let day_number = n as u8;
            CalendarDay {
                day_number,
                label: DAY_LABELS[n - 1].to_string(),
                activity: activity_pool[n - 1].clone(),
                moon_phase: resolve_phase(day_number),
                offerings: pick_offerings(offering_pool, n),
                prayer: tables::prayer(patron, descriptor.theme, day_number),
            }
        })
        .collect();

    tracing::debug!("Built month {} ({})", descriptor.name, patron);

    Ok(CalendarMonth {
        name: descriptor.name.to_string(),
        patron,
        theme: descriptor.theme.to_string(),
        color: descriptor.color.to_string(),
        taboos: descriptor.taboos.iter().map(|t| t.to_string()).collect(),
        days,
    })
}

/// Two offerings for `day_number`: pool[(d-1) mod n] and pool[(d+1) mod n]
fn pick_offerings(pool: &[String], day_number: usize) -> [String; 2] {
    let len = pool.len();
    [
        pool[(day_number - 1) % len].clone(),
        pool[(day_number + 1) % len].clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoonPhase, Patron, MONTHS_PER_CYCLE};

    fn standard() -> Calendar {
        build(
            DEFAULT_ANCHOR_YEAR,
            &tables::MONTHS,
            &ActivityPools::standard(),
            &OfferingPools::standard(),
        )
        .unwrap()
    }

    #[test]
    fn test_cycle_completeness() {
        let calendar = standard();
        assert_eq!(calendar.months.len(), MONTHS_PER_CYCLE);
        for month in &calendar.months {
            assert_eq!(month.days.len(), DAYS_PER_MONTH);
            for (i, day) in month.days.iter().enumerate() {
                assert_eq!(day.day_number as usize, i + 1);
            }
        }
    }

    #[test]
    fn test_prayer_presence() {
        let calendar = standard();
        for month in &calendar.months {
            for day in &month.days {
                assert_eq!(
                    day.prayer.is_some(),
                    matches!(day.day_number, 1 | 15 | 28),
                    "{} day {}",
                    month.name,
                    day.day_number
                );
            }
        }
        assert_eq!(calendar.sacred_days().count(), 3 * MONTHS_PER_CYCLE);
    }

    #[test]
    fn test_offering_selection_wraps_pool() {
        let pool: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();

        assert_eq!(pick_offerings(&pool, 1), ["a".to_string(), "c".to_string()]);
        assert_eq!(pick_offerings(&pool, 4), ["d".to_string(), "a".to_string()]);
        assert_eq!(pick_offerings(&pool, 28), ["c".to_string(), "e".to_string()]);
    }

    #[test]
    fn test_single_item_offering_pool() {
        let pool = vec!["Gin".to_string()];
        assert_eq!(pick_offerings(&pool, 9), ["Gin".to_string(), "Gin".to_string()]);
    }

    #[test]
    fn test_days_follow_patron_tables() {
        let calendar = standard();
        let activities = ActivityPools::standard();
        let serere = &calendar.months[0];

        assert_eq!(serere.name, "Ṣẹ̀rẹ̀");
        assert_eq!(serere.patron, Patron::Obatala);
        assert_eq!(serere.days[0].moon_phase, MoonPhase::NewMoon);
        assert_eq!(serere.days[0].label, DAY_LABELS[0]);
        assert_eq!(
            serere.days[9].activity,
            activities.get(Patron::Obatala).unwrap()[9]
        );
    }

    #[test]
    fn test_short_pool_fails_build() {
        crate::logging::init_test();
        let mut activities = ActivityPools::standard();
        activities.insert(Patron::Oya, vec!["Sweep".into(); 10]);

        let result = build(
            DEFAULT_ANCHOR_YEAR,
            &tables::MONTHS,
            &activities,
            &OfferingPools::standard(),
        );
        assert!(matches!(result, Err(Error::BuildInconsistency(_))));
    }

    #[test]
    fn test_shared_calendar_is_built_once() {
        crate::logging::init_test();
        let first = calendar().unwrap();
        let second = calendar().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_concurrent_first_access_builds_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::{Arc, Barrier};

        let cell = Arc::new(OnceCell::<Calendar>::new());
        let builds = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let (cell, builds, barrier) = (cell.clone(), builds.clone(), barrier.clone());
                std::thread::spawn(move || {
                    barrier.wait();
                    let calendar = cell
                        .get_or_try_init(|| {
                            builds.fetch_add(1, Ordering::SeqCst);
                            build(
                                DEFAULT_ANCHOR_YEAR,
                                &tables::MONTHS,
                                &ActivityPools::standard(),
                                &OfferingPools::standard(),
                            )
                        })
                        .unwrap();
                    calendar as *const Calendar as usize
                })
            })
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}

//! Symbolic moon phase for a day of the liturgical month.
//!
//! Rules are checked in order and the first match wins. The quarter rules
//! for days 7 and 14 are shadowed by the crescent/gibbous ranges above
//! them; `resolve_phase(7)` is `WaxingCrescent` and `resolve_phase(14)` is
//! `WaxingGibbous`. Reordering the rules changes those two days.

use crate::MoonPhase;

/// Resolve the symbolic phase for `day_number` (1..=28)
///
/// Values outside 1..=28 are a caller error and fall through to
/// `WaningMoon`.
pub fn resolve_phase(day_number: u8) -> MoonPhase {
    if day_number == 1 {
        return MoonPhase::NewMoon;
    }
    if day_number == 15 {
        return MoonPhase::FullMoon;
    }
    if day_number == 28 {
        return MoonPhase::DarkMoon;
    }
    if (2..=7).contains(&day_number) {
        return MoonPhase::WaxingCrescent;
    }
    if (8..=14).contains(&day_number) {
        return MoonPhase::WaxingGibbous;
    }
    if day_number == 7 || day_number == 21 {
        return MoonPhase::FirstQuarter;
    }
    if day_number == 14 || day_number == 22 {
        return MoonPhase::LastQuarter;
    }
    if (16..=21).contains(&day_number) {
        return MoonPhase::WaningGibbous;
    }
    if (22..=27).contains(&day_number) {
        return MoonPhase::WaningCrescent;
    }
    MoonPhase::WaningMoon
}

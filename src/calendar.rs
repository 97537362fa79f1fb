// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Calendar ↔ Julian Day
//!
//! Meeus, *Astronomical Algorithms* (2nd ed. 1998), ch. 7.
//!
//! Both directions always use the Gregorian rules.  January and February are
//! counted as months 13 and 14 of the previous year so the day-count formula
//! is uniform across the civil year boundary.  Timestamps before the 1582
//! reform therefore convert consistently but do **not** match the historical
//! Julian-calendar day numbers (e.g. −4712-01-01T00:00 gives JD 37.5, not 0).
//!
//! The day fraction is decoded by truncation ([`DayFraction`]).  A Julian Day
//! near 2.4e6 resolves only ~40 µs, so even whole-second timestamps come back
//! a few microseconds early.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Timelike, Utc};

use super::day_fraction::DayFraction;

/// Julian Day for a UTC timestamp.
pub(crate) fn julian_day_from_utc(utc: &DateTime<Utc>) -> f64 {
    let mut year = utc.year() as i64;
    let mut month = utc.month() as i64;
    if month <= 2 {
        year -= 1;
        month += 12;
    }
    let day = utc.day() as f64;
    let day_fraction = DayFraction::to_fraction(
        utc.hour() as i32,
        utc.minute() as i32,
        utc.second() as i32,
        utc.nanosecond() as i32,
    );

    // Gregorian leap-rule correction, applied to every date.
    let b = (2 - year.div_euclid(100) + year.div_euclid(400)) as f64;
    let days_to_year = (365.25 * (year + 4716) as f64).floor();
    let days_to_month = (30.6001 * (month + 1) as f64).floor();

    days_to_year + days_to_month + day + day_fraction + b - 1524.5
}

/// UTC timestamp for a Julian Day, or `None` outside chrono's range.
pub(crate) fn utc_from_julian_day(jd: f64) -> Option<DateTime<Utc>> {
    if !jd.is_finite() {
        return None;
    }

    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_with_fraction = b - d - (30.6001 * e).floor() + f;
    let day = day_with_fraction.trunc();
    let clock = DayFraction::from_fraction(day_with_fraction - day);

    let (year, month) = if e <= 13.0 {
        (c - 4716.0, e - 1.0)
    } else {
        (c - 4715.0, e - 13.0)
    };

    let date = NaiveDate::from_ymd_opt(
        i32::try_from(year as i64).ok()?,
        month as u32,
        day as u32,
    )?;

    // Truncation can leave e.g. 60 s; carry it instead of rejecting it.
    let offset = TimeDelta::try_hours(clock.hour() as i64)?
        .checked_add(&TimeDelta::try_minutes(clock.minute() as i64)?)?
        .checked_add(&TimeDelta::try_seconds(clock.second() as i64)?)?
        .checked_add(&TimeDelta::nanoseconds(clock.nanosecond() as i64))?;

    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(offset)
        .map(|naive| naive.and_utc())
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day calendar conversion and a low-precision solar ephemeris.
//!
//! # Core types
//!
//! - [`Time<S>`] — instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`] — type alias for `Time<JD>`; days since −4712-01-01T12:00.
//! - [`ModifiedJulianDate`] — type alias for `Time<MJD>`; `JD − 2 400 000.5`.
//! - [`DayFraction`] — fraction of a day ↔ hour/minute/second/nanosecond.
//! - [`SolarLocation`] — position and daily events of the Sun for an observer.
//! - [`SolarError`] — why a solar quantity is undefined (polar day/night…).
//!
//! # Calendar conversion
//!
//! `Time::<S>::from_calendar` accepts a `chrono::DateTime` in any zone and
//! normalises it to UTC; `to_calendar` always returns `DateTime<Utc>`.  The
//! Gregorian rules are applied to every date, including those before the
//! 1582 reform.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use helioday::{JulianDate, ModifiedJulianDate};
//!
//! let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
//! assert_eq!(JulianDate::from_calendar(&j2000).value(), 2_451_545.0);
//! assert_eq!(ModifiedJulianDate::from_calendar(&j2000).value(), 51_544.5);
//! assert_eq!(JulianDate::J2000.to_calendar(), Some(j2000));
//! ```
//!
//! # Features
//!
//! - `serde`: serialise [`Time<S>`] and [`DayFraction`] as bare numbers.

mod calendar;
mod day_fraction;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
mod modified_julian_date_ext;
pub(crate) mod scales;
pub mod sun;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use day_fraction::DayFraction;
pub use error::SolarError;
pub use instant::{Time, TimeScale};
pub use scales::{JD, MJD};
pub use sun::{SolarEvents, SolarLocation, SolarPosition};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Day — continuous count of days since the Julian Period, with day
/// boundaries at noon.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date — `JD − 2 400 000.5`, day boundaries at midnight.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fraction-of-day ↔ clock-component codec.
//!
//! A [`DayFraction`] pairs a fractional day (`0.5` is 12:00) with its
//! decomposition into hour, minute, second and nanosecond. Decomposition
//! truncates at every step, so the nanosecond tail may lose one unit at the
//! boundary. No range checks are made in either direction: fractions outside
//! `[0, 1)` yield out-of-range components and vice versa.

use chrono::NaiveTime;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A fraction of a day together with its clock components.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DayFraction {
    fraction: f64,
    hour: i32,
    minute: i32,
    second: i32,
    nanosecond: i32,
}

impl DayFraction {
    /// Decompose a fractional day by repeated floor-and-scale.
    pub fn from_fraction(fraction: f64) -> Self {
        let hour_in_day = fraction * 24.0;
        let hour = hour_in_day.floor();
        let minute_in_hour = (hour_in_day - hour) * 60.0;
        let minute = minute_in_hour.floor();
        let second_in_minute = (minute_in_hour - minute) * 60.0;
        let second = second_in_minute.floor();
        let nanosecond = ((second_in_minute - second) * 1e9) as i32;

        Self {
            fraction,
            hour: hour as i32,
            minute: minute as i32,
            second: second as i32,
            nanosecond,
        }
    }

    /// Build from clock components.
    ///
    /// The fraction is `(h + m/60 + s/3600 + ns/3.6e12) / 24`.
    pub fn from_components(hour: i32, minute: i32, second: i32, nanosecond: i32) -> Self {
        Self {
            fraction: Self::to_fraction(hour, minute, second, nanosecond),
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Fractional day for the given clock components.
    #[inline]
    pub fn to_fraction(hour: i32, minute: i32, second: i32, nanosecond: i32) -> f64 {
        (hour as f64
            + minute as f64 / 60.0
            + second as f64 / 60.0 / 60.0
            + nanosecond as f64 / 1e9 / 60.0 / 60.0)
            / 24.0
    }

    /// Fraction of the day that was encoded.
    #[inline]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Whole hours.
    #[inline]
    pub const fn hour(&self) -> i32 {
        self.hour
    }

    /// Minutes past the hour.
    #[inline]
    pub const fn minute(&self) -> i32 {
        self.minute
    }

    /// Seconds past the minute.
    #[inline]
    pub const fn second(&self) -> i32 {
        self.second
    }

    /// Nanoseconds past the second, truncated.
    #[inline]
    pub const fn nanosecond(&self) -> i32 {
        self.nanosecond
    }

    /// Clock time for the components, or `None` when any of them is outside
    /// its canonical range.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_nano_opt(
            u32::try_from(self.hour).ok()?,
            u32::try_from(self.minute).ok()?,
            u32::try_from(self.second).ok()?,
            u32::try_from(self.nanosecond).ok()?,
        )
    }
}

impl From<f64> for DayFraction {
    #[inline]
    fn from(fraction: f64) -> Self {
        Self::from_fraction(fraction)
    }
}

impl From<NaiveTime> for DayFraction {
    fn from(time: NaiveTime) -> Self {
        use chrono::Timelike;
        Self::from_components(
            time.hour() as i32,
            time.minute() as i32,
            time.second() as i32,
            time.nanosecond() as i32,
        )
    }
}

impl fmt::Display for DayFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:09}",
            self.hour, self.minute, self.second, self.nanosecond
        )
    }
}

#[cfg(feature = "serde")]
impl Serialize for DayFraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.fraction)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DayFraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::from_fraction(v))
    }
}

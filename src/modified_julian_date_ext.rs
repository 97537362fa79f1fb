// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Modified Julian Date (`Time<MJD>`) specific extensions.
//!
//! The Julian Day is the source of truth: setters take either scale and
//! the other one is always derived through the fixed 2 400 000.5 d offset.

use chrono::{DateTime, TimeZone, Utc};

use super::instant::Time;
use super::scales::{JD, MJD, MJD_EPOCH};

impl Time<MJD> {
    /// Julian Day of MJD 0.
    pub const EPOCH_JD: Time<JD> = Time::<JD>::from_days(MJD_EPOCH);

    /// The calendar instant of MJD 0: 1858-11-17T00:00:00 UTC.
    pub fn epoch_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1858, 11, 17, 0, 0, 0)
            .single()
            .expect("MJD epoch is a valid UTC date")
    }

    /// The underlying Julian Day.
    #[inline]
    pub fn to_jd(&self) -> Time<JD> {
        self.to::<JD>()
    }

    /// Replace the value, keeping it on the MJD axis.
    #[inline]
    pub fn set_value(&mut self, mjd: f64) {
        *self = Self::new(mjd);
    }

    /// Replace the value from a Julian Day.
    #[inline]
    pub fn set_julian_day(&mut self, jd: Time<JD>) {
        *self = Self::from_julian_day(jd.quantity());
    }
}

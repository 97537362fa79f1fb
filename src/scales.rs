// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a day count and encodes how values on
//! that count relate to the canonical **Julian Day** (UTC-referenced, day
//! boundaries at noon).
//!
//! | Marker | Description | Epoch (JD) | Day boundary |
//! |--------|-------------|------------|--------------|
//! | [`JD`] | Julian Day | 0.0 | noon |
//! | [`MJD`] | Modified Julian Date | 2 400 000.5 | midnight |

use super::instant::TimeScale;
use qtty::Days;

/// Julian Day — the identity scale.
///
/// `to_julian_day(v) = v`, i.e. the quantity *is* a Julian Day number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_julian_day(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_julian_day(jd: Days) -> Days {
        jd
    }
}

/// Modified Julian Date — JD minus 2 400 000.5.
///
/// MJD 0 is 1858-11-17T00:00:00 UTC, so MJD days start at midnight.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
pub(crate) const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_julian_day(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_julian_day(jd: Days) -> Days {
        jd - MJD_EPOCH
    }
}

impl From<super::instant::Time<JD>> for super::instant::Time<MJD> {
    #[inline]
    fn from(t: super::instant::Time<JD>) -> Self {
        t.to::<MJD>()
    }
}

impl From<super::instant::Time<MJD>> for super::instant::Time<JD> {
    #[inline]
    fn from(t: super::instant::Time<MJD>) -> Self {
        t.to::<JD>()
    }
}

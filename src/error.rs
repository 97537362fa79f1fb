// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the solar formulas.
//!
//! Only the inverse-cosine steps of the pipeline can fail: the sunrise hour
//! angle, the zenith angle and the azimuth.  Everything derived from them
//! carries the same error.

use thiserror::Error;

/// Why a solar quantity has no value at the requested place and time.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SolarError {
    /// The Sun never sinks to the sunrise altitude (−0.833°) on this day.
    #[error("sun stays above the horizon all day (midnight sun)")]
    AlwaysAbove,

    /// The Sun never climbs to the sunrise altitude (−0.833°) on this day.
    #[error("sun stays below the horizon all day (polar night)")]
    AlwaysBelow,

    /// The cosine fed to `acos` is outside `[-1, 1]` or not a number.
    #[error("{quantity} is undefined: cosine {argument} is outside [-1, 1]")]
    OutOfDomain {
        quantity: &'static str,
        argument: f64,
    },
}

impl SolarError {
    /// `true` for the polar day / polar night cases.
    #[inline]
    pub fn is_polar(&self) -> bool {
        matches!(self, Self::AlwaysAbove | Self::AlwaysBelow)
    }
}

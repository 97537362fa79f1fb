// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The solar formula chain, one free function per quantity.
//!
//! Angles in and out are degrees (`f64`); `t` is Julian centuries since
//! J2000.0.  Each function calls its own dependencies, so any of them can be
//! evaluated on its own.  The expressions are the NOAA spreadsheet
//! adaptation of Meeus, *Astronomical Algorithms*, ch. 25 (low accuracy,
//! ≈0.01°).

use crate::error::SolarError;

/// Altitude of the Sun's centre at sunrise/sunset: 50′ below the horizon
/// (34′ refraction + 16′ semi-diameter), expressed as a zenith distance.
const SUNRISE_ZENITH: f64 = 90.833;

/// Minutes of time per degree of Earth rotation.
const MINUTES_PER_DEGREE: f64 = 4.0;

const MINUTES_PER_DAY: f64 = 1440.0;

/// `acos` in degrees; `Err` when `cosine` is outside `[-1, 1]` or NaN.
#[inline]
fn acos_deg(cosine: f64, quantity: &'static str) -> Result<f64, SolarError> {
    if (-1.0..=1.0).contains(&cosine) {
        Ok(cosine.acos().to_degrees())
    } else {
        Err(SolarError::OutOfDomain {
            quantity,
            argument: cosine,
        })
    }
}

/// Longitude of the Moon's ascending node, low-order approximation (°).
#[inline]
fn ascending_node(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

// ── Orbit ─────────────────────────────────────────────────────────────────

/// Geometric mean longitude of the Sun, reduced with `%` (keeps the sign
/// of `t`).
pub fn mean_longitude(t: f64) -> f64 {
    (280.46646 + t * (36000.76983 + t * 0.0003032)) % 360.0
}

/// Mean anomaly of the Sun.  Not reduced: it is ≈8476° in 2022.
pub fn mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Eccentricity of Earth's orbit (dimensionless).
pub fn eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Equation of the centre.
pub fn equation_of_center(t: f64) -> f64 {
    let m = mean_anomaly(t).to_radians();
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

/// True geometric longitude, degrees.
pub fn true_longitude(t: f64) -> f64 {
    equation_of_center(t) + mean_longitude(t)
}

/// True anomaly, degrees; not reduced modulo 360°.
pub fn true_anomaly(t: f64) -> f64 {
    equation_of_center(t) + mean_anomaly(t)
}

/// Sun–Earth distance in astronomical units.
pub fn radius_vector(t: f64) -> f64 {
    let e = eccentricity(t);
    (1.000001018 * (1.0 - e * e)) / (1.0 + e * true_anomaly(t).to_radians().cos())
}

/// True longitude corrected for nutation and aberration.
pub fn apparent_longitude(t: f64) -> f64 {
    true_longitude(t) - 0.00569 - 0.00478 * ascending_node(t).to_radians().sin()
}

// ── Obliquity ─────────────────────────────────────────────────────────────

/// Mean obliquity of the ecliptic: 23°26′21.448″ minus the secular terms.
pub fn mean_obliquity(t: f64) -> f64 {
    23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0
}

/// Mean obliquity plus the leading nutation term.
pub fn corrected_obliquity(t: f64) -> f64 {
    mean_obliquity(t) + 0.00256 * ascending_node(t).to_radians().cos()
}

// ── Equatorial coordinates ────────────────────────────────────────────────

/// Apparent right ascension in `(-180, 180]`.
pub fn right_ascension(t: f64) -> f64 {
    let lambda = apparent_longitude(t).to_radians();
    let epsilon = corrected_obliquity(t).to_radians();
    (epsilon.cos() * lambda.sin()).atan2(lambda.cos()).to_degrees()
}

/// Apparent declination.
pub fn declination(t: f64) -> f64 {
    let lambda = apparent_longitude(t).to_radians();
    let epsilon = corrected_obliquity(t).to_radians();
    (epsilon.sin() * lambda.sin()).asin().to_degrees()
}

// ── Time ──────────────────────────────────────────────────────────────────

/// `tan²(ε/2)`, shared by the equation-of-time series.
pub fn var_y(t: f64) -> f64 {
    (corrected_obliquity(t) / 2.0).to_radians().tan().powi(2)
}

/// Equation of time in minutes (apparent minus mean solar time).
pub fn equation_of_time(t: f64) -> f64 {
    let l0 = mean_longitude(t).to_radians();
    let e = eccentricity(t);
    let m = mean_anomaly(t).to_radians();
    let y = var_y(t);
    let radians = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    MINUTES_PER_DEGREE * radians.to_degrees()
}

/// Hour angle of the Sun's centre at sunrise (positive degrees).
///
/// A cosine above 1 means the Sun never gets that high (polar night); below
/// −1 it never gets that low (midnight sun).
pub fn hour_angle_at_sunrise(latitude: f64, declination: f64) -> Result<f64, SolarError> {
    let phi = latitude.to_radians();
    let delta = declination.to_radians();
    let cosine = SUNRISE_ZENITH.to_radians().cos() / (phi.cos() * delta.cos())
        - phi.tan() * delta.tan();

    if cosine > 1.0 {
        Err(SolarError::AlwaysBelow)
    } else if cosine < -1.0 {
        Err(SolarError::AlwaysAbove)
    } else {
        acos_deg(cosine, "sunrise hour angle")
    }
}

/// Solar noon as a fraction of the UTC day (no time-zone offset applied).
pub fn solar_noon(longitude: f64, equation_of_time: f64) -> f64 {
    (720.0 - MINUTES_PER_DEGREE * longitude - equation_of_time) / MINUTES_PER_DAY
}

/// Offset between solar noon and sunrise/sunset, as a fraction of a day.
pub fn half_day_length(hour_angle_at_sunrise: f64) -> f64 {
    hour_angle_at_sunrise * MINUTES_PER_DEGREE / MINUTES_PER_DAY
}

/// Sunlight duration in minutes.
pub fn sunlight_duration(hour_angle_at_sunrise: f64) -> f64 {
    hour_angle_at_sunrise * 2.0 * MINUTES_PER_DEGREE
}

/// True solar time in minutes, reduced with `%` to `(-1440, 1440)`.
///
/// `julian_day + 0.5` moves the day boundary from noon to midnight before
/// the fraction of the day is taken.
pub fn true_solar_time(julian_day: f64, longitude: f64, equation_of_time: f64) -> f64 {
    let shifted = julian_day + 0.5;
    let past_midnight = shifted - shifted.floor();
    (past_midnight * MINUTES_PER_DAY + equation_of_time + MINUTES_PER_DEGREE * longitude)
        % MINUTES_PER_DAY
}

/// Hour angle in degrees, zero at local solar noon and negative before it.
pub fn hour_angle(true_solar_time: f64) -> f64 {
    let quarter = true_solar_time / MINUTES_PER_DEGREE;
    if quarter < 0.0 {
        quarter + 180.0
    } else {
        quarter - 180.0
    }
}

// ── Horizontal coordinates ────────────────────────────────────────────────

/// Zenith distance from the spherical law of cosines.
pub fn zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> Result<f64, SolarError> {
    let phi = latitude.to_radians();
    let delta = declination.to_radians();
    let cosine =
        phi.sin() * delta.sin() + phi.cos() * delta.cos() * hour_angle.to_radians().cos();
    acos_deg(cosine, "zenith angle")
}

/// Approximate atmospheric refraction in degrees for a true elevation.
///
/// Four bands split at 85°, 5° and −0.575°; the value is finite for every
/// elevation in `[-90, 90]`.
pub fn refraction_correction(elevation: f64) -> f64 {
    let arcseconds = if elevation > 85.0 {
        0.0
    } else if elevation > 5.0 {
        let te = elevation.to_radians().tan();
        58.1 / te - 0.07 / te.powi(3) + 0.000086 / te.powi(5)
    } else if elevation > -0.575 {
        1735.0
            + elevation
                * (-518.2 + elevation * (103.4 + elevation * (-12.79 + elevation * 0.711)))
    } else {
        -20.772 / elevation.to_radians().tan()
    };
    arcseconds / 3600.0
}

/// Azimuth in degrees clockwise from north.
///
/// The branch is chosen by the sign of the hour angle: afternoon (positive)
/// azimuths lie west of the meridian.
pub fn azimuth(
    latitude: f64,
    declination: f64,
    zenith: f64,
    hour_angle: f64,
) -> Result<f64, SolarError> {
    let phi = latitude.to_radians();
    let z = zenith.to_radians();
    let cosine =
        (phi.sin() * z.cos() - declination.to_radians().sin()) / (phi.cos() * z.sin());
    let angle = acos_deg(cosine, "azimuth")?;
    if hour_angle > 0.0 {
        Ok((angle + 180.0) % 360.0)
    } else {
        Ok((540.0 - angle) % 360.0)
    }
}

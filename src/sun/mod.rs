// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Apparent position of the Sun
//!
//! [`SolarLocation`] binds an observer (geodetic latitude, east longitude)
//! to a [`JulianDate`] and exposes every intermediate quantity of the NOAA
//! solar-position chain, from the mean longitude down to the azimuth.
//!
//! Nothing is cached: each query re-evaluates its dependencies from the
//! Julian centuries since J2000.0 (see [`formulas`]), so the setters never
//! leave stale state behind.
//!
//! ## Undefined values
//!
//! Three steps take an inverse cosine.  When its argument leaves `[-1, 1]`
//! the query returns a [`SolarError`] instead of an angle:
//!
//! | Query | Error | Meaning |
//! |-------|-------|---------|
//! | [`hour_angle_at_sunrise`](SolarLocation::hour_angle_at_sunrise) | `AlwaysBelow` / `AlwaysAbove` | polar night / midnight sun |
//! | [`zenith_angle`](SolarLocation::zenith_angle) | `OutOfDomain` | rounding past ±1 |
//! | [`azimuth`](SolarLocation::azimuth) | `OutOfDomain` | Sun at the zenith or observer at a pole |
//!
//! Sunrise, sunset, sunlight duration, elevation and refraction inherit the
//! error of the step they are built on.
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use helioday::SolarLocation;
//! use qtty::Degrees;
//!
//! let when = Utc.with_ymd_and_hms(2022, 7, 22, 1, 0, 0).unwrap();
//! let sun = SolarLocation::from_calendar(Degrees::new(30.0), Degrees::new(10.0), &when);
//!
//! assert!((sun.declination().value() - 20.31).abs() < 0.01);
//! assert!((sun.sunrise().unwrap() - 0.1895).abs() < 0.001);
//! ```

pub mod formulas;

use chrono::{DateTime, TimeZone};
use qtty::{AstronomicalUnits, Degrees, Minutes};

use crate::day_fraction::DayFraction;
use crate::error::SolarError;
use crate::JulianDate;

/// Sun as seen from one place at one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarLocation {
    latitude: Degrees,
    longitude: Degrees,
    jd: JulianDate,
}

/// Equatorial and horizontal coordinates at the bound instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarPosition {
    pub right_ascension: Degrees,
    pub declination: Degrees,
    pub hour_angle: Degrees,
    pub zenith: Degrees,
    pub elevation: Degrees,
    /// Elevation including atmospheric refraction.
    pub apparent_elevation: Degrees,
    /// Clockwise from north.
    pub azimuth: Degrees,
}

/// Solar noon, sunrise and sunset as UTC clock times.
///
/// Each event is wrapped into `[00:00, 24:00)`.  Far from the Greenwich
/// meridian an event can fall on the neighbouring UTC day (sunrise in Tokyo
/// is the previous evening UTC); the unwrapped fractions from
/// [`SolarLocation::sunrise`] and friends keep that day offset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarEvents {
    pub solar_noon: DayFraction,
    pub sunrise: Result<DayFraction, SolarError>,
    pub sunset: Result<DayFraction, SolarError>,
    pub sunlight_duration: Result<Minutes, SolarError>,
}

impl SolarLocation {
    /// `latitude` is positive north, `longitude` positive east.
    pub fn new(latitude: Degrees, longitude: Degrees, jd: JulianDate) -> Self {
        Self {
            latitude,
            longitude,
            jd,
        }
    }

    /// Bind to a calendar timestamp in any time zone.
    pub fn from_calendar<Tz: TimeZone>(
        latitude: Degrees,
        longitude: Degrees,
        datetime: &DateTime<Tz>,
    ) -> Self {
        Self::new(latitude, longitude, JulianDate::from_calendar(datetime))
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Geodetic latitude, positive north.
    #[inline]
    pub fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Move the observer north or south.
    #[inline]
    pub fn set_latitude(&mut self, latitude: Degrees) {
        self.latitude = latitude;
    }

    /// Longitude, positive east.
    #[inline]
    pub fn longitude(&self) -> Degrees {
        self.longitude
    }

    /// Move the observer east or west.
    #[inline]
    pub fn set_longitude(&mut self, longitude: Degrees) {
        self.longitude = longitude;
    }

    /// The bound instant.
    #[inline]
    pub fn julian_day(&self) -> JulianDate {
        self.jd
    }

    /// Julian centuries since J2000.0, the argument of every formula.
    #[inline]
    fn t(&self) -> f64 {
        self.jd.julian_centuries().value()
    }

    // ── orbit ─────────────────────────────────────────────────────────

    /// Geometric mean longitude, reduced modulo 360°.
    pub fn mean_longitude(&self) -> Degrees {
        Degrees::new(formulas::mean_longitude(self.t()))
    }

    /// Geometric mean anomaly.  Deliberately not reduced modulo 360°.
    pub fn mean_anomaly(&self) -> Degrees {
        Degrees::new(formulas::mean_anomaly(self.t()))
    }

    /// Eccentricity of Earth's orbit (dimensionless, ≈0.0167).
    pub fn eccentricity(&self) -> f64 {
        formulas::eccentricity(self.t())
    }

    /// Equation of the centre.
    pub fn equation_of_center(&self) -> Degrees {
        Degrees::new(formulas::equation_of_center(self.t()))
    }

    /// True geometric longitude.
    pub fn true_longitude(&self) -> Degrees {
        Degrees::new(formulas::true_longitude(self.t()))
    }

    /// True anomaly, not reduced modulo 360°.
    pub fn true_anomaly(&self) -> Degrees {
        Degrees::new(formulas::true_anomaly(self.t()))
    }

    /// Sun–Earth distance.
    pub fn radius_vector(&self) -> AstronomicalUnits {
        AstronomicalUnits::new(formulas::radius_vector(self.t()))
    }

    /// Apparent longitude, corrected for nutation and aberration.
    pub fn apparent_longitude(&self) -> Degrees {
        Degrees::new(formulas::apparent_longitude(self.t()))
    }

    // ── obliquity and equatorial coordinates ──────────────────────────

    /// Mean obliquity of the ecliptic.
    pub fn mean_obliquity(&self) -> Degrees {
        Degrees::new(formulas::mean_obliquity(self.t()))
    }

    /// Obliquity corrected for nutation.
    pub fn corrected_obliquity(&self) -> Degrees {
        Degrees::new(formulas::corrected_obliquity(self.t()))
    }

    /// Apparent right ascension in `(-180°, 180°]`.
    pub fn right_ascension(&self) -> Degrees {
        Degrees::new(formulas::right_ascension(self.t()))
    }

    /// Apparent declination in `[-90°, 90°]`.
    pub fn declination(&self) -> Degrees {
        Degrees::new(formulas::declination(self.t()))
    }

    /// `tan²(ε/2)`.
    pub fn var_y(&self) -> f64 {
        formulas::var_y(self.t())
    }

    /// Apparent minus mean solar time.
    pub fn equation_of_time(&self) -> Minutes {
        Minutes::new(formulas::equation_of_time(self.t()))
    }

    // ── day events ────────────────────────────────────────────────────

    /// Hour angle of sunrise for a Sun centre 0.833° below the horizon.
    pub fn hour_angle_at_sunrise(&self) -> Result<Degrees, SolarError> {
        let declination = formulas::declination(self.t());
        formulas::hour_angle_at_sunrise(self.latitude.value(), declination)
            .map(Degrees::new)
            .inspect_err(|err| {
                log::debug!(
                    "no sunrise hour angle at latitude {} (declination {declination:.4}°, JD {}): {err}",
                    self.latitude,
                    self.jd.value()
                );
            })
    }

    /// Solar noon as a fraction of the UTC day.
    pub fn solar_noon(&self) -> f64 {
        formulas::solar_noon(
            self.longitude.value(),
            formulas::equation_of_time(self.t()),
        )
    }

    /// Sunrise as a fraction of the UTC day.  Not wrapped: negative when
    /// sunrise falls on the previous UTC day.
    pub fn sunrise(&self) -> Result<f64, SolarError> {
        let ha = self.hour_angle_at_sunrise()?.value();
        Ok(self.solar_noon() - formulas::half_day_length(ha))
    }

    /// Sunset as a fraction of the UTC day.  Not wrapped: above 1 when
    /// sunset falls on the next UTC day.
    pub fn sunset(&self) -> Result<f64, SolarError> {
        let ha = self.hour_angle_at_sunrise()?.value();
        Ok(self.solar_noon() + formulas::half_day_length(ha))
    }

    /// Time between sunrise and sunset; fails like [`Self::hour_angle_at_sunrise`].
    pub fn sunlight_duration(&self) -> Result<Minutes, SolarError> {
        let ha = self.hour_angle_at_sunrise()?.value();
        Ok(Minutes::new(formulas::sunlight_duration(ha)))
    }

    // ── local position ────────────────────────────────────────────────

    /// True solar time in minutes past local solar midnight.
    pub fn true_solar_time(&self) -> Minutes {
        Minutes::new(formulas::true_solar_time(
            self.jd.value(),
            self.longitude.value(),
            formulas::equation_of_time(self.t()),
        ))
    }

    /// Hour angle, zero at local solar noon and negative in the morning.
    pub fn hour_angle(&self) -> Degrees {
        Degrees::new(formulas::hour_angle(self.true_solar_time().value()))
    }

    /// Angle from the zenith; `OutOfDomain` if rounding pushes its cosine past ±1.
    pub fn zenith_angle(&self) -> Result<Degrees, SolarError> {
        formulas::zenith_angle(
            self.latitude.value(),
            formulas::declination(self.t()),
            self.hour_angle().value(),
        )
        .map(Degrees::new)
    }

    /// Geometric elevation, `90° − zenith`.
    pub fn elevation(&self) -> Result<Degrees, SolarError> {
        Ok(Degrees::new(90.0 - self.zenith_angle()?.value()))
    }

    /// Atmospheric refraction to add to the geometric elevation.
    pub fn refraction_correction(&self) -> Result<Degrees, SolarError> {
        let elevation = self.elevation()?.value();
        Ok(Degrees::new(formulas::refraction_correction(elevation)))
    }

    /// Elevation including atmospheric refraction.
    pub fn corrected_elevation(&self) -> Result<Degrees, SolarError> {
        let elevation = self.elevation()?.value();
        Ok(Degrees::new(
            elevation + formulas::refraction_correction(elevation),
        ))
    }

    /// Azimuth clockwise from north.
    pub fn azimuth(&self) -> Result<Degrees, SolarError> {
        formulas::azimuth(
            self.latitude.value(),
            formulas::declination(self.t()),
            self.zenith_angle()?.value(),
            self.hour_angle().value(),
        )
        .map(Degrees::new)
    }

    // ── snapshots ─────────────────────────────────────────────────────

    /// All position quantities at once.
    pub fn position(&self) -> Result<SolarPosition, SolarError> {
        Ok(SolarPosition {
            right_ascension: self.right_ascension(),
            declination: self.declination(),
            hour_angle: self.hour_angle(),
            zenith: self.zenith_angle()?,
            elevation: self.elevation()?,
            apparent_elevation: self.corrected_elevation()?,
            azimuth: self.azimuth()?,
        })
    }

    /// Noon, sunrise and sunset decoded into UTC clock components.
    pub fn events(&self) -> SolarEvents {
        SolarEvents {
            solar_noon: utc_clock(self.solar_noon()),
            sunrise: self.sunrise().map(utc_clock),
            sunset: self.sunset().map(utc_clock),
            sunlight_duration: self.sunlight_duration(),
        }
    }
}

/// Wrap a day fraction into `[0, 1)` and decode it.
fn utc_clock(fraction: f64) -> DayFraction {
    let wrapped = fraction.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    DayFraction::from_fraction(if wrapped < 1.0 { wrapped } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use qtty::Days;

    fn july_night_30n_10e() -> SolarLocation {
        let when = Utc.with_ymd_and_hms(2022, 7, 22, 1, 0, 0).unwrap();
        SolarLocation::from_calendar(Degrees::new(30.0), Degrees::new(10.0), &when)
    }

    fn close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    #[test]
    fn day_events() {
        let sun = july_night_30n_10e();
        close(sun.hour_angle_at_sunrise().unwrap().value(), 103.39, 0.01);
        close(sun.solar_noon(), 0.4767, 0.0001);
        close(sun.sunrise().unwrap(), 0.1895, 0.0001);
        close(sun.sunset().unwrap(), 0.7639, 0.0001);
        close(sun.sunlight_duration().unwrap().value(), 827.12, 0.01);
        close(sun.equation_of_time().value(), -6.47, 0.01);
    }

    #[test]
    fn local_position() {
        let sun = july_night_30n_10e();
        close(sun.true_solar_time().value(), 93.53, 0.01);
        close(sun.hour_angle().value(), -156.62, 0.01);
        close(sun.zenith_angle().unwrap().value(), 124.89, 0.01);
        close(sun.elevation().unwrap().value(), -34.89, 0.01);
        close(sun.refraction_correction().unwrap().value(), 0.008, 0.001);
        close(sun.corrected_elevation().unwrap().value(), -34.88, 0.01);
        close(sun.azimuth().unwrap().value(), 26.98, 0.01);
    }

    #[test]
    fn snapshot_matches_queries() {
        let sun = july_night_30n_10e();
        let pos = sun.position().unwrap();
        assert_eq!(pos.declination, sun.declination());
        assert_eq!(pos.azimuth, sun.azimuth().unwrap());
        assert_eq!(pos.apparent_elevation, sun.corrected_elevation().unwrap());

        let events = sun.events();
        // 11:26:28 solar noon, 04:32:54 sunrise, 18:20:01 sunset
        assert_eq!(
            (events.solar_noon.hour(), events.solar_noon.minute()),
            (11, 26)
        );
        let sunrise = events.sunrise.unwrap();
        assert_eq!((sunrise.hour(), sunrise.minute()), (4, 32));
        let sunset = events.sunset.unwrap();
        assert_eq!((sunset.hour(), sunset.minute()), (18, 20));
    }

    #[test]
    fn eastern_events_wrap_into_the_utc_day() {
        // Tokyo, June solstice: sunrise is the previous evening in UTC
        let when = Utc.with_ymd_and_hms(2022, 6, 21, 0, 0, 0).unwrap();
        let sun = SolarLocation::from_calendar(Degrees::new(35.68), Degrees::new(139.69), &when);
        let raw = sun.sunrise().unwrap();
        assert!(raw < 0.0);

        let events = sun.events();
        let sunrise = events.sunrise.unwrap();
        close(sunrise.fraction(), raw + 1.0, 1e-12);
        assert_eq!((sunrise.hour(), sunrise.minute()), (19, 25));
        assert!(sunrise.to_naive_time().is_some());

        // 11:42 JST
        assert_eq!(events.solar_noon.hour(), 2);
        for event in [events.solar_noon, events.sunset.unwrap()] {
            assert!((0.0..1.0).contains(&event.fraction()));
            assert!(event.to_naive_time().is_some());
        }
    }

    #[test]
    fn western_sunset_wraps_into_the_next_utc_day() {
        // Honolulu, June solstice: sunset is after 00:00 UTC
        let when = Utc.with_ymd_and_hms(2022, 6, 21, 12, 0, 0).unwrap();
        let sun = SolarLocation::from_calendar(Degrees::new(21.31), Degrees::new(-157.86), &when);
        let raw = sun.sunset().unwrap();
        assert!(raw > 1.0);
        let sunset = sun.events().sunset.unwrap();
        close(sunset.fraction(), raw - 1.0, 1e-12);
        assert!(sunset.to_naive_time().is_some());
    }

    #[test]
    fn wrapping_never_yields_a_full_day() {
        assert_eq!(utc_clock(-1e-18).fraction(), 0.0);
        assert_eq!(utc_clock(1.0).hour(), 0);
        assert_eq!(utc_clock(1.25).hour(), 6);
    }

    #[test]
    fn setters_take_effect_immediately() {
        let mut sun = july_night_30n_10e();
        let before = sun.hour_angle_at_sunrise().unwrap();
        sun.set_latitude(Degrees::new(50.0));
        assert_eq!(sun.latitude(), Degrees::new(50.0));
        assert!(sun.hour_angle_at_sunrise().unwrap().value() > before.value());

        let noon = sun.solar_noon();
        sun.set_longitude(Degrees::new(25.0));
        // 15° further east is one hour earlier
        close(noon - sun.solar_noon(), 1.0 / 24.0, 1e-12);
    }

    #[test]
    fn polar_night_has_no_sunrise() {
        let when = Utc.with_ymd_and_hms(2022, 12, 21, 12, 0, 0).unwrap();
        let sun = SolarLocation::from_calendar(Degrees::new(80.0), Degrees::new(0.0), &when);
        assert_eq!(sun.hour_angle_at_sunrise(), Err(SolarError::AlwaysBelow));
        assert_eq!(sun.sunrise(), Err(SolarError::AlwaysBelow));
        assert_eq!(sun.sunset(), Err(SolarError::AlwaysBelow));
        assert_eq!(sun.sunlight_duration(), Err(SolarError::AlwaysBelow));

        let events = sun.events();
        assert!(events.sunrise.is_err());
        // noon is still defined
        close(events.solar_noon.fraction(), sun.solar_noon(), 0.0);
        // and the Sun is still somewhere below the horizon
        assert!(sun.elevation().unwrap().value() < 0.0);
    }

    #[test]
    fn midnight_sun_has_no_sunset() {
        let when = Utc.with_ymd_and_hms(2022, 6, 21, 12, 0, 0).unwrap();
        let sun = SolarLocation::from_calendar(Degrees::new(80.0), Degrees::new(0.0), &when);
        assert_eq!(sun.sunset(), Err(SolarError::AlwaysAbove));
    }

    #[test]
    fn queries_recompute_for_a_new_instant() {
        let sun = july_night_30n_10e();
        let later = SolarLocation::new(
            sun.latitude(),
            sun.longitude(),
            sun.julian_day() + Days::new(0.5),
        );
        assert!(later.elevation().unwrap().value() > 0.0);
        assert_ne!(later.hour_angle(), sun.hour_angle());
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic day-count instant.
//!
//! [`Time<S>`] stores a scalar quantity in [`Days`] whose *meaning* is
//! determined by the compile-time marker `S: TimeScale`.  Arithmetic,
//! calendar conversion, serialisation and display are implemented
//! generically; the calendar algorithm itself works on the Julian Day axis
//! and every other scale routes through it.
//!
//! Domain-specific methods that only make sense for a particular scale
//! (e.g. [`Time::<JD>::julian_centuries()`]) are placed in inherent `impl`
//! blocks gated on the concrete marker type.

use chrono::{DateTime, TimeZone, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::calendar;

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for day counts.
///
/// A **time scale** defines a human-readable **label** and a pair of
/// conversion functions between the scale's native quantity (in [`Days`])
/// and the **Julian Day**, the canonical representation used by the
/// calendar algorithm and the solar formulas.
///
/// All scales in this crate are pure epoch counters, so the conversions are
/// constant offsets that the compiler inlines and folds away.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to an absolute Julian Day.
    fn to_julian_day(value: Days) -> Days;

    /// Convert an absolute Julian Day back to this scale's native quantity.
    fn from_julian_day(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S> — the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on day count `S`.
///
/// Internally stores a single `Days` quantity whose interpretation depends on
/// `S: TimeScale`.  The struct is `Copy` and zero-cost: `PhantomData` is
/// zero-sized, so `Time<S>` is layout-identical to `Days` (a single `f64`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Day corresponding to this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_julian_day(self.quantity)
    }

    /// Absolute Julian Day as scalar.
    #[inline]
    pub fn julian_day_value(&self) -> f64 {
        self.julian_day().value()
    }

    /// Build an instant from an absolute Julian Day.
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_julian_day(jd))
    }

    // ── cross-scale conversion ────────────────────────────────────────

    /// Convert this instant to another day count.
    ///
    /// ```text
    /// self → JD → target
    /// ```
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(S::to_julian_day(self.quantity))
    }

    // ── calendar helpers ──────────────────────────────────────────────

    /// Build an instant from a calendar timestamp in any time zone.
    ///
    /// The timestamp is first normalised to UTC, then converted with the
    /// Gregorian day-count formula.  The Gregorian leap-year correction is
    /// applied unconditionally, so dates before the 1582 reform do not match
    /// the historical Julian calendar.
    pub fn from_calendar<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&Utc);
        let jd = calendar::julian_day_from_utc(&utc);
        log::trace!("{utc} -> JD {jd}");
        Self::from_julian_day(Days::new(jd))
    }

    /// Convert to a UTC calendar timestamp.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_calendar(&self) -> Option<DateTime<Utc>> {
        let jd = self.julian_day_value();
        let utc = calendar::utc_from_julian_day(jd);
        if utc.is_none() {
            log::warn!("JD {jd} is outside the representable calendar range");
        }
        utc
    }
}

impl<S: TimeScale> Default for Time<S> {
    /// Day count zero on the scale's own axis.
    #[inline]
    fn default() -> Self {
        Self::new(0.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::super::scales::{JD, MJD};
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_julian_day_creation() {
        let jd = Time::<JD>::new(2_451_545.0);
        assert_eq!(jd.quantity(), Days::new(2_451_545.0));
        assert_eq!(Time::<JD>::new(1000.0).value(), 1000.0);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Time::<JD>::default().value(), 0.0);
        assert_eq!(Time::<MJD>::default().value(), 0.0);
        assert_eq!(Time::<MJD>::default().julian_day_value(), 2_400_000.5);
    }

    #[test]
    fn test_from_calendar_normalises_zone() {
        // 2000-01-01T14:00+02:00 is J2000.0
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = cest.with_ymd_and_hms(2000, 1, 1, 14, 0, 0).unwrap();
        let jd = Time::<JD>::from_calendar(&local);
        assert_eq!(jd.value(), 2_451_545.0);
    }

    #[test]
    fn test_mjd_from_calendar() {
        let dt = Utc.with_ymd_and_hms(1858, 11, 17, 0, 0, 0).unwrap();
        let mjd = Time::<MJD>::from_calendar(&dt);
        assert_eq!(mjd.value(), 0.0);
    }

    #[test]
    fn test_calendar_roundtrip_j2000() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = Time::<JD>::from_calendar(&dt);
        assert_eq!(jd.to_calendar(), Some(dt));

        let mjd = Time::<MJD>::from_calendar(&dt);
        assert_eq!(mjd.to_calendar(), Some(dt));
    }

    #[test]
    fn test_out_of_range_calendar_is_none() {
        assert!(Time::<JD>::new(1e12).to_calendar().is_none());
        assert!(Time::<JD>::new(f64::NAN).to_calendar().is_none());
    }

    #[test]
    fn test_into_days() {
        let jd = Time::<JD>::new(2_451_547.5);
        let days: Days = jd.into();
        assert_eq!(days, 2_451_547.5);

        let roundtrip = Time::<JD>::from(days);
        assert_eq!(roundtrip, jd);
    }

    #[test]
    fn test_mjd_add_days() {
        let mjd = Time::<MJD>::new(59_000.0);
        let result = mjd + Days::new(1.5);
        assert_eq!(result.quantity(), Days::new(59_001.5));
    }

    #[test]
    fn test_mjd_sub_days() {
        let mjd = Time::<MJD>::new(59_000.0);
        let result = mjd - Days::new(1.5);
        assert_eq!(result.quantity(), Days::new(58_998.5));
    }

    #[test]
    fn test_mjd_sub_mjd() {
        let mjd1 = Time::<MJD>::new(59_001.0);
        let mjd2 = Time::<MJD>::new(59_000.0);
        let diff = mjd1 - mjd2;
        assert_eq!(diff, 1.0);
    }

    #[test]
    fn test_mjd_comparison() {
        let mjd1 = Time::<MJD>::new(59_000.0);
        let mjd2 = Time::<MJD>::new(59_001.0);
        assert!(mjd1 < mjd2);
        assert!(mjd2 > mjd1);
    }

    #[test]
    fn test_display_jd() {
        let jd = Time::<JD>::new(2_451_545.0);
        let s = format!("{jd}");
        assert!(s.contains("Julian Day"));
    }

    #[test]
    fn test_display_mjd() {
        let mjd = Time::<MJD>::new(51_544.5);
        let s = format!("{mjd}");
        assert!(s.contains("MJD"));
    }

    #[test]
    fn test_add_assign_sub_assign() {
        let mut jd = Time::<JD>::new(2_451_545.0);
        jd += Days::new(1.0);
        assert_eq!(jd.quantity(), Days::new(2_451_546.0));
        jd -= Days::new(0.5);
        assert_eq!(jd.quantity(), Days::new(2_451_545.5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_bare_number() {
        let jd = Time::<JD>::new(2_451_545.25);
        let json = serde_json::to_string(&jd).unwrap();
        assert_eq!(json, "2451545.25");
        let back: Time<JD> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, jd);
    }
}

//! Single-harmonic sunrise/sunset almanac.
//!
//! Estimates solar declination from the ordinal day of year with one sine
//! term (Cooper 1969), solves the hour angle at which the sun reaches a fixed
//! altitude of -0.83° (atmospheric refraction plus the sun's apparent
//! radius), and converts the resulting solar times to civil clock times with
//! a standard-meridian longitude correction and the three-term equation of
//! time (Woolf 1968).
//!
//! The whole pipeline is a pure function of its inputs with a single decision
//! point: when the hour-angle cosine leaves [-1, 1] the sun never crosses the
//! threshold that day and [`RiseSet::NoEvent`] is returned.

use crate::calendar::day_of_year;
use crate::error::{check_coordinates, check_date};
use crate::math::{acos, cos, degrees_to_radians, radians_to_degrees, sin};
use crate::types::{LocalHours, RiseSet, StandardMeridian};
use crate::Result;

#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Sun altitude at rise and set, in degrees (refraction and apparent radius).
const SUN_ALTITUDE: f64 = -0.83;

/// Degrees of hour angle per hour of Earth rotation.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Mean angular speed of the sun along its annual cycle, degrees per day.
const DEGREES_PER_DAY: f64 = 360.0 / 365.0;

/// Phase reference of the annual cycle: day 81 falls near the spring equinox.
const EQUINOX_DAY: f64 = 81.0;

/// Minutes per hour conversion factor.
const MINUTES_PER_HOUR: f64 = 60.0;

/// Annual cycle phase angle for day-of-year `n`, in radians.
fn annual_phase(n: u32) -> f64 {
    degrees_to_radians(DEGREES_PER_DAY * (f64::from(n) - EQUINOX_DAY))
}

/// Estimates the solar declination for day-of-year `n`, in degrees.
///
/// Single-harmonic approximation `23.45 · sin(360/365 · (N - 81))`: zero at
/// the spring equinox, +23.45° at the June solstice, -23.45° at the December
/// solstice.
#[must_use]
pub fn declination(n: u32) -> f64 {
    23.45 * sin(annual_phase(n))
}

/// Equation of time for day-of-year `n`, in minutes.
///
/// The day-dependent offset between apparent (sundial) and mean (clock)
/// solar time, caused by Earth's elliptical orbit and axial tilt. Positive
/// values mean the sundial runs ahead of the clock.
#[must_use]
pub fn equation_of_time(n: u32) -> f64 {
    let b = annual_phase(n);
    9.87 * sin(2.0 * b) - 7.53 * cos(b) - 1.5 * sin(b)
}

/// Solves the hour angle at which the sun crosses the rise/set altitude.
///
/// Returns half the angular width of the day arc in degrees (0-180), or
/// `None` when the sun stays entirely above or below the threshold all day
/// (polar day or polar night).
///
/// The polar check is exact: a cosine of precisely ±1.0 is a grazing day
/// whose arc collapses to a point but still yields times.
#[must_use]
pub fn hour_angle(latitude: f64, n: u32) -> Option<f64> {
    let lat = degrees_to_radians(latitude);
    let dec = degrees_to_radians(declination(n));
    let alt = degrees_to_radians(SUN_ALTITUDE);

    let cos_h = (sin(alt) - sin(lat) * sin(dec)) / (cos(lat) * cos(dec));

    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }

    Some(radians_to_degrees(acos(cos_h)))
}

/// Computes local sunrise and sunset clock times for a calendar date.
///
/// This is the permissive numeric core: inputs are taken at face value and
/// the function never fails. An impossible calendar date or an out-of-range
/// latitude produces a numerically degenerate (but defined) result instead
/// of an error; use [`sun_times_checked`] to reject such inputs first.
///
/// # Arguments
/// * `year` - Year
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees, positive north
/// * `longitude` - Observer longitude in degrees, positive east
/// * `meridian` - Standard meridian of the target civil timezone
///
/// # Returns
/// [`RiseSet::Day`] with both times normalized into [0, 24), or
/// [`RiseSet::NoEvent`] when the sun does not cross the horizon threshold.
///
/// # Example
/// ```
/// use riseset::{almanac, StandardMeridian};
///
/// let result = almanac::sun_times(2024, 6, 21, 28.6139, 77.2090, StandardMeridian::INDIA);
///
/// let sunrise = result.sunrise().unwrap().clock();
/// assert_eq!((sunrise.hour(), sunrise.minute()), (5, 23));
/// ```
#[must_use]
pub fn sun_times(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    meridian: StandardMeridian,
) -> RiseSet {
    let n = day_of_year(year, month, day);

    let Some(h) = hour_angle(latitude, n) else {
        return RiseSet::NoEvent;
    };

    // Half the day arc as hours either side of local solar noon
    let half_day = h / DEGREES_PER_HOUR;

    let longitude_correction = (meridian.degrees() - longitude) / DEGREES_PER_HOUR;
    let eot_hours = equation_of_time(n) / MINUTES_PER_HOUR;

    let sunrise = normalize_hours(12.0 - half_day + longitude_correction - eot_hours);
    let sunset = normalize_hours(12.0 + half_day + longitude_correction - eot_hours);

    RiseSet::Day {
        sunrise: LocalHours::from_hours(sunrise),
        sunset: LocalHours::from_hours(sunset),
    }
}

/// Computes sunrise and sunset after validating coordinates and date.
///
/// The calculation is [`sun_times`], unchanged; only the boundary differs.
///
/// # Errors
/// Returns `InvalidLatitude`, `InvalidLongitude`, or `InvalidDate` before
/// the calculation runs.
pub fn sun_times_checked(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    meridian: StandardMeridian,
) -> Result<RiseSet> {
    check_coordinates(latitude, longitude)?;
    check_date(year, month, day)?;
    Ok(sun_times(year, month, day, latitude, longitude, meridian))
}

/// Computes sunrise and sunset for any chrono date-like value.
///
/// Convenience wrapper accepting anything that implements `Datelike`
/// (`NaiveDate`, `NaiveDateTime`, `DateTime<Tz>`, ...). Only the calendar
/// date is read; the date is valid by construction, so just the coordinates
/// are checked.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
/// coordinates.
///
/// # Example
/// ```
/// # #[cfg(feature = "chrono")] {
/// use chrono::NaiveDate;
/// use riseset::{almanac, StandardMeridian};
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
/// let meridian = StandardMeridian::from_utc_offset(5.5).unwrap();
///
/// let result = almanac::sun_times_for_date(date, 28.6139, 77.2090, meridian).unwrap();
/// assert!(result.is_day());
/// # }
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sun_times_for_date<D: Datelike>(
    date: D,
    latitude: f64,
    longitude: f64,
    meridian: StandardMeridian,
) -> Result<RiseSet> {
    check_coordinates(latitude, longitude)?;
    Ok(sun_times(
        date.year(),
        date.month(),
        date.day(),
        latitude,
        longitude,
        meridian,
    ))
}

/// Folds an hour value into [0, 24).
///
/// The corrections are bounded well inside a day, so a single adjustment in
/// each direction suffices; this must not loop.
fn normalize_hours(hours: f64) -> f64 {
    let mut h = hours;
    if h < 0.0 {
        h += 24.0;
    }
    if h >= 24.0 {
        h -= 24.0;
    }
    h
}

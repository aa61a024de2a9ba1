//! Core data types for sunrise/sunset calculations.

use crate::error::check_meridian;
use crate::math::floor;
use crate::Result;
use core::fmt;

/// Reference longitude that defines a civil timezone's solar-noon alignment.
///
/// Clock noon in a timezone coincides with solar noon at its standard
/// meridian; observers east or west of it see the sun culminate earlier or
/// later. The meridian is an explicit parameter of every calculation so the
/// same core serves any target timezone.
///
/// # Example
/// ```
/// # use riseset::StandardMeridian;
/// // India Standard Time runs on 82.5° E (UTC+05:30)
/// assert_eq!(StandardMeridian::INDIA.degrees(), 82.5);
/// assert_eq!(StandardMeridian::from_utc_offset(5.5).unwrap(), StandardMeridian::INDIA);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardMeridian {
    /// Meridian longitude in degrees, positive east
    degrees: f64,
}

impl StandardMeridian {
    /// The India Standard Time reference meridian (82.5° E, UTC+05:30).
    pub const INDIA: Self = Self { degrees: 82.5 };

    /// Creates a standard meridian from a longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidMeridian` if `degrees` is outside -180 to +180.
    pub fn new(degrees: f64) -> Result<Self> {
        check_meridian(degrees)?;
        Ok(Self { degrees })
    }

    /// Creates a standard meridian from a UTC offset in hours.
    ///
    /// The Earth rotates 15° of longitude per hour, so UTC+05:30 maps to
    /// 82.5° E. This is plain arithmetic on the offset, not a timezone
    /// database lookup.
    ///
    /// # Errors
    /// Returns `InvalidMeridian` if the resulting longitude is outside
    /// -180 to +180 degrees.
    pub fn from_utc_offset(hours: f64) -> Result<Self> {
        Self::new(hours * 15.0)
    }

    /// Gets the meridian longitude in degrees (positive east).
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }
}

/// Civil clock time as fractional hours since local midnight.
///
/// Calculation outputs are normalized into [0, 24).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalHours(f64);

impl LocalHours {
    /// Creates a `LocalHours` from fractional hours since midnight.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw fractional hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Converts to a whole-hour, whole-minute clock reading.
    ///
    /// Both components truncate rather than round: 5.9999 hours reads as
    /// 05:59, not 06:00.
    ///
    /// # Example
    /// ```
    /// # use riseset::LocalHours;
    /// let clock = LocalHours::from_hours(19.363).clock();
    /// assert_eq!(clock.hour(), 19);
    /// assert_eq!(clock.minute(), 21);
    /// ```
    #[must_use]
    pub fn clock(&self) -> ClockTime {
        let hour = floor(self.0);
        let minute = floor((self.0 - hour) * 60.0);
        ClockTime {
            hour: hour as u8,
            minute: minute as u8,
        }
    }
}

/// A wall-clock reading in whole hours and minutes.
///
/// Produced by [`LocalHours::clock`]; for normalized inputs the hour is in
/// 0-23 and the minute in 0-59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Gets the hour component (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Gets the minute component (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    /// Zero-padded `HH:MM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Result of a sunrise/sunset calculation for one date and location.
///
/// At high latitudes the sun can stay above or below the horizon threshold
/// for the whole day; both collapse to [`RiseSet::NoEvent`], a valid terminal
/// outcome rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSet {
    /// The sun crosses the horizon threshold: one sunrise and one sunset.
    Day {
        /// Local civil time of sunrise.
        sunrise: LocalHours,
        /// Local civil time of sunset.
        sunset: LocalHours,
    },
    /// The sun never crosses the threshold on this date at this latitude
    /// (polar day or polar night); no times exist.
    NoEvent,
}

impl RiseSet {
    /// Checks if this is a day with a sunrise and a sunset.
    #[must_use]
    pub const fn is_day(&self) -> bool {
        matches!(self, Self::Day { .. })
    }

    /// Checks if the sun never crosses the horizon threshold.
    #[must_use]
    pub const fn is_no_event(&self) -> bool {
        matches!(self, Self::NoEvent)
    }

    /// Gets the sunrise time, if one exists.
    #[must_use]
    pub const fn sunrise(&self) -> Option<LocalHours> {
        if let Self::Day { sunrise, .. } = self {
            Some(*sunrise)
        } else {
            None
        }
    }

    /// Gets the sunset time, if one exists.
    #[must_use]
    pub const fn sunset(&self) -> Option<LocalHours> {
        if let Self::Day { sunset, .. } = self {
            Some(*sunset)
        } else {
            None
        }
    }
}

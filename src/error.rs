//! Error types for the riseset library.

use crate::calendar::days_in_month;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the validating API boundary.
///
/// The numeric core itself never fails; a day without sunrise or sunset is
/// the [`crate::RiseSet::NoEvent`] outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid standard meridian (must be between -180 and +180 degrees).
    InvalidMeridian {
        /// The invalid meridian longitude provided.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidMeridian { value } => {
                write!(
                    f,
                    "invalid standard meridian {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid standard meridian error.
    #[must_use]
    pub const fn invalid_meridian(value: f64) -> Self {
        Self::InvalidMeridian { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a standard meridian longitude.
///
/// # Errors
/// Returns `InvalidMeridian` if the value is outside -180 to +180 degrees.
pub fn check_meridian(degrees: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&degrees) {
        return Err(Error::invalid_meridian(degrees));
    }
    Ok(())
}

/// Validates a calendar date exists in the Gregorian calendar.
///
/// # Errors
/// Returns `InvalidDate` if the month is outside 1-12 or the day is out of
/// range for the given month and year.
pub fn check_date(year: i32, month: u32, day: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_date("month must be between 1 and 12"));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(Error::invalid_date("day is out of range for month"));
    }
    Ok(())
}

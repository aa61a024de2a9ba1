//! # Sunrise/Sunset Almanac
//!
//! Local sunrise and sunset clock times from latitude, longitude, and a
//! calendar date, using a compact single-harmonic solar model referenced to a
//! configurable standard meridian.
//!
//! The pipeline is a single straight-line computation: calendar date →
//! ordinal day of year → solar declination → horizon hour angle →
//! equation-of-time and longitude corrections → clock times truncated to
//! whole minutes. The one alternate outcome is [`RiseSet::NoEvent`], reported
//! when the sun never crosses the horizon threshold on the given day (polar
//! day or polar night).
//!
//! Accuracy is on the order of a few minutes at mid latitudes, which suits
//! almanac-style display. For arcsecond-grade ephemerides use a full solar
//! position algorithm instead.
//!
//! ## Features
//!
//! - `std` (default): Use standard library math functions (usually faster than `libm`)
//! - `chrono` (default): Enable the `Datelike` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! riseset = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! riseset = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! riseset = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Numeric API
//! ```rust
//! use riseset::{almanac, RiseSet, StandardMeridian};
//!
//! // Sunrise/sunset for New Delhi on the 2024 summer solstice,
//! // referenced to the Indian standard meridian (82.5° E).
//! let result = almanac::sun_times(2024, 6, 21, 28.6139, 77.2090, StandardMeridian::INDIA);
//!
//! match result {
//!     RiseSet::Day { sunrise, sunset } => {
//!         println!("Sunrise: {}", sunrise.clock()); // 05:23
//!         println!("Sunset:  {}", sunset.clock()); // 19:21
//!     }
//!     RiseSet::NoEvent => println!("Sun does not rise or set on this date."),
//! }
//! ```
//!
//! ### Date types (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use riseset::{almanac, StandardMeridian};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
//! let meridian = StandardMeridian::from_utc_offset(5.5).unwrap();
//!
//! let result = almanac::sun_times_for_date(date, 28.6139, 77.2090, meridian).unwrap();
//! assert!(result.is_day());
//! # }
//! ```
//!
//! ## References
//!
//! - Cooper, P.I. (1969). The absorption of radiation in solar stills.
//!   Solar Energy, 12(3), 333-346. (single-harmonic declination)
//! - Woolf, H.M. (1968). On the computation of solar elevation angles and the
//!   determination of sunrise and sunset times. NASA TM X-1646.
//!   (three-term equation of time)

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{ClockTime, LocalHours, RiseSet, StandardMeridian};

// Algorithm module
pub mod almanac;

// Core modules
pub mod calendar;
pub mod error;
pub mod types;

// Internal modules
mod math;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_wrapper_matches_core() {
        let core = almanac::sun_times(2024, 3, 20, 48.21, 16.37, StandardMeridian::INDIA);
        let checked =
            almanac::sun_times_checked(2024, 3, 20, 48.21, 16.37, StandardMeridian::INDIA).unwrap();

        // The wrapper validates and then runs the identical calculation
        assert_eq!(core, checked);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_wrapper_matches_core() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let meridian = StandardMeridian::from_utc_offset(1.0).unwrap();

        let core = almanac::sun_times(2024, 3, 20, 48.21, 16.37, meridian);
        let via_date = almanac::sun_times_for_date(date, 48.21, 16.37, meridian).unwrap();

        assert_eq!(core, via_date);
    }
}

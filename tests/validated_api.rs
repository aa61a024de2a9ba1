//! Boundary validation wrappers around the permissive core

use riseset::{almanac, Error, StandardMeridian};

#[test]
fn test_invalid_coordinates_rejected() {
    let result = almanac::sun_times_checked(2023, 6, 21, 91.0, 0.0, StandardMeridian::INDIA);
    assert!(matches!(result, Err(Error::InvalidLatitude { value }) if value == 91.0));

    let result = almanac::sun_times_checked(2023, 6, 21, 0.0, 181.0, StandardMeridian::INDIA);
    assert!(matches!(result, Err(Error::InvalidLongitude { .. })));

    let result = almanac::sun_times_checked(2023, 6, 21, f64::NAN, 0.0, StandardMeridian::INDIA);
    assert!(result.is_err());
}

#[test]
fn test_invalid_dates_rejected() {
    // Month out of range
    let result = almanac::sun_times_checked(2023, 13, 1, 0.0, 0.0, StandardMeridian::INDIA);
    assert!(matches!(result, Err(Error::InvalidDate { .. })));

    // Day out of range for the month
    let result = almanac::sun_times_checked(2023, 2, 30, 0.0, 0.0, StandardMeridian::INDIA);
    assert!(matches!(result, Err(Error::InvalidDate { .. })));

    // February 29 exists only in leap years
    assert!(almanac::sun_times_checked(2024, 2, 29, 0.0, 0.0, StandardMeridian::INDIA).is_ok());
    assert!(almanac::sun_times_checked(1900, 2, 29, 0.0, 0.0, StandardMeridian::INDIA).is_err());
}

#[test]
fn test_checked_wrapper_does_not_change_the_math() {
    let core = almanac::sun_times(2024, 9, 1, 40.71, -74.01, StandardMeridian::INDIA);
    let checked =
        almanac::sun_times_checked(2024, 9, 1, 40.71, -74.01, StandardMeridian::INDIA).unwrap();
    assert_eq!(core, checked);
}

#[test]
fn test_permissive_core_accepts_what_the_wrapper_rejects() {
    // The core still produces a (numerically wrong) result for day 35
    let result = almanac::sun_times(2023, 1, 35, 28.6139, 77.2090, StandardMeridian::INDIA);
    assert!(result.is_day());

    assert!(
        almanac::sun_times_checked(2023, 1, 35, 28.6139, 77.2090, StandardMeridian::INDIA)
            .is_err()
    );
}

#[cfg(feature = "chrono")]
#[test]
fn test_chrono_api_agrees_with_numeric_api() {
    use chrono::NaiveDate;

    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    let meridian = StandardMeridian::INDIA;

    let via_date = almanac::sun_times_for_date(date, 28.6139, 77.2090, meridian).unwrap();
    let via_numbers = almanac::sun_times(2024, 6, 21, 28.6139, 77.2090, meridian);

    assert_eq!(via_date, via_numbers);
}

#[cfg(feature = "chrono")]
#[test]
fn test_chrono_api_reads_only_the_date() {
    use chrono::NaiveDate;

    let morning = NaiveDate::from_ymd_opt(2024, 6, 21)
        .unwrap()
        .and_hms_opt(3, 15, 0)
        .unwrap();
    let evening = NaiveDate::from_ymd_opt(2024, 6, 21)
        .unwrap()
        .and_hms_opt(22, 45, 0)
        .unwrap();

    let a = almanac::sun_times_for_date(morning, 28.6139, 77.2090, StandardMeridian::INDIA)
        .unwrap();
    let b = almanac::sun_times_for_date(evening, 28.6139, 77.2090, StandardMeridian::INDIA)
        .unwrap();

    assert_eq!(a, b);
}

#[cfg(feature = "chrono")]
#[test]
fn test_chrono_api_rejects_bad_coordinates() {
    use chrono::NaiveDate;

    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    let result = almanac::sun_times_for_date(date, -95.0, 0.0, StandardMeridian::INDIA);
    assert!(matches!(result, Err(Error::InvalidLatitude { .. })));
}

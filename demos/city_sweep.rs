//! Sunrise/sunset sweep across diverse cities, each against its own civil timezone meridian.

use chrono::NaiveDate;
use riseset::{almanac, RiseSet, StandardMeridian};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    utc_offset: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "New Delhi, India",
            latitude: 28.6139,
            longitude: 77.2090,
            utc_offset: 5.5,
        },
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            utc_offset: 1.0,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            utc_offset: 12.0,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            utc_offset: 8.0,
        },
        City {
            name: "Brasília, Brazil",
            latitude: -15.8,
            longitude: -47.85,
            utc_offset: -3.0,
        },
    ];

    let dates = [
        ("June Solstice", NaiveDate::from_ymd_opt(2024, 6, 21).unwrap()),
        ("December Solstice", NaiveDate::from_ymd_opt(2024, 12, 21).unwrap()),
    ];

    for city in &cities {
        let meridian = StandardMeridian::from_utc_offset(city.utc_offset)?;

        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E (UTC{:+})",
            city.latitude, city.longitude, city.utc_offset
        );

        for (label, date) in &dates {
            let result =
                almanac::sun_times_for_date(*date, city.latitude, city.longitude, meridian)?;
            match result {
                RiseSet::Day { sunrise, sunset } => {
                    println!(
                        "  {label}: sunrise {}, sunset {}",
                        sunrise.clock(),
                        sunset.clock()
                    );
                }
                RiseSet::NoEvent => {
                    println!("  {label}: sun does not rise or set");
                }
            }
        }
        println!();
    }

    Ok(())
}

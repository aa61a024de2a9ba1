//! Numeric API usage without chrono: plain integers in, clock times out.

use riseset::{almanac, RiseSet, StandardMeridian};

fn main() {
    let (latitude, longitude) = (28.6139, 77.2090);

    for (year, month, day) in [(2024, 3, 20), (2024, 6, 21), (2024, 12, 21)] {
        let result =
            almanac::sun_times(year, month, day, latitude, longitude, StandardMeridian::INDIA);

        match result {
            RiseSet::Day { sunrise, sunset } => {
                println!(
                    "{year}-{month:02}-{day:02}  sunrise {} IST, sunset {} IST",
                    sunrise.clock(),
                    sunset.clock()
                );
            }
            RiseSet::NoEvent => {
                println!("{year}-{month:02}-{day:02}  sun does not rise or set");
            }
        }
    }
}

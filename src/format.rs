//! Display formatting for readings and coordinates

use chrono::NaiveDateTime;

/// Nearest whole number, halves rounded up (-2.5 → -2, 2.5 → 3).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Whole-degree temperature, e.g. `22°C`.
pub fn celsius(value: f64) -> String {
    format!("{}°C", round_half_up(value))
}

/// Latitude or longitude to four decimals, e.g. `51.5085°`.
pub fn coordinate(value: f64) -> String {
    format!("{}°", fixed_half_away(value, 4))
}

/// Fixed-point text where exact halves round away from zero
/// (`12.15625` → `12.1563`), matching how browsers print coordinates.
/// std formatting sends exact halves to the even digit instead.
fn fixed_half_away(value: f64, decimals: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    // Wide enough to hold any finite f64 exactly
    let exact = format!("{magnitude:.1074}");
    let tail = exact
        .split_once('.')
        .and_then(|(_, fraction)| fraction.get(decimals..))
        .unwrap_or("");
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    let digits = if is_tie {
        increment_last_digit(&exact[..exact.len() - tail.len()])
    } else {
        format!("{magnitude:.decimals$}")
    };
    format!("{sign}{digits}")
}

/// `12.1562` → `12.1563`, `9.9999` → `10.0000`
fn increment_last_digit(truncated: &str) -> String {
    let mut digits: Vec<char> = truncated.chars().collect();
    for digit in digits.iter_mut().rev() {
        match *digit {
            '.' => continue,
            '9' => *digit = '0',
            d => {
                *digit = char::from(d as u8 + 1);
                return digits.into_iter().collect();
            }
        }
    }
    std::iter::once('1').chain(digits).collect()
}

pub fn wind_speed(kmh: f64) -> String {
    format!("Wind: {kmh} km/h")
}

pub fn elevation(meters: f64) -> String {
    format!("{meters}m")
}

/// Wave height as reported, no rounding.
pub fn wave_height(meters: Option<f64>) -> String {
    match meters {
        Some(meters) => format!("{meters}m"),
        None => "N/A".to_string(),
    }
}

pub fn sea_temperature(celsius_value: Option<f64>) -> String {
    match celsius_value {
        Some(value) => celsius(value),
        None => "N/A".to_string(),
    }
}

/// Time of day in the en-US style, e.g. `1:05:00 PM`.
pub fn time_of_day(at: &NaiveDateTime) -> String {
    at.format("%-I:%M:%S %p").to_string()
}

/// Convert WMO weather code to human-readable description
pub fn weather_description(code: Option<u8>) -> &'static str {
    let Some(code) = code else {
        return "Unknown";
    };
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_celsius_rounds_instead_of_truncating() {
        assert_eq!(celsius(21.6), "22°C");
        assert_eq!(celsius(21.4), "21°C");
        assert_eq!(celsius(21.5), "22°C");
    }

    #[test]
    fn test_negative_halves_round_up() {
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(celsius(-0.4), "0°C");
    }

    #[test]
    fn test_coordinate_four_decimals() {
        assert_eq!(coordinate(51.50853), "51.5085°");
        assert_eq!(coordinate(-0.12574), "-0.1257°");
        assert_eq!(coordinate(10.0), "10.0000°");
    }

    #[test]
    fn test_coordinate_exact_halves_round_away_from_zero() {
        assert_eq!(coordinate(12.15625), "12.1563°");
        assert_eq!(coordinate(0.03125), "0.0313°");
        assert_eq!(coordinate(-0.03125), "-0.0313°");
        assert_eq!(coordinate(-12.15625), "-12.1563°");
        assert_eq!(coordinate(-157.40625), "-157.4063°");
        // Just above the half once stored as f64
        assert_eq!(coordinate(9.99995), "10.0000°");
    }

    #[test]
    fn test_increment_last_digit_carries() {
        assert_eq!(increment_last_digit("12.1562"), "12.1563");
        assert_eq!(increment_last_digit("9.9999"), "10.0000");
        assert_eq!(increment_last_digit("0.0009"), "0.0010");
    }

    #[test]
    fn test_wave_height_unrounded() {
        assert_eq!(wave_height(Some(1.23)), "1.23m");
        assert_eq!(wave_height(Some(2.0)), "2m");
        assert_eq!(wave_height(None), "N/A");
    }

    #[test]
    fn test_sea_temperature() {
        assert_eq!(sea_temperature(Some(14.6)), "15°C");
        assert_eq!(sea_temperature(None), "N/A");
    }

    #[test]
    fn test_wind_and_elevation_keep_precision() {
        assert_eq!(wind_speed(12.5), "Wind: 12.5 km/h");
        assert_eq!(elevation(25.0), "25m");
    }

    #[test]
    fn test_time_of_day() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(13, 5, 0))
            .unwrap();
        assert_eq!(time_of_day(&at), "1:05:00 PM");
    }

    #[test]
    fn test_weather_description() {
        assert_eq!(weather_description(Some(0)), "Clear sky");
        assert_eq!(weather_description(Some(81)), "Rain showers");
        assert_eq!(weather_description(None), "Unknown");
    }
}

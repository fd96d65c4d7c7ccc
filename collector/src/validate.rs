use crate::errors::{Error, Result};
use crate::model::WeatherRecord;

const HUMIDITY_MIN: i16 = 0;
const HUMIDITY_MAX: i16 = 100;

/// Validates an extracted record before it is written
pub fn validate(record: &WeatherRecord) -> Result<()> {
    // Validate humidity
    if record.humidity_pct < HUMIDITY_MIN || record.humidity_pct > HUMIDITY_MAX {
        return Err(Error::Validation(format!(
            "Humidity {} out of range [{}, {}]",
            record.humidity_pct, HUMIDITY_MIN, HUMIDITY_MAX
        )));
    }

    // Validate wind speed
    if record.wind_speed_ms < 0.0 {
        return Err(Error::Validation(format!(
            "Wind speed {} cannot be negative",
            record.wind_speed_ms
        )));
    }

    // Validate country code
    if record.country.chars().count() != 2 {
        return Err(Error::Validation(format!(
            "Country '{}' is not a 2-letter code",
            record.country
        )));
    }

    // Validate city
    if record.city.is_empty() {
        return Err(Error::Validation("City name cannot be empty".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> WeatherRecord {
        WeatherRecord {
            city: "Florianópolis".to_string(),
            country: "BR".to_string(),
            temperature_c: 24.3,
            feels_like_c: 24.6,
            temp_min_c: 23.1,
            temp_max_c: 25.8,
            humidity_pct: 78,
            description: "nublado".to_string(),
            wind_speed_ms: 3.6,
            collected_at: 1724500000,
        }
    }

    #[test]
    fn test_valid_record() {
        assert!(validate(&sample_record()).is_ok());
    }

    #[test]
    fn test_invalid_humidity() {
        let mut record = sample_record();
        record.humidity_pct = 150; // Out of range

        assert!(validate(&record).is_err());
    }

    #[test]
    fn test_negative_wind_speed() {
        let mut record = sample_record();
        record.wind_speed_ms = -1.0;

        assert!(validate(&record).is_err());
    }

    #[test]
    fn test_bad_country_code() {
        let mut record = sample_record();
        record.country = "BRA".to_string();

        assert!(validate(&record).is_err());
    }

    #[test]
    fn test_empty_city() {
        let mut record = sample_record();
        record.city = "".to_string();

        assert!(validate(&record).is_err());
    }
}

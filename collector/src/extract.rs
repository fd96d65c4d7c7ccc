use crate::errors::{Error, Result};
use crate::model::WeatherRecord;
use crate::openweather::RawWeather;

/// Maps a raw response into a fully populated record. All-or-nothing: the
/// first absent required field aborts the whole extraction.
pub fn extract(raw: RawWeather) -> Result<WeatherRecord> {
    let main = raw.main.ok_or(Error::MissingField("main"))?;

    Ok(WeatherRecord {
        city: raw.name.ok_or(Error::MissingField("name"))?,
        country: raw
            .sys
            .and_then(|s| s.country)
            .ok_or(Error::MissingField("sys.country"))?,
        temperature_c: main.temp.ok_or(Error::MissingField("main.temp"))?,
        feels_like_c: main
            .feels_like
            .ok_or(Error::MissingField("main.feels_like"))?,
        temp_min_c: main.temp_min.ok_or(Error::MissingField("main.temp_min"))?,
        temp_max_c: main.temp_max.ok_or(Error::MissingField("main.temp_max"))?,
        humidity_pct: main.humidity.ok_or(Error::MissingField("main.humidity"))?,
        description: raw
            .weather
            .into_iter()
            .next()
            .and_then(|w| w.description)
            .ok_or(Error::MissingField("weather[0].description"))?,
        wind_speed_ms: raw
            .wind
            .and_then(|w| w.speed)
            .ok_or(Error::MissingField("wind.speed"))?,
        collected_at: raw.dt.ok_or(Error::MissingField("dt"))?,
    })
}

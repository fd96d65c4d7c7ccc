/// One extracted, validated weather observation for a city
#[derive(Debug, Clone)]
pub struct WeatherRecord {
    pub city: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_pct: i16,
    pub description: String,
    pub wind_speed_ms: f64,
    pub collected_at: i64,
}

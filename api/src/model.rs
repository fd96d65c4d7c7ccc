use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored weather observation, as read back from the clima table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
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
    pub inserted_at: DateTime<Utc>,
}

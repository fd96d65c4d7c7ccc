use crate::errors::Result;
use crate::model::WeatherRecord;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

const RECORD_COLUMNS: &str = "city, country, temperature_c, feels_like_c, temp_min_c, \
     temp_max_c, humidity_pct, description, wind_speed_ms, collected_at, inserted_at";

pub async fn make_pool(options: PgConnectOptions) -> Result<PgPool> {
    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await?;

    info!("Database connection established");
    info!("Running database migrations...");
    sqlx::migrate!("../migrations").run(&pool).await?;
    info!("Migrations completed");

    Ok(pool)
}

/// Every stored record, newest first. An empty table yields an empty list.
pub async fn list_all(pool: &PgPool) -> std::result::Result<Vec<WeatherRecord>, sqlx::Error> {
    let query = format!(
        "SELECT {} FROM clima ORDER BY inserted_at DESC",
        RECORD_COLUMNS
    );

    sqlx::query_as::<_, WeatherRecord>(&query)
        .fetch_all(pool)
        .await
}

/// Records whose city contains `needle`, ignoring case, newest first. LIKE
/// metacharacters in the needle are escaped so it always matches as a
/// literal substring.
pub async fn list_by_city(
    pool: &PgPool,
    needle: &str,
) -> std::result::Result<Vec<WeatherRecord>, sqlx::Error> {
    let pattern = format!("%{}%", escape_like(needle));
    let query = format!(
        r#"SELECT {} FROM clima WHERE city ILIKE $1 ESCAPE '\' ORDER BY inserted_at DESC"#,
        RECORD_COLUMNS
    );

    sqlx::query_as::<_, WeatherRecord>(&query)
        .bind(pattern)
        .fetch_all(pool)
        .await
}

fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

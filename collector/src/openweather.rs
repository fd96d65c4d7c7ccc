use crate::errors::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const INITIAL_BACKOFF_MS: u64 = 100;
const MAX_BACKOFF_MS: u64 = 2000;

/// Raw current-weather response. Every field is optional so that
/// partially-shaped payloads still decode; extraction decides what is
/// actually required.
#[derive(Debug, Deserialize)]
pub struct RawWeather {
    pub name: Option<String>,
    pub sys: Option<RawSys>,
    pub main: Option<RawMain>,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
    pub wind: Option<RawWind>,
    pub dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RawSys {
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawMain {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<i16>,
}

#[derive(Debug, Deserialize)]
pub struct RawCondition {
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawWind {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, OPENWEATHER_URL.to_string())
    }

    fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    /// Fetches current weather for one city, metric units, pt_br descriptions.
    pub async fn fetch_current(&self, city: &str) -> Result<RawWeather> {
        info!("Fetching weather for city: {}", city);

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "pt_br"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        match status {
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
            StatusCode::NOT_FOUND => Err(Error::CityNotFound(city.to_string())),
            s if !s.is_success() => Err(Error::UnexpectedStatus {
                status: s.as_u16(),
                body: truncate_body(&body),
            }),
            _ => Ok(serde_json::from_str(&body)?),
        }
    }

    /// Fetch with bounded retry. `retries` is the number of extra attempts
    /// after the first; 0 keeps the single-attempt behavior.
    pub async fn fetch_current_with_retry(&self, city: &str, retries: u32) -> Result<RawWeather> {
        let max_attempts = retries + 1;
        let mut attempt = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            attempt += 1;

            match self.fetch_current(city).await {
                Ok(raw) => {
                    if attempt > 1 {
                        info!("Fetch succeeded on attempt {}", attempt);
                    }
                    return Ok(raw);
                }
                Err(e) => {
                    if attempt >= max_attempts || !is_transient_fetch_error(&e) {
                        return Err(e);
                    }

                    warn!(
                        "Fetch failed (attempt {}/{}): {}. Retrying in {}ms...",
                        attempt, max_attempts, e, backoff_ms
                    );

                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms = (backoff_ms * 2).min(MAX_BACKOFF_MS);
                }
            }
        }
    }
}

/// Only transport-level failures are worth a second attempt; an auth or
/// not-found result will not change on retry.
fn is_transient_fetch_error(error: &Error) -> bool {
    match error {
        Error::Transport(e) => e.is_timeout() || e.is_connect(),
        _ => false,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // The cut must land on a char boundary; pt_br bodies carry accents.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

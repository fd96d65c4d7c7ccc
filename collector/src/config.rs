use clap::Parser;
use sqlx::postgres::PgConnectOptions;

/// One fetch cycle: fetch current weather for a city from OpenWeather and
/// store the extracted record in PostgreSQL.
#[derive(Parser, Debug)]
#[command(name = "collector")]
pub struct Config {
    /// City to fetch weather for
    #[arg(long, env = "WEATHER_CITY", default_value = "Florianópolis")]
    pub city: String,

    /// OpenWeather API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Database name
    #[arg(long, env = "POSTGRES_DB")]
    pub db_name: String,

    /// Database user
    #[arg(long, env = "POSTGRES_USER")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "POSTGRES_PASSWORD", hide_env_values = true)]
    pub db_password: String,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Extra attempts for transient fetch/insert failures (0 = no retry)
    #[arg(long, env = "WEATHER_RETRIES", default_value_t = 0)]
    pub retries: u32,
}

impl Config {
    /// Connection options built field by field, so credentials never pass
    /// through URL parsing.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config {
            city: "Florianópolis".to_string(),
            api_key: "k".to_string(),
            db_name: "climadb".to_string(),
            db_user: "clima".to_string(),
            db_password: "secret".to_string(),
            db_host: "localhost".to_string(),
            db_port: 5432,
            retries: 0,
        }
    }

    #[test]
    fn test_connect_options_carry_all_parts() {
        let options = sample_config().connect_options();

        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "clima");
        assert_eq!(options.get_database(), Some("climadb"));
    }

    #[test]
    fn test_connect_options_keep_reserved_characters() {
        let mut config = sample_config();
        config.db_user = "user@corp".to_string();
        config.db_password = "p@ss/w?rd#1".to_string();

        let options = config.connect_options();

        assert_eq!(options.get_username(), "user@corp");
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_database(), Some("climadb"));
    }
}

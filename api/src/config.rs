use clap::Parser;
use sqlx::postgres::PgConnectOptions;

/// Read-only HTTP API over the clima table.
#[derive(Parser, Debug)]
#[command(name = "api")]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HTTP_ADDR", default_value = "0.0.0.0:8080")]
    pub http_addr: String,

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

    #[test]
    fn test_connect_options_keep_reserved_characters() {
        let config = Config {
            http_addr: "0.0.0.0:8080".to_string(),
            db_name: "climadb".to_string(),
            db_user: "clima".to_string(),
            db_password: "p@ss/w?rd#1".to_string(),
            db_host: "localhost".to_string(),
            db_port: 5432,
        };

        let options = config.connect_options();

        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "clima");
        assert_eq!(options.get_database(), Some("climadb"));
    }
}

use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Listen port, from PORT (default 8080)
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: parse_port(env::var("PORT").ok()),
        }
    }
}

fn parse_port(value: Option<String>) -> u16 {
    value.and_then(|p| p.parse().ok()).unwrap_or(8080)
}

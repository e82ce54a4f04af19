use anyhow::{Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST").context("DATABASE_HOST must be set")?,
            port: std::env::var("DATABASE_PORT")
                .context("DATABASE_PORT must be set")?
                .parse::<u16>()
                .context("Failed to parse DATABASE_PORT")?,
            username: std::env::var("DATABASE_USERNAME")
                .context("DATABASE_USERNAME must be set")?,
            password: std::env::var("DATABASE_PASSWORD")
                .context("DATABASE_PASSWORD must be set")?,
            database: std::env::var("DATABASE_NAME").context("DATABASE_NAME must be set")?,
        };
        let server = ServerConfig {
            port: match std::env::var("SERVER_PORT") {
                Ok(val) => val.parse::<u16>().context("Failed to parse SERVER_PORT")?,
                Err(_) => 8080,
            },
        };
        Ok(Self { database, server })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct ServerConfig {
    pub port: u16,
}

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::env;

/// Connection settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: Option<u32>,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, DbErr> {
        // A missing .env file is fine, the variables may come from the process
        dotenvy::dotenv().ok();

        let url = env::var("DATABASE_URL")
            .map_err(|_| DbErr::Custom("DATABASE_URL must be set".to_string()))?;

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => Some(value.parse().map_err(|e| {
                DbErr::Custom(format!("invalid DATABASE_MAX_CONNECTIONS {value:?}: {e}"))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url.clone());
        if let Some(max) = self.max_connections {
            options.max_connections(max);
        }
        options.sqlx_logging_level(log::LevelFilter::Debug);
        options
    }
}

/// Creates a database connection
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    let config = DatabaseConfig::from_env()?;
    log::info!("Connecting to database (max connections: {:?})", config.max_connections);
    Database::connect(config.connect_options()).await
}

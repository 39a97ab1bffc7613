use crate::core::{AppError, Result};
use serde::Deserialize;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL").map_err(|_| AppError::config("DATABASE_URL not set"))?,
            pool_size: env::var("DATABASE_POOL_SIZE")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .map_err(|_| AppError::config("Invalid DATABASE_POOL_SIZE"))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| AppError::config("Invalid DATABASE_MAX_CONNECTIONS"))?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(AppError::config(
                "DATABASE_MAX_CONNECTIONS must be greater than 0",
            ));
        }

        if self.pool_size > self.max_connections {
            return Err(AppError::config(
                "DATABASE_POOL_SIZE cannot exceed DATABASE_MAX_CONNECTIONS",
            ));
        }

        Ok(())
    }

    /// Create a MySQL connection pool
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(&self.url)
            .await
            .map_err(AppError::Database)
    }

    /// Create the pool and bring the schema up to date
    pub async fn connect_and_migrate(&self) -> Result<MySqlPool> {
        let pool = self.create_pool().await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(pool)
    }
}

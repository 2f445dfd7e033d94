use std::{
    ops::{Deref, DerefMut},
    str::FromStr,
    time::Duration,
};

use sqlx::{
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};

#[derive(Debug, Clone)]
pub struct Pool(SqlitePool);

impl Deref for Pool {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Pool {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<SqlitePool> for Pool {
    fn from(pool: SqlitePool) -> Self {
        Self(pool)
    }
}

pub async fn establish_connection(
    database_path: &str,
    create_if_missing: bool,
) -> Result<Pool, anyhow::Error> {
    let opts = SqliteConnectOptions::from_str(database_path)?
        .create_if_missing(create_if_missing)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .idle_timeout(Duration::from_secs(60))
        .max_lifetime(Duration::from_secs(180))
        .connect_with(opts)
        .await?;

    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        match e {
            MigrateError::VersionMismatch(version) => {
                warn!("migration {version} was previously applied but has been modified")
            }
            _ => {
                return Err(e.into());
            }
        }
    }

    Ok(Pool(pool))
}

// A single-connection in-memory database so every test sees the same data.
#[cfg(test)]
pub async fn establish_test_connection() -> Pool {
    let opts = SqliteConnectOptions::new().in_memory(true).foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    Pool(pool)
}

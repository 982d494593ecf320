//! All things related to the storage of trips and their sub-resources
//!
//! Every function acquires its own connection from the pool and releases it before returning,
//! deletes that have to clean up dependent rows run inside a single transaction.

use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveDateTime;
use chrono::Utc;
use sqlx::Encode;
use sqlx::FromRow;
use sqlx::QueryBuilder;
use sqlx::Sqlite;
use sqlx::SqlitePool;
use sqlx::Type;
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::sqlite::SqliteRow;
use thiserror::Error;

pub use Config as DatabaseConfig;
pub use form_types::*;

use crate::patch::Patch;
use crate::utils::env_var_or_else;

mod accommodations;
mod destinations;
mod form_types;
mod itinerary_items;
mod notes;
mod transports;
mod trips;

/// Migrator to create the tables on startup
static MIGRATOR: Migrator = sqlx::migrate!();

/// Used when `TRAVEL_PLANNER_DB_URL` is not set, a file next to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://travel_planner.db";

/// Storage errors
#[derive(Debug, Error)]
pub enum Error {
    /// A connection error with the storage
    #[error("Connection error: {0}")]
    Connection(String),

    /// The schema could not be created
    #[error("Migrations could not run: {0}")]
    Migration(String),
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Database configuration
pub enum Config {
    /// Detect configuration from environment
    DetectConfig,

    /// Use existing connection
    ExistingConnection(SqlitePool),
}

/// SQLite storage
#[derive(Clone)]
pub struct Database {
    /// Pool of connections
    connection_pool: SqlitePool,
}

impl Database {
    /// Create a new SQLite storage
    pub async fn from_config(config: Config) -> Result<Self> {
        match config {
            Config::DetectConfig => Self::new().await,
            Config::ExistingConnection(pool) => Self::new_with_pool(pool).await,
        }
    }

    /// Create SQLite storage
    ///
    /// Use the `TRAVEL_PLANNER_DB_URL` environment variable, the database file is created when
    /// it does not exist yet
    ///
    /// Migrations will be run
    async fn new() -> Result<Self> {
        let database_connection_string =
            env_var_or_else("TRAVEL_PLANNER_DB_URL", || DEFAULT_DATABASE_URL.to_string());

        let options = SqliteConnectOptions::from_str(&database_connection_string)
            .map_err(connection_error)?
            .create_if_missing(true)
            .foreign_keys(true);

        let connection_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await
            .map_err(connection_error)?;

        tracing::info!("Connected to {database_connection_string}");

        Self::new_with_pool(connection_pool).await
    }

    /// Create SQLite storage with existing pool
    ///
    /// Migrations will be run
    async fn new_with_pool(connection_pool: SqlitePool) -> Result<Self> {
        MIGRATOR
            .run(&connection_pool)
            .await
            .map_err(|err| Error::Migration(err.to_string()))?;

        Ok(Self { connection_pool })
    }
}

/// Timestamp for `created_at`/`updated_at`
///
/// Generated here instead of by SQLite to keep sub-second precision, lists are ordered on it
fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// `UPDATE` of a single row, setting only the columns of a partial update
///
/// Columns that are not part of the update are left alone in the database, not overwritten with
/// an earlier read of the row
struct UpdateStatement {
    query: QueryBuilder<'static, Sqlite>,
}

impl UpdateStatement {
    fn new(table: &str) -> Self {
        let mut query = QueryBuilder::new("UPDATE ");
        query.push(table).push(" SET updated_at = ").push_bind(now());

        Self { query }
    }

    /// Set a nullable column, `Patch::Null` clears it
    fn set<T>(&mut self, column: &str, patch: Patch<T>) -> &mut Self
    where
        T: 'static + Encode<'static, Sqlite> + Type<Sqlite>,
    {
        match patch {
            Patch::Missing => {}
            Patch::Null => {
                self.query.push(", ").push(column).push(" = NULL");
            }
            Patch::Value(value) => {
                self.query.push(", ").push(column).push(" = ").push_bind(value);
            }
        }

        self
    }

    /// Set a column that can not be cleared, `Patch::Null` is never written
    fn set_required<T>(&mut self, column: &str, patch: Patch<T>) -> &mut Self
    where
        T: 'static + Encode<'static, Sqlite> + Type<Sqlite>,
    {
        if let Patch::Value(value) = patch {
            self.query.push(", ").push(column).push(" = ").push_bind(value);
        }

        self
    }

    /// Run the statement for the row with this ID, `None` when there is no such row
    async fn fetch_optional<O>(mut self, id: i64, pool: &SqlitePool) -> Result<Option<O>>
    where
        O: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        self.query
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" RETURNING *");

        self.query
            .build_query_as::<O>()
            .fetch_optional(pool)
            .await
            .map_err(connection_error)
    }
}

/// Convert `SQLx` to storage connection error
fn connection_error<E>(err: E) -> Error
where
    E: std::error::Error,
{
    Error::Connection(err.to_string())
}

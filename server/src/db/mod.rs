//! Storage for venues, artists and shows.
//!
//! Handlers only see the [`Directory`] trait. [`PgDirectory`] is the
//! production store; [`MemoryDirectory`] backs runs without a database and
//! the test suite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use thiserror::Error;

use crate::models::{
    Artist, ArtistChanges, ArtistSummary, NewArtist, NewShow, NewVenue, SearchHit, Show,
    ShowListing, Venue, VenueChanges, VenueSummary,
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryDirectory;
pub use postgres::PgDirectory;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    Query(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{entity} with id {id} does not exist")]
    MissingReference { entity: &'static str, id: i32 },
}

#[async_trait]
pub trait Directory: Send + Sync {
    async fn venue_summaries(&self, now: DateTime<Utc>) -> Result<Vec<VenueSummary>, DbError>;
    async fn search_venues(&self, term: &str, now: DateTime<Utc>)
        -> Result<Vec<SearchHit>, DbError>;
    async fn venue(&self, id: i32) -> Result<Option<Venue>, DbError>;
    async fn venue_shows(&self, id: i32) -> Result<Vec<ShowListing>, DbError>;
    async fn venue_ids(&self) -> Result<Vec<i32>, DbError>;
    async fn create_venue(&self, venue: NewVenue) -> Result<Venue, DbError>;
    async fn update_venue(&self, id: i32, changes: VenueChanges)
        -> Result<Option<Venue>, DbError>;
    /// Removes the venue and, by cascade, its shows. Returns the removed row.
    async fn delete_venue(&self, id: i32) -> Result<Option<Venue>, DbError>;

    async fn artist_summaries(&self) -> Result<Vec<ArtistSummary>, DbError>;
    async fn search_artists(&self, term: &str, now: DateTime<Utc>)
        -> Result<Vec<SearchHit>, DbError>;
    async fn artist(&self, id: i32) -> Result<Option<Artist>, DbError>;
    async fn artist_shows(&self, id: i32) -> Result<Vec<ShowListing>, DbError>;
    async fn artist_ids(&self) -> Result<Vec<i32>, DbError>;
    async fn create_artist(&self, artist: NewArtist) -> Result<Artist, DbError>;
    async fn update_artist(&self, id: i32, changes: ArtistChanges)
        -> Result<Option<Artist>, DbError>;
    async fn delete_artist(&self, id: i32) -> Result<Option<Artist>, DbError>;

    async fn shows(&self) -> Result<Vec<ShowListing>, DbError>;
    async fn create_show(&self, show: NewShow) -> Result<Show, DbError>;
}

pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!().run(pool).await?;
    Ok(())
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;

use super::{DbError, Directory};
use crate::models::{
    Artist, ArtistChanges, ArtistSummary, NewArtist, NewShow, NewVenue, SearchHit, Show,
    ShowListing, Venue, VenueChanges, VenueSummary,
};

const VENUE_COLUMNS: &str = "id, name, genres, address, city, state, phone, website, \
     facebook_link, image_link, seeking_talent, seeking_description, time_created, time_updated";

const ARTIST_COLUMNS: &str = "id, name, genres, city, state, phone, website, facebook_link, \
     image_link, seeking_venue, seeking_description, time_created, time_updated";

const SHOW_LISTING_SELECT: &str = "SELECT s.id AS show_id, s.venue_id, v.name AS venue_name, \
     v.image_link AS venue_image_link, s.artist_id, a.name AS artist_name, \
     a.image_link AS artist_image_link, s.start_time \
     FROM show s \
     JOIN venue v ON v.id = s.venue_id \
     JOIN artist a ON a.id = s.artist_id";

/// Postgres-backed directory. Every write runs in its own transaction; an
/// early return drops the transaction, which rolls it back and hands the
/// connection back to the pool.
#[derive(Debug, Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn show_listings_where(
        &self,
        column: &str,
        id: i32,
    ) -> Result<Vec<ShowListing>, DbError> {
        let sql = format!("{SHOW_LISTING_SELECT} WHERE s.{column} = $1 ORDER BY s.start_time");
        let shows = sqlx::query_as::<_, ShowListing>(&sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(shows)
    }
}

#[async_trait]
impl Directory for PgDirectory {
    async fn venue_summaries(&self, now: DateTime<Utc>) -> Result<Vec<VenueSummary>, DbError> {
        let rows = sqlx::query_as::<_, VenueSummary>(
            "SELECT v.id, v.name, v.city, v.state, \
                    COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows \
             FROM venue v \
             LEFT JOIN show s ON s.venue_id = v.id \
             GROUP BY v.id \
             ORDER BY v.id",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn search_venues(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<SearchHit>, DbError> {
        let hits = sqlx::query_as::<_, SearchHit>(
            "SELECT v.id, v.name, \
                    COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows \
             FROM venue v \
             LEFT JOIN show s ON s.venue_id = v.id \
             WHERE strpos(lower(v.name), lower($1)) > 0 \
             GROUP BY v.id \
             ORDER BY v.id",
        )
        .bind(term)
        .bind(now)
        .fetch_all(&self.pool)
        .await?;
        Ok(hits)
    }

    async fn venue(&self, id: i32) -> Result<Option<Venue>, DbError> {
        let sql = format!("SELECT {VENUE_COLUMNS} FROM venue WHERE id = $1");
        let venue = sqlx::query_as::<_, Venue>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(venue)
    }

    async fn venue_shows(&self, id: i32) -> Result<Vec<ShowListing>, DbError> {
        self.show_listings_where("venue_id", id).await
    }

    async fn venue_ids(&self) -> Result<Vec<i32>, DbError> {
        let ids = sqlx::query_scalar::<_, i32>("SELECT id FROM venue")
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    async fn create_venue(&self, venue: NewVenue) -> Result<Venue, DbError> {
        let sql = format!(
            "INSERT INTO venue (name, genres, address, city, state, phone, website, \
                 facebook_link, image_link, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {VENUE_COLUMNS}"
        );

        let mut tx = self.pool.begin().await?;
        let created = sqlx::query_as::<_, Venue>(&sql)
            .bind(venue.name)
            .bind(venue.genres)
            .bind(venue.address)
            .bind(venue.city)
            .bind(venue.state)
            .bind(venue.phone)
            .bind(venue.website)
            .bind(venue.facebook_link)
            .bind(venue.image_link)
            .bind(venue.seeking_talent)
            .bind(venue.seeking_description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(created)
    }

    async fn update_venue(
        &self,
        id: i32,
        changes: VenueChanges,
    ) -> Result<Option<Venue>, DbError> {
        let sql = format!(
            "UPDATE venue SET \
                 name = $2, genres = $3, address = $4, city = $5, state = $6, \
                 phone = COALESCE($7, phone), \
                 website = COALESCE($8, website), \
                 facebook_link = COALESCE($9, facebook_link), \
                 image_link = COALESCE($10, image_link), \
                 seeking_talent = $11, \
                 seeking_description = COALESCE($12, seeking_description), \
                 time_updated = now() \
             WHERE id = $1 \
             RETURNING {VENUE_COLUMNS}"
        );

        let mut tx = self.pool.begin().await?;
        let updated = sqlx::query_as::<_, Venue>(&sql)
            .bind(id)
            .bind(changes.name)
            .bind(changes.genres)
            .bind(changes.address)
            .bind(changes.city)
            .bind(changes.state)
            .bind(changes.phone)
            .bind(changes.website)
            .bind(changes.facebook_link)
            .bind(changes.image_link)
            .bind(changes.seeking_talent)
            .bind(changes.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_venue(&self, id: i32) -> Result<Option<Venue>, DbError> {
        let sql = format!("DELETE FROM venue WHERE id = $1 RETURNING {VENUE_COLUMNS}");

        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query_as::<_, Venue>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(deleted)
    }

    async fn artist_summaries(&self) -> Result<Vec<ArtistSummary>, DbError> {
        let artists = sqlx::query_as::<_, ArtistSummary>("SELECT id, name FROM artist ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(artists)
    }

    async fn search_artists(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<SearchHit>, DbError> {
        let hits = sqlx::query_as::<_, SearchHit>(
            "SELECT a.id, a.name, \
                    COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows \
             FROM artist a \
             LEFT JOIN show s ON s.artist_id = a.id \
             WHERE strpos(lower(a.name), lower($1)) > 0 \
             GROUP BY a.id \
             ORDER BY a.id",
        )
        .bind(term)
        .bind(now)
        .fetch_all(&self.pool)
        .await?;
        Ok(hits)
    }

    async fn artist(&self, id: i32) -> Result<Option<Artist>, DbError> {
        let sql = format!("SELECT {ARTIST_COLUMNS} FROM artist WHERE id = $1");
        let artist = sqlx::query_as::<_, Artist>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(artist)
    }

    async fn artist_shows(&self, id: i32) -> Result<Vec<ShowListing>, DbError> {
        self.show_listings_where("artist_id", id).await
    }

    async fn artist_ids(&self) -> Result<Vec<i32>, DbError> {
        let ids = sqlx::query_scalar::<_, i32>("SELECT id FROM artist")
            .fetch_all(&self.pool)
            .await?;
        Ok(ids)
    }

    async fn create_artist(&self, artist: NewArtist) -> Result<Artist, DbError> {
        let sql = format!(
            "INSERT INTO artist (name, genres, city, state, phone, website, facebook_link, \
                 image_link, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {ARTIST_COLUMNS}"
        );

        let mut tx = self.pool.begin().await?;
        let created = sqlx::query_as::<_, Artist>(&sql)
            .bind(artist.name)
            .bind(artist.genres)
            .bind(artist.city)
            .bind(artist.state)
            .bind(artist.phone)
            .bind(artist.website)
            .bind(artist.facebook_link)
            .bind(artist.image_link)
            .bind(artist.seeking_venue)
            .bind(artist.seeking_description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(created)
    }

    async fn update_artist(
        &self,
        id: i32,
        changes: ArtistChanges,
    ) -> Result<Option<Artist>, DbError> {
        let sql = format!(
            "UPDATE artist SET \
                 name = $2, genres = $3, city = $4, state = $5, \
                 phone = COALESCE($6, phone), \
                 website = COALESCE($7, website), \
                 facebook_link = COALESCE($8, facebook_link), \
                 image_link = COALESCE($9, image_link), \
                 seeking_venue = $10, \
                 seeking_description = COALESCE($11, seeking_description), \
                 time_updated = now() \
             WHERE id = $1 \
             RETURNING {ARTIST_COLUMNS}"
        );

        let mut tx = self.pool.begin().await?;
        let updated = sqlx::query_as::<_, Artist>(&sql)
            .bind(id)
            .bind(changes.name)
            .bind(changes.genres)
            .bind(changes.city)
            .bind(changes.state)
            .bind(changes.phone)
            .bind(changes.website)
            .bind(changes.facebook_link)
            .bind(changes.image_link)
            .bind(changes.seeking_venue)
            .bind(changes.seeking_description)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_artist(&self, id: i32) -> Result<Option<Artist>, DbError> {
        let sql = format!("DELETE FROM artist WHERE id = $1 RETURNING {ARTIST_COLUMNS}");

        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query_as::<_, Artist>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(deleted)
    }

    async fn shows(&self) -> Result<Vec<ShowListing>, DbError> {
        let sql = format!("{SHOW_LISTING_SELECT} ORDER BY s.id");
        let shows = sqlx::query_as::<_, ShowListing>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(shows)
    }

    async fn create_show(&self, show: NewShow) -> Result<Show, DbError> {
        let mut tx = self.pool.begin().await?;
        let created = sqlx::query_as::<_, Show>(
            "INSERT INTO show (venue_id, artist_id, start_time) \
             VALUES ($1, $2, $3) \
             RETURNING id, venue_id, artist_id, start_time",
        )
        .bind(show.venue_id)
        .bind(show.artist_id)
        .bind(show.start_time)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(created)
    }
}

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{DbError, Directory};
use crate::listing::count_upcoming;
use crate::models::{
    Artist, ArtistChanges, ArtistSummary, NewArtist, NewShow, NewVenue, SearchHit, Show,
    ShowListing, Venue, VenueChanges, VenueSummary,
};

#[derive(Debug, Default)]
struct Tables {
    venues: BTreeMap<i32, Venue>,
    artists: BTreeMap<i32, Artist>,
    shows: BTreeMap<i32, Show>,
    last_venue_id: i32,
    last_artist_id: i32,
    last_show_id: i32,
}

fn next_id(last: &mut i32) -> i32 {
    *last += 1;
    *last
}

fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

impl Tables {
    fn listing(&self, show: &Show) -> Option<ShowListing> {
        let venue = self.venues.get(&show.venue_id)?;
        let artist = self.artists.get(&show.artist_id)?;
        Some(ShowListing {
            show_id: show.id,
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: show.start_time,
        })
    }

    fn listings_where(&self, keep: impl Fn(&Show) -> bool) -> Vec<ShowListing> {
        let mut shows: Vec<ShowListing> = self
            .shows
            .values()
            .filter(|&show| keep(show))
            .filter_map(|show| self.listing(show))
            .collect();
        shows.sort_by_key(|show| show.start_time);
        shows
    }

    fn upcoming_at_venue(&self, venue_id: i32, now: DateTime<Utc>) -> i64 {
        count_upcoming(
            self.shows
                .values()
                .filter(|show| show.venue_id == venue_id)
                .map(|show| show.start_time),
            now,
        )
    }

    fn upcoming_for_artist(&self, artist_id: i32, now: DateTime<Utc>) -> i64 {
        count_upcoming(
            self.shows
                .values()
                .filter(|show| show.artist_id == artist_id)
                .map(|show| show.start_time),
            now,
        )
    }
}

/// In-process directory guarded by a single lock, so each operation is atomic.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    tables: RwLock<Tables>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn venue_summaries(&self, now: DateTime<Utc>) -> Result<Vec<VenueSummary>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .venues
            .values()
            .map(|venue| VenueSummary {
                id: venue.id,
                name: venue.name.clone(),
                city: venue.city.clone(),
                state: venue.state.clone(),
                num_upcoming_shows: tables.upcoming_at_venue(venue.id, now),
            })
            .collect())
    }

    async fn search_venues(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<SearchHit>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .venues
            .values()
            .filter(|venue| name_matches(&venue.name, term))
            .map(|venue| SearchHit {
                id: venue.id,
                name: venue.name.clone(),
                num_upcoming_shows: tables.upcoming_at_venue(venue.id, now),
            })
            .collect())
    }

    async fn venue(&self, id: i32) -> Result<Option<Venue>, DbError> {
        Ok(self.tables.read().await.venues.get(&id).cloned())
    }

    async fn venue_shows(&self, id: i32) -> Result<Vec<ShowListing>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.listings_where(|show| show.venue_id == id))
    }

    async fn venue_ids(&self) -> Result<Vec<i32>, DbError> {
        Ok(self.tables.read().await.venues.keys().copied().collect())
    }

    async fn create_venue(&self, venue: NewVenue) -> Result<Venue, DbError> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.last_venue_id);
        let created = Venue {
            id,
            name: venue.name,
            genres: venue.genres,
            address: Some(venue.address),
            city: Some(venue.city),
            state: Some(venue.state),
            phone: venue.phone,
            website: venue.website,
            facebook_link: venue.facebook_link,
            image_link: venue.image_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            time_created: Utc::now(),
            time_updated: None,
        };
        tables.venues.insert(id, created.clone());
        Ok(created)
    }

    async fn update_venue(
        &self,
        id: i32,
        changes: VenueChanges,
    ) -> Result<Option<Venue>, DbError> {
        let mut tables = self.tables.write().await;
        Ok(tables.venues.get_mut(&id).map(|venue| {
            changes.apply(venue);
            venue.time_updated = Some(Utc::now());
            venue.clone()
        }))
    }

    async fn delete_venue(&self, id: i32) -> Result<Option<Venue>, DbError> {
        let mut tables = self.tables.write().await;
        let deleted = tables.venues.remove(&id);
        if deleted.is_some() {
            tables.shows.retain(|_, show| show.venue_id != id);
        }
        Ok(deleted)
    }

    async fn artist_summaries(&self) -> Result<Vec<ArtistSummary>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .artists
            .values()
            .map(|artist| ArtistSummary {
                id: artist.id,
                name: artist.name.clone(),
            })
            .collect())
    }

    async fn search_artists(
        &self,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<SearchHit>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .artists
            .values()
            .filter(|artist| name_matches(&artist.name, term))
            .map(|artist| SearchHit {
                id: artist.id,
                name: artist.name.clone(),
                num_upcoming_shows: tables.upcoming_for_artist(artist.id, now),
            })
            .collect())
    }

    async fn artist(&self, id: i32) -> Result<Option<Artist>, DbError> {
        Ok(self.tables.read().await.artists.get(&id).cloned())
    }

    async fn artist_shows(&self, id: i32) -> Result<Vec<ShowListing>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.listings_where(|show| show.artist_id == id))
    }

    async fn artist_ids(&self) -> Result<Vec<i32>, DbError> {
        Ok(self.tables.read().await.artists.keys().copied().collect())
    }

    async fn create_artist(&self, artist: NewArtist) -> Result<Artist, DbError> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.last_artist_id);
        let created = Artist {
            id,
            name: artist.name,
            genres: artist.genres,
            city: Some(artist.city),
            state: Some(artist.state),
            phone: artist.phone,
            website: artist.website,
            facebook_link: artist.facebook_link,
            image_link: artist.image_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            time_created: Utc::now(),
            time_updated: None,
        };
        tables.artists.insert(id, created.clone());
        Ok(created)
    }

    async fn update_artist(
        &self,
        id: i32,
        changes: ArtistChanges,
    ) -> Result<Option<Artist>, DbError> {
        let mut tables = self.tables.write().await;
        Ok(tables.artists.get_mut(&id).map(|artist| {
            changes.apply(artist);
            artist.time_updated = Some(Utc::now());
            artist.clone()
        }))
    }

    async fn delete_artist(&self, id: i32) -> Result<Option<Artist>, DbError> {
        let mut tables = self.tables.write().await;
        let deleted = tables.artists.remove(&id);
        if deleted.is_some() {
            tables.shows.retain(|_, show| show.artist_id != id);
        }
        Ok(deleted)
    }

    async fn shows(&self) -> Result<Vec<ShowListing>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .shows
            .values()
            .filter_map(|show| tables.listing(show))
            .collect())
    }

    async fn create_show(&self, show: NewShow) -> Result<Show, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.venues.contains_key(&show.venue_id) {
            return Err(DbError::MissingReference {
                entity: "venue",
                id: show.venue_id,
            });
        }
        if !tables.artists.contains_key(&show.artist_id) {
            return Err(DbError::MissingReference {
                entity: "artist",
                id: show.artist_id,
            });
        }

        let id = next_id(&mut tables.last_show_id);
        let created = Show {
            id,
            venue_id: show.venue_id,
            artist_id: show.artist_id,
            start_time: show.start_time,
        };
        tables.shows.insert(id, created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_venue(name: &str) -> NewVenue {
        NewVenue {
            name: name.to_string(),
            genres: vec!["Jazz".to_string()],
            address: "1805 Geary Blvd".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("4155551234".to_string()),
            website: None,
            facebook_link: None,
            image_link: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }

    fn new_artist(name: &str) -> NewArtist {
        NewArtist {
            name: name.to_string(),
            genres: vec!["Rock n Roll".to_string()],
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            website: None,
            facebook_link: None,
            image_link: Some("https://example.com/petals.png".to_string()),
            seeking_venue: true,
            seeking_description: None,
        }
    }

    #[tokio::test]
    async fn test_sequential_creates_get_distinct_ids() {
        let directory = MemoryDirectory::new();
        let first = directory.create_venue(new_venue("The Fillmore")).await.unwrap();
        let second = directory.create_venue(new_venue("The Independent")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(directory.venue_ids().await.unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let directory = MemoryDirectory::new();
        directory.create_artist(new_artist("Guns N Petals")).await.unwrap();
        let second = directory.create_artist(new_artist("Matt Quevedo")).await.unwrap();
        directory.delete_artist(second.id).await.unwrap();

        let third = directory.create_artist(new_artist("The Wild Sax Band")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_and_counts_upcoming() {
        let directory = MemoryDirectory::new();
        let venue = directory.create_venue(new_venue("The Fillmore")).await.unwrap();
        directory.create_venue(new_venue("Bottom of the Hill")).await.unwrap();
        let artist = directory.create_artist(new_artist("Guns N Petals")).await.unwrap();

        let now = Utc::now();
        for offset in [Duration::days(-2), Duration::days(3)] {
            directory
                .create_show(NewShow {
                    venue_id: venue.id,
                    artist_id: artist.id,
                    start_time: now + offset,
                })
                .await
                .unwrap();
        }

        let hits = directory.search_venues("FILL", now).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "The Fillmore");
        assert_eq!(hits[0].num_upcoming_shows, 1);

        let everything = directory.search_venues("", now).await.unwrap();
        assert_eq!(everything.len(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_fields_left_empty() {
        let directory = MemoryDirectory::new();
        let venue = directory.create_venue(new_venue("The Fillmore")).await.unwrap();

        let changes = VenueChanges {
            name: "The Fillmore West".to_string(),
            genres: vec!["Blues".to_string()],
            address: "10 South Van Ness".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            website: Some("https://fillmore.example.com".to_string()),
            facebook_link: None,
            image_link: None,
            seeking_talent: true,
            seeking_description: None,
        };
        let updated = directory
            .update_venue(venue.id, changes)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "The Fillmore West");
        assert_eq!(updated.phone.as_deref(), Some("4155551234"));
        assert_eq!(updated.website.as_deref(), Some("https://fillmore.example.com"));
        assert!(updated.seeking_talent);
        assert!(updated.time_updated.is_some());
    }

    #[tokio::test]
    async fn test_delete_venue_cascades_to_shows() {
        let directory = MemoryDirectory::new();
        let venue = directory.create_venue(new_venue("The Fillmore")).await.unwrap();
        let artist = directory.create_artist(new_artist("Guns N Petals")).await.unwrap();
        directory
            .create_show(NewShow {
                venue_id: venue.id,
                artist_id: artist.id,
                start_time: Utc::now() + Duration::days(1),
            })
            .await
            .unwrap();

        let deleted = directory.delete_venue(venue.id).await.unwrap();
        assert_eq!(deleted.map(|v| v.name), Some("The Fillmore".to_string()));
        assert!(directory.shows().await.unwrap().is_empty());
        assert!(directory.artist_shows(artist.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_show_rejects_missing_references() {
        let directory = MemoryDirectory::new();
        let artist = directory.create_artist(new_artist("Guns N Petals")).await.unwrap();

        let result = directory
            .create_show(NewShow {
                venue_id: 42,
                artist_id: artist.id,
                start_time: Utc::now(),
            })
            .await;

        assert!(matches!(
            result,
            Err(DbError::MissingReference { entity: "venue", id: 42 })
        ));
    }
}

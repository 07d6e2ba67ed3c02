use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub time_created: DateTime<Utc>,
    pub time_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Same contract as [`crate::models::VenueChanges`]: `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistChanges {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistChanges {
    pub fn apply(self, artist: &mut Artist) {
        artist.name = self.name;
        artist.genres = self.genres;
        artist.city = Some(self.city);
        artist.state = Some(self.state);
        artist.seeking_venue = self.seeking_venue;
        if let Some(phone) = self.phone {
            artist.phone = Some(phone);
        }
        if let Some(website) = self.website {
            artist.website = Some(website);
        }
        if let Some(facebook_link) = self.facebook_link {
            artist.facebook_link = Some(facebook_link);
        }
        if let Some(image_link) = self.image_link {
            artist.image_link = Some(image_link);
        }
        if let Some(description) = self.seeking_description {
            artist.seeking_description = Some(description);
        }
    }
}

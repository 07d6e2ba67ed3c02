use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub time_created: DateTime<Utc>,
    pub time_updated: Option<DateTime<Utc>>,
}

/// Row backing the grouped venue listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVenue {
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// The fields an edit may overwrite. Optional fields left as `None` keep
/// their stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueChanges {
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueChanges {
    pub fn apply(self, venue: &mut Venue) {
        venue.name = self.name;
        venue.genres = self.genres;
        venue.address = Some(self.address);
        venue.city = Some(self.city);
        venue.state = Some(self.state);
        venue.seeking_talent = self.seeking_talent;
        if let Some(phone) = self.phone {
            venue.phone = Some(phone);
        }
        if let Some(website) = self.website {
            venue.website = Some(website);
        }
        if let Some(facebook_link) = self.facebook_link {
            venue.facebook_link = Some(facebook_link);
        }
        if let Some(image_link) = self.image_link {
            venue.image_link = Some(image_link);
        }
        if let Some(description) = self.seeking_description {
            venue.seeking_description = Some(description);
        }
    }
}

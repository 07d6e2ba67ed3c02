use garde::Validate;
use serde::Deserialize;

use super::{checkbox, empty_as_none, genre_selection, required, state_code, trimmed, web_link};
use crate::models::{NewVenue, Venue, VenueChanges};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct VenueForm {
    #[garde(custom(required))]
    pub name: String,
    #[garde(custom(required))]
    pub city: String,
    #[garde(custom(state_code))]
    pub state: String,
    #[garde(custom(required))]
    pub address: String,
    #[serde(deserialize_with = "empty_as_none")]
    #[garde(pattern(r"^\d{10}$"))]
    pub phone: Option<String>,
    #[garde(custom(genre_selection))]
    pub genres: Vec<String>,
    #[serde(deserialize_with = "empty_as_none")]
    #[garde(url, custom(web_link))]
    pub website: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    #[garde(url, custom(web_link))]
    pub image_link: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    #[garde(url, custom(web_link))]
    pub facebook_link: Option<String>,
    #[serde(deserialize_with = "checkbox")]
    #[garde(skip)]
    pub seeking_talent: bool,
    #[serde(deserialize_with = "empty_as_none")]
    #[garde(skip)]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn into_new_venue(self) -> NewVenue {
        NewVenue {
            name: trimmed(self.name),
            genres: self.genres,
            address: trimmed(self.address),
            city: trimmed(self.city),
            state: self.state,
            phone: self.phone,
            website: self.website,
            facebook_link: self.facebook_link,
            image_link: self.image_link,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
        }
    }

    pub fn into_changes(self) -> VenueChanges {
        VenueChanges {
            name: trimmed(self.name),
            genres: self.genres,
            address: trimmed(self.address),
            city: trimmed(self.city),
            state: self.state,
            phone: self.phone,
            website: self.website,
            facebook_link: self.facebook_link,
            image_link: self.image_link,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
        }
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone().unwrap_or_default(),
            state: venue.state.clone().unwrap_or_default(),
            address: venue.address.clone().unwrap_or_default(),
            phone: venue.phone.clone(),
            genres: venue.genres.clone(),
            website: venue.website.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

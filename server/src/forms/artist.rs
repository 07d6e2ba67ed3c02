use garde::Validate;
use serde::Deserialize;

use super::{checkbox, empty_as_none, genre_selection, required, state_code, trimmed, web_link};
use crate::models::{Artist, ArtistChanges, NewArtist};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ArtistForm {
    #[garde(custom(required))]
    pub name: String,
    #[garde(custom(required))]
    pub city: String,
    #[garde(custom(state_code))]
    pub state: String,
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
    pub seeking_venue: bool,
    #[serde(deserialize_with = "empty_as_none")]
    #[garde(skip)]
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn into_new_artist(self) -> NewArtist {
        NewArtist {
            name: trimmed(self.name),
            genres: self.genres,
            city: trimmed(self.city),
            state: self.state,
            phone: self.phone,
            website: self.website,
            facebook_link: self.facebook_link,
            image_link: self.image_link,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
        }
    }

    pub fn into_changes(self) -> ArtistChanges {
        ArtistChanges {
            name: trimmed(self.name),
            genres: self.genres,
            city: trimmed(self.city),
            state: self.state,
            phone: self.phone,
            website: self.website,
            facebook_link: self.facebook_link,
            image_link: self.image_link,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
        }
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone().unwrap_or_default(),
            state: artist.state.clone().unwrap_or_default(),
            phone: artist.phone.clone(),
            genres: artist.genres.clone(),
            website: artist.website.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FieldErrors;

    fn petals() -> ArtistForm {
        ArtistForm {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            image_link: Some("https://images.example.com/petals.jpg".to_string()),
            seeking_venue: true,
            ..ArtistForm::default()
        }
    }

    #[test]
    fn test_valid_artist_passes() {
        assert!(petals().validate().is_ok());
    }

    #[test]
    fn test_artist_phone_pattern() {
        let form = ArtistForm {
            phone: Some("326-123-5000".to_string()),
            ..petals()
        };
        let errors = FieldErrors::from(form.validate().unwrap_err());
        assert!(errors.contains("phone"));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn test_script_links_rejected() {
        let form = ArtistForm {
            image_link: Some("javascript:alert(1)".to_string()),
            facebook_link: Some("data:text/html,hi".to_string()),
            ..petals()
        };
        let errors = FieldErrors::from(form.validate().unwrap_err());
        assert!(errors.contains("image_link"));
        assert!(errors.contains("facebook_link"));
    }

    #[test]
    fn test_unknown_state_rejected() {
        let form = ArtistForm {
            state: "XX".to_string(),
            ..petals()
        };
        let errors = FieldErrors::from(form.validate().unwrap_err());
        assert_eq!(errors.get("state").len(), 1);
    }

    #[test]
    fn test_changes_carry_checkbox() {
        let changes = ArtistForm {
            seeking_venue: false,
            ..petals()
        }
        .into_changes();
        assert!(!changes.seeking_venue);
        assert_eq!(changes.image_link.as_deref(), Some("https://images.example.com/petals.jpg"));
    }
}

pub mod artist;
pub mod show;
pub mod venue;

pub use artist::{Artist, ArtistChanges, ArtistSummary, NewArtist};
pub use show::{NewShow, Show, ShowListing};
pub use venue::{NewVenue, Venue, VenueChanges, VenueSummary};

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A name-search match, shared by venue and artist search.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SearchHit {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

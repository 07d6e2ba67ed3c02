//! Grouping and past/upcoming partitioning behind the listing pages.
//!
//! Everything here is pure: callers pass the instant they consider "now".

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ShowListing, VenueSummary};

/// Displayed in place of a missing city or state.
pub const UNKNOWN_AREA: &str = "N/A";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AreaVenue {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<AreaVenue>,
}

/// Groups venues by (city, state). Areas come out ordered by state then city,
/// venues inside an area by id.
pub fn group_by_area(summaries: Vec<VenueSummary>) -> Vec<Area> {
    let mut areas: BTreeMap<(String, String), Vec<AreaVenue>> = BTreeMap::new();

    for summary in summaries {
        let state = summary.state.unwrap_or_else(|| UNKNOWN_AREA.to_string());
        let city = summary.city.unwrap_or_else(|| UNKNOWN_AREA.to_string());
        areas.entry((state, city)).or_default().push(AreaVenue {
            id: summary.id,
            name: summary.name,
            num_upcoming_shows: summary.num_upcoming_shows,
        });
    }

    areas
        .into_iter()
        .map(|((state, city), mut venues)| {
            venues.sort_by_key(|venue| venue.id);
            Area {
                city,
                state,
                venues,
            }
        })
        .collect()
}

/// Number of start times strictly after `now`.
pub fn count_upcoming<I>(start_times: I, now: DateTime<Utc>) -> i64
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    start_times.into_iter().filter(|start| *start > now).count() as i64
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PartitionedShows {
    pub past: Vec<ShowListing>,
    pub upcoming: Vec<ShowListing>,
}

impl PartitionedShows {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

/// Splits shows into past (`start_time < now`) and upcoming (`start_time >= now`).
pub fn partition_shows(shows: Vec<ShowListing>, now: DateTime<Utc>) -> PartitionedShows {
    let (past, upcoming) = shows.into_iter().partition(|show| show.start_time < now);
    PartitionedShows { past, upcoming }
}

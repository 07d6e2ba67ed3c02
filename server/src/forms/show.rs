use std::collections::HashSet;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};
use garde::Validate;
use serde::Deserialize;

use crate::models::NewShow;

/// Formats accepted for the naive start time; the first is what the form
/// pre-fills, the others cover `datetime-local` inputs.
const START_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Zone pre-selected on a blank form.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::US::Pacific;

/// Every `US/...` zone known to the tz database.
pub fn us_timezones() -> Vec<&'static str> {
    TZ_VARIANTS
        .iter()
        .map(|tz| tz.name())
        .filter(|name| name.starts_with("US/"))
        .collect()
}

/// Ids present when the submission was checked. Stale by the time the
/// insert runs; the foreign keys remain the real guard.
#[derive(Debug, Default, Clone)]
pub struct ShowContext {
    pub artist_ids: HashSet<i32>,
    pub venue_ids: HashSet<i32>,
}

impl ShowContext {
    pub fn new(
        artist_ids: impl IntoIterator<Item = i32>,
        venue_ids: impl IntoIterator<Item = i32>,
    ) -> Self {
        Self {
            artist_ids: artist_ids.into_iter().collect(),
            venue_ids: venue_ids.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[garde(context(ShowContext))]
#[serde(default)]
pub struct ShowForm {
    #[garde(custom(known_artist))]
    pub artist_id: String,
    #[garde(custom(known_venue))]
    pub venue_id: String,
    #[garde(custom(parseable_start_time))]
    pub start_time: String,
    #[garde(custom(us_timezone))]
    pub time_zone: String,
}

impl ShowForm {
    /// A blank form whose start time defaults to the current moment, as
    /// wall-clock time in the pre-selected zone.
    pub fn with_defaults(now: DateTime<Utc>) -> Self {
        Self {
            start_time: now
                .with_timezone(&DEFAULT_TIME_ZONE)
                .format(START_TIME_FORMATS[0])
                .to_string(),
            time_zone: DEFAULT_TIME_ZONE.name().to_string(),
            ..Self::default()
        }
    }

    /// Combines the naive start time with the chosen zone. `None` when the
    /// form was not validated first or the local time does not exist in
    /// that zone (spring-forward gap).
    pub fn into_new_show(self) -> Option<NewShow> {
        let start_time = localize(parse_start_time(&self.start_time)?, &self.time_zone)?;
        Some(NewShow {
            artist_id: self.artist_id.trim().parse().ok()?,
            venue_id: self.venue_id.trim().parse().ok()?,
            start_time,
        })
    }
}

fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn localize(naive: NaiveDateTime, time_zone: &str) -> Option<DateTime<Utc>> {
    let tz: Tz = time_zone.parse().ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

fn parse_id(value: &str) -> Result<i32, garde::Error> {
    let value = value.trim();
    if value.is_empty() {
        return Err(garde::Error::new("This field is required."));
    }
    value
        .parse()
        .map_err(|_| garde::Error::new(format!("'{value}' is not a valid id.")))
}

fn known_artist(value: &str, context: &ShowContext) -> garde::Result {
    let id = parse_id(value)?;
    if !context.artist_ids.contains(&id) {
        return Err(garde::Error::new(format!("No artist with id {id}.")));
    }
    Ok(())
}

fn known_venue(value: &str, context: &ShowContext) -> garde::Result {
    let id = parse_id(value)?;
    if !context.venue_ids.contains(&id) {
        return Err(garde::Error::new(format!("No venue with id {id}.")));
    }
    Ok(())
}

fn parseable_start_time(value: &str, _context: &ShowContext) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("This field is required."));
    }
    if parse_start_time(value).is_none() {
        return Err(garde::Error::new("Use the format YYYY-MM-DD HH:MM:SS."));
    }
    Ok(())
}

fn us_timezone(value: &str, _context: &ShowContext) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("This field is required."));
    }
    if !value.starts_with("US/") || value.parse::<Tz>().is_err() {
        return Err(garde::Error::new(format!("'{value}' is not a US time zone.")));
    }
    Ok(())
}

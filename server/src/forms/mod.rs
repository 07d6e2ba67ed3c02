//! Submitted-form schemas and the fixed vocabularies they validate against.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer};

pub mod artist;
pub mod show;
pub mod venue;

pub use artist::ArtistForm;
pub use show::{ShowContext, ShowForm};
pub use venue::VenueForm;

pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub const GENRES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Phone numbers are stored as exactly ten digits.
pub const PHONE_PATTERN: &str = r"^\d{10}$";

/// Name search box. An empty term matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}

/// Field name to messages, in field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<garde::Report> for FieldErrors {
    fn from(report: garde::Report) -> Self {
        let mut errors = FieldErrors::new();
        for (path, error) in report.iter() {
            let path = path.to_string();
            // `genres[2]` and friends are reported against the whole field.
            let field = path.split(['[', '.']).next().unwrap_or_default();
            errors.insert(field, error.to_string());
        }
        errors
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Treats an empty or whitespace-only submission as absent.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

/// Browsers send `y` for a ticked box and omit the key otherwise.
pub(crate) fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref() == Some("y"))
}

pub(crate) fn required(value: &str, _context: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("This field is required."));
    }
    Ok(())
}

pub(crate) fn state_code(value: &str, _context: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("This field is required."));
    }
    if !STATES.contains(&value) {
        return Err(garde::Error::new(format!("'{value}' is not a valid state.")));
    }
    Ok(())
}

pub(crate) fn genre_selection(value: &[String], _context: &()) -> garde::Result {
    if value.is_empty() {
        return Err(garde::Error::new("Select at least one genre."));
    }
    if let Some(unknown) = value.iter().find(|genre| !GENRES.contains(&genre.as_str())) {
        return Err(garde::Error::new(format!("'{unknown}' is not a valid genre.")));
    }
    Ok(())
}

/// Links are rendered as `href`/`src`, so only `http(s)://host...` is
/// accepted. `garde(url)` on the same field checks the rest of the shape.
pub(crate) fn web_link(value: &Option<String>, _context: &()) -> garde::Result {
    let Some(value) = value else {
        return Ok(());
    };
    let rest = ["http://", "https://"].iter().find_map(|scheme| {
        value
            .get(..scheme.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(scheme))
            .map(|_| &value[scheme.len()..])
    });
    let Some(rest) = rest else {
        return Err(garde::Error::new("Links must start with http:// or https://."));
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_and_port = authority.rsplit('@').next().unwrap_or_default();
    let host = host_and_port.split(':').next().unwrap_or_default();
    if host.is_empty() && !host_and_port.starts_with('[') {
        return Err(garde::Error::new("Links must include a host name."));
    }
    Ok(())
}

pub(crate) fn trimmed(value: String) -> String {
    value.trim().to_string()
}

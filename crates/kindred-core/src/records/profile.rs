//! Mentor/mentee directory profiles.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::raw::RawRow;
use super::{ContentRecord, Domain, Rejection};
use crate::error::{Error, InvalidInputError};
use crate::query::matches_search;
use crate::types::RecordId;

/// Whether a profile offers or seeks mentorship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Mentor,
    Mentee,
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileKind::Mentor => f.write_str("mentor"),
            ProfileKind::Mentee => f.write_str("mentee"),
        }
    }
}

impl FromStr for ProfileKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mentor" => Ok(ProfileKind::Mentor),
            "mentee" => Ok(ProfileKind::Mentee),
            other => Err(InvalidInputError::Other {
                message: format!("unknown profile kind '{}' (expected mentor or mentee)", other),
            }
            .into()),
        }
    }
}

/// Current availability of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => f.write_str("available"),
            Availability::Busy => f.write_str("busy"),
        }
    }
}

/// A community member profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: RecordId,
    pub name: String,
    pub avatar: String,
    pub kind: ProfileKind,
    pub availability: Availability,
    pub location: String,
    pub bio: String,
    pub skills: Vec<String>,
}

impl Profile {
    /// Normalize a raw remote row into a profile.
    ///
    /// Only `id` is required. A missing name becomes `"Unknown"`, the
    /// avatar falls back to a generated placeholder, and unrecognized
    /// kind/availability values take the conservative defaults.
    pub fn from_row(row: &Value) -> Result<Self, Rejection> {
        let raw = RawRow::new(Domain::Profile, row)?;

        let id = raw.id()?;
        let name = raw.str_or("name", "Unknown");
        let avatar = raw.opt_str("avatar").unwrap_or_else(|| {
            format!("https://api.dicebear.com/7.x/initials/svg?seed={}", name)
        });

        let kind = match raw.opt_str("type").as_deref() {
            Some("mentor") => ProfileKind::Mentor,
            _ => ProfileKind::Mentee,
        };

        let availability = match raw.opt_str("availability").as_deref() {
            Some("available") => Availability::Available,
            _ => Availability::Busy,
        };

        Ok(Self {
            id,
            name,
            avatar,
            kind,
            availability,
            location: raw.str_or("location", ""),
            bio: raw.str_or("bio", ""),
            skills: raw.string_list("skills"),
        })
    }

    /// The city component of the location, used for the location facet.
    pub fn city(&self) -> Option<&str> {
        self.location
            .split(',')
            .next()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

impl ContentRecord for Profile {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Search, type, and location filters for the profile directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileQuery {
    /// Free-text term matched against name, bio, and any skill.
    pub search: String,
    /// Kind filter; `None` matches both mentors and mentees.
    pub kind: Option<ProfileKind>,
    /// Location filter, matched by containment against the stored location.
    pub location: Option<String>,
}

impl ProfileQuery {
    /// Whether a single profile passes every active filter.
    pub fn matches(&self, profile: &Profile) -> bool {
        let term = self.search.trim().to_lowercase();
        let matches_search = term.is_empty()
            || matches_search(&self.search, &[&profile.name, &profile.bio])
            || profile
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&term));

        let matches_kind = match self.kind {
            Some(kind) => profile.kind == kind,
            None => true,
        };

        let matches_location = match &self.location {
            Some(location) => profile.location.contains(location.as_str()),
            None => true,
        };

        matches_search && matches_kind && matches_location
    }

    /// Filter a profile collection, preserving source order.
    pub fn apply(&self, profiles: &[Profile]) -> Vec<Profile> {
        profiles
            .iter()
            .filter(|profile| self.matches(profile))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile_row() -> Value {
        json!({
            "id": "p1",
            "name": "Rina Singh",
            "type": "mentor",
            "availability": "available",
            "location": "Mumbai, India",
            "bio": "Business consultant guiding new ventures.",
            "skills": ["Business Strategy", "Funding"],
        })
    }

    #[test]
    fn normalizes_valid_row() {
        let profile = Profile::from_row(&profile_row()).unwrap();
        assert_eq!(profile.kind, ProfileKind::Mentor);
        assert_eq!(profile.availability, Availability::Available);
        assert_eq!(profile.city(), Some("Mumbai"));
    }

    #[test]
    fn missing_name_defaults_to_unknown() {
        let row = json!({"id": "p2"});
        let profile = Profile::from_row(&row).unwrap();
        assert_eq!(profile.name, "Unknown");
        assert_eq!(profile.kind, ProfileKind::Mentee);
        assert_eq!(profile.availability, Availability::Busy);
        assert!(profile.avatar.contains("seed=Unknown"));
    }

    #[test]
    fn missing_id_is_rejected() {
        assert!(Profile::from_row(&json!({"name": "No Id"})).is_err());
    }

    #[test]
    fn null_skills_coerce_to_empty() {
        let row = json!({"id": "p3", "skills": null});
        let profile = Profile::from_row(&row).unwrap();
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn unrecognized_kind_defaults_to_mentee() {
        let row = json!({"id": "p4", "type": "guru"});
        let profile = Profile::from_row(&row).unwrap();
        assert_eq!(profile.kind, ProfileKind::Mentee);
    }

    #[test]
    fn search_matches_skills() {
        let profiles = vec![Profile::from_row(&profile_row()).unwrap()];
        let query = ProfileQuery {
            search: "funding".to_string(),
            ..Default::default()
        };
        assert_eq!(query.apply(&profiles).len(), 1);
    }

    #[test]
    fn kind_filter_is_exact() {
        let profiles = vec![Profile::from_row(&profile_row()).unwrap()];

        let mentors = ProfileQuery {
            kind: Some(ProfileKind::Mentor),
            ..Default::default()
        };
        assert_eq!(mentors.apply(&profiles).len(), 1);

        let mentees = ProfileQuery {
            kind: Some(ProfileKind::Mentee),
            ..Default::default()
        };
        assert!(mentees.apply(&profiles).is_empty());
    }

    #[test]
    fn location_filter_matches_by_containment() {
        let profiles = vec![Profile::from_row(&profile_row()).unwrap()];
        let query = ProfileQuery {
            location: Some("Mumbai".to_string()),
            ..Default::default()
        };
        assert_eq!(query.apply(&profiles).len(), 1);
    }
}

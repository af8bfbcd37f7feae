//! Profile rows and the rider preference attributes used for matching.
//!
//! Profiles come from the backend's `profiles` table; most matching fields
//! are optional because many users skip them. An absent field never counts
//! against a match, it simply contributes no bonus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// In-ride music taste. Stored lowercase in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MusicPreference {
    Pop,
    Rock,
    HipHop,
    Country,
    Electronic,
    Jazz,
    Quiet,
}

/// How much conversation a person wants during a ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationLevel {
    Quiet,
    Moderate,
    Chatty,
}

/// A `profiles` table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub music_preference: Option<MusicPreference>,
    #[serde(default)]
    pub conversation_level: Option<ConversationLevel>,
    /// Preferred hour of day for departures, 0–23.
    #[serde(default)]
    pub preferred_departure_hour: Option<u8>,
    #[serde(default)]
    pub same_gender_only: bool,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// The soft-matching attributes the compatibility scorer reads.
    pub fn preferences(&self) -> RiderPreferences {
        RiderPreferences {
            university: self.university.clone(),
            gender: self.gender.clone(),
            music_preference: self.music_preference,
            conversation_level: self.conversation_level,
            preferred_departure_hour: self.preferred_departure_hour,
            same_gender_only: self.same_gender_only,
        }
    }
}

/// A rider's soft-matching attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiderPreferences {
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub music_preference: Option<MusicPreference>,
    #[serde(default)]
    pub conversation_level: Option<ConversationLevel>,
    #[serde(default)]
    pub preferred_departure_hour: Option<u8>,
    #[serde(default)]
    pub same_gender_only: bool,
}

/// Driver attributes embedded in a candidate ride.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriverProfile {
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub music_preference: Option<MusicPreference>,
    #[serde(default)]
    pub conversation_level: Option<ConversationLevel>,
}

/// A present, non-empty string field. Whitespace-only values from the
/// backend count as absent.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

//! Test helpers for common fixture setup.
//!
//! This module provides shared fixture constructors to reduce duplication
//! across test files.

use chrono::{DateTime, TimeZone, Utc};

use crate::chat::ChatMessage;
use crate::profiles::{ConversationLevel, DriverProfile, MusicPreference, RiderPreferences};
use crate::rides::{Ride, RideBooking, RideStatus};

/// University shared by the standard test driver and test preferences.
pub const TEST_UNIVERSITY: &str = "UNT";

/// Standard fixture departure: 2026-04-14 15:30 UTC (hour of day 15).
pub fn test_departure() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 14, 15, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Driver who shares university, music taste and conversation level with
/// [`test_prefs`]; gender unset.
pub fn test_driver() -> DriverProfile {
    DriverProfile {
        university: Some(TEST_UNIVERSITY.to_string()),
        gender: None,
        music_preference: Some(MusicPreference::Pop),
        conversation_level: Some(ConversationLevel::Moderate),
    }
}

/// Preferences matching [`test_driver`] on university, music and
/// conversation; no departure-hour preference, no gender filter.
pub fn test_prefs() -> RiderPreferences {
    RiderPreferences {
        university: Some(TEST_UNIVERSITY.to_string()),
        gender: None,
        music_preference: Some(MusicPreference::Pop),
        conversation_level: Some(ConversationLevel::Moderate),
        preferred_departure_hour: None,
        same_gender_only: false,
    }
}

/// An active four-seat ride offered by driver `d-1`, departing at
/// [`test_departure`], with parseable point-typed coordinates.
pub fn test_ride(id: &str) -> Ride {
    Ride {
        id: id.to_string(),
        driver_id: "d-1".to_string(),
        driver: test_driver(),
        origin_name: "Fry Street".to_string(),
        destination_name: "Dallas Love Field".to_string(),
        origin_coords: Some(serde_json::Value::String("(-97.1331,33.2148)".to_string())),
        destination_coords: Some(serde_json::Value::String(
            "(-96.851778,32.847222)".to_string(),
        )),
        departure_time: test_departure(),
        seats_total: 4,
        status: RideStatus::Active,
    }
}

/// A live (not cancelled) booking row.
pub fn test_booking(id: &str, ride_id: &str, passenger_id: &str, seats: u32) -> RideBooking {
    RideBooking {
        id: id.to_string(),
        ride_id: ride_id.to_string(),
        passenger_id: passenger_id.to_string(),
        seats,
        cancelled: false,
        created_at: test_departure(),
    }
}

/// A chat message row with the given read flag.
pub fn test_message(id: &str, ride_id: &str, sender_id: &str, read: bool) -> ChatMessage {
    ChatMessage {
        id: id.to_string(),
        ride_id: ride_id.to_string(),
        sender_id: sender_id.to_string(),
        content: format!("message {id}"),
        read,
        created_at: test_departure(),
    }
}

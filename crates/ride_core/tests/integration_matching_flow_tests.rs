use chrono::Timelike;
use ride_core::matching::{rank_rides, score_ride, MatchWeights};
use ride_core::profiles::{ConversationLevel, DriverProfile, MusicPreference, RiderPreferences};
use ride_core::test_helpers::{test_ride, TEST_UNIVERSITY};

fn ride_departing_at_hour(id: &str, hour: u32, driver: DriverProfile) -> ride_core::rides::Ride {
    let mut ride = test_ride(id);
    ride.driver = driver;
    ride.departure_time = ride
        .departure_time
        .with_hour(hour)
        .expect("valid hour of day");
    ride
}

#[test]
fn ranks_unt_afternoon_scenario_end_to_end() {
    let prefs = RiderPreferences {
        university: Some(TEST_UNIVERSITY.to_string()),
        music_preference: Some(MusicPreference::Pop),
        preferred_departure_hour: Some(14),
        ..Default::default()
    };

    // Ride A: same university and music, departs within the two-hour window.
    let ride_a = ride_departing_at_hour(
        "r-a",
        15,
        DriverProfile {
            university: Some(TEST_UNIVERSITY.to_string()),
            music_preference: Some(MusicPreference::Pop),
            ..Default::default()
        },
    );
    // Ride B: same university only, departs late in the evening.
    let ride_b = ride_departing_at_hour(
        "r-b",
        22,
        DriverProfile {
            university: Some(TEST_UNIVERSITY.to_string()),
            ..Default::default()
        },
    );

    let weights = MatchWeights::default();
    assert_eq!(score_ride(&prefs, &ride_a, &weights), 55);
    assert_eq!(score_ride(&prefs, &ride_b, &weights), 30);

    let ranked = rank_rides(&prefs, vec![ride_b, ride_a], &weights);
    let order: Vec<&str> = ranked.iter().map(|entry| entry.ride.id.as_str()).collect();
    assert_eq!(order, vec!["r-a", "r-b"]);
    assert_eq!(ranked[0].compatibility_score, 55);
    assert_eq!(ranked[1].compatibility_score, 30);
}

#[test]
fn score_of_exactly_twenty_is_excluded_and_twenty_one_included() {
    let prefs = RiderPreferences {
        conversation_level: Some(ConversationLevel::Moderate),
        preferred_departure_hour: Some(15),
        ..Default::default()
    };
    let ride = test_ride("r-1"); // moderate conversation, departs at hour 15

    // conversation + departure = 20: on the threshold, dropped
    let weights = MatchWeights::default();
    assert_eq!(score_ride(&prefs, &ride, &weights), 20);
    assert!(rank_rides(&prefs, vec![ride.clone()], &weights).is_empty());

    // one point over the threshold is kept
    let weights = MatchWeights {
        departure_bonus: 11,
        ..Default::default()
    };
    assert_eq!(score_ride(&prefs, &ride, &weights), 21);
    assert_eq!(rank_rides(&prefs, vec![ride], &weights).len(), 1);
}

#[test]
fn rank_orders_mixed_scores_descending() {
    let prefs = RiderPreferences {
        university: Some(TEST_UNIVERSITY.to_string()),
        music_preference: Some(MusicPreference::Pop),
        conversation_level: Some(ConversationLevel::Moderate),
        preferred_departure_hour: Some(14),
        same_gender_only: true,
        gender: Some("female".to_string()),
    };

    // 30 + 15 + 10 + 10 + 15 = 80
    let ride_80 = ride_departing_at_hour(
        "r-80",
        15,
        DriverProfile {
            university: Some(TEST_UNIVERSITY.to_string()),
            music_preference: Some(MusicPreference::Pop),
            conversation_level: Some(ConversationLevel::Moderate),
            gender: Some("female".to_string()),
        },
    );
    // 30 + 10 = 40
    let ride_40 = ride_departing_at_hour(
        "r-40",
        22,
        DriverProfile {
            university: Some(TEST_UNIVERSITY.to_string()),
            conversation_level: Some(ConversationLevel::Moderate),
            ..Default::default()
        },
    );
    // 15 + 10 = 25
    let ride_25 = ride_departing_at_hour(
        "r-25",
        22,
        DriverProfile {
            music_preference: Some(MusicPreference::Pop),
            conversation_level: Some(ConversationLevel::Moderate),
            ..Default::default()
        },
    );

    let ranked = rank_rides(
        &prefs,
        vec![ride_25, ride_80, ride_40],
        &MatchWeights::default(),
    );
    let scores: Vec<u32> = ranked.iter().map(|entry| entry.compatibility_score).collect();
    assert_eq!(scores, vec![80, 40, 25]);
}

#[test]
fn empty_preferences_produce_no_matches() {
    let rides = vec![test_ride("r-1"), test_ride("r-2"), test_ride("r-3")];
    let ranked = rank_rides(
        &RiderPreferences::default(),
        rides,
        &MatchWeights::default(),
    );
    assert!(ranked.is_empty());
}

#[test]
fn equal_scores_break_ties_by_departure_then_id() {
    let prefs = RiderPreferences {
        university: Some(TEST_UNIVERSITY.to_string()),
        ..Default::default()
    };

    let driver = DriverProfile {
        university: Some(TEST_UNIVERSITY.to_string()),
        ..Default::default()
    };
    let sooner = ride_departing_at_hour("r-sooner", 8, driver.clone());
    let later = ride_departing_at_hour("r-later", 18, driver.clone());
    let later_twin = ride_departing_at_hour("r-later-twin", 18, driver);

    let ranked = rank_rides(
        &prefs,
        vec![later_twin, later, sooner],
        &MatchWeights::default(),
    );
    let order: Vec<&str> = ranked.iter().map(|entry| entry.ride.id.as_str()).collect();
    assert_eq!(order, vec!["r-sooner", "r-later", "r-later-twin"]);
}

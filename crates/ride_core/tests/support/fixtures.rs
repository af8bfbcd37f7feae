#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use ride_core::chat::ChatMessage;
use ride_core::notifications::{Notification, NotificationKind};
use ride_core::rides::{RequestStatus, Ride, RideBooking, RideRequest};
use ride_core::test_helpers::{test_booking, test_message, test_ride};

/// Reference "now" for integration scenarios: the morning of the standard
/// fixture departure day.
pub fn scenario_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 14, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Builder that assembles a small campus scenario around a single user.
#[derive(Debug, Default)]
pub struct ScenarioBuilder {
    rides: Vec<Ride>,
    requests: Vec<RideRequest>,
    bookings: Vec<RideBooking>,
    messages: Vec<ChatMessage>,
    notifications: Vec<Notification>,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ride offered by `driver_id`, departing `hours_from_now` after
    /// [`scenario_now`].
    pub fn with_ride(mut self, id: &str, driver_id: &str, hours_from_now: i64) -> Self {
        let mut ride = test_ride(id);
        ride.driver_id = driver_id.to_string();
        ride.departure_time = scenario_now() + Duration::hours(hours_from_now);
        self.rides.push(ride);
        self
    }

    pub fn with_request(mut self, id: &str, ride_id: &str, rider_id: &str, status: RequestStatus) -> Self {
        self.requests.push(RideRequest {
            id: id.to_string(),
            ride_id: ride_id.to_string(),
            rider_id: rider_id.to_string(),
            status,
            created_at: scenario_now(),
        });
        self
    }

    pub fn with_booking(mut self, id: &str, ride_id: &str, passenger_id: &str) -> Self {
        self.bookings.push(test_booking(id, ride_id, passenger_id, 1));
        self
    }

    pub fn with_cancelled_booking(mut self, id: &str, ride_id: &str, passenger_id: &str) -> Self {
        let mut booking = test_booking(id, ride_id, passenger_id, 1);
        booking.cancelled = true;
        self.bookings.push(booking);
        self
    }

    pub fn with_message(mut self, id: &str, ride_id: &str, sender_id: &str, read: bool) -> Self {
        self.messages.push(test_message(id, ride_id, sender_id, read));
        self
    }

    pub fn with_notification(mut self, id: &str, user_id: &str, read: bool) -> Self {
        self.notifications.push(Notification {
            id: id.to_string(),
            user_id: user_id.to_string(),
            kind: NotificationKind::RequestReceived,
            body: String::new(),
            ride_id: "r-1".to_string(),
            read,
            created_at: scenario_now(),
        });
        self
    }

    pub fn build(self) -> Scenario {
        Scenario {
            rides: self.rides,
            requests: self.requests,
            bookings: self.bookings,
            messages: self.messages,
            notifications: self.notifications,
        }
    }
}

/// Assembled scenario data, in the shape backend queries hand to the app.
#[derive(Debug)]
pub struct Scenario {
    pub rides: Vec<Ride>,
    pub requests: Vec<RideRequest>,
    pub bookings: Vec<RideBooking>,
    pub messages: Vec<ChatMessage>,
    pub notifications: Vec<Notification>,
}

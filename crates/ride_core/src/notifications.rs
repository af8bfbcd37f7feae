//! Notification rows and the drafts the app derives from domain events.
//!
//! A draft is what gets inserted into the backend's `notifications` table;
//! the backend assigns id, read flag and timestamp and hands back full rows.
//! Read state follows the same derived, one-way pattern as chat, minus the
//! sender exclusion: a notification is always addressed to its viewer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;
use crate::rides::{Ride, RideBooking, RideRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    RequestReceived,
    RequestAccepted,
    RequestDeclined,
    BookingCancelled,
    MessageReceived,
}

/// A `notifications` table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub kind: NotificationKind,
    pub body: String,
    pub ride_id: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a notification the app is about to create.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationDraft {
    pub user_id: String,
    pub kind: NotificationKind,
    pub body: String,
    pub ride_id: String,
}

impl NotificationDraft {
    /// To the driver: someone asked for a seat.
    pub fn request_received(ride: &Ride, request: &RideRequest) -> Self {
        debug_assert_eq!(request.ride_id, ride.id, "request must belong to the ride");
        Self {
            user_id: ride.driver_id.clone(),
            kind: NotificationKind::RequestReceived,
            body: format!(
                "New seat request for your ride from {} to {}",
                ride.origin_name, ride.destination_name
            ),
            ride_id: ride.id.clone(),
        }
    }

    /// To the rider: the driver accepted.
    pub fn request_accepted(ride: &Ride, request: &RideRequest) -> Self {
        Self {
            user_id: request.rider_id.clone(),
            kind: NotificationKind::RequestAccepted,
            body: format!(
                "Your seat request for the ride from {} to {} was accepted",
                ride.origin_name, ride.destination_name
            ),
            ride_id: ride.id.clone(),
        }
    }

    /// To the rider: the driver declined.
    pub fn request_declined(ride: &Ride, request: &RideRequest) -> Self {
        Self {
            user_id: request.rider_id.clone(),
            kind: NotificationKind::RequestDeclined,
            body: format!(
                "Your seat request for the ride from {} to {} was declined",
                ride.origin_name, ride.destination_name
            ),
            ride_id: ride.id.clone(),
        }
    }

    /// To the driver: a passenger dropped out.
    pub fn booking_cancelled(ride: &Ride, booking: &RideBooking) -> Self {
        debug_assert_eq!(booking.ride_id, ride.id, "booking must belong to the ride");
        Self {
            user_id: ride.driver_id.clone(),
            kind: NotificationKind::BookingCancelled,
            body: format!(
                "A passenger cancelled their booking on your ride from {} to {}",
                ride.origin_name, ride.destination_name
            ),
            ride_id: ride.id.clone(),
        }
    }

    /// To another chat participant: a new in-ride message arrived.
    pub fn message_received(ride: &Ride, message: &ChatMessage, recipient_id: &str) -> Self {
        debug_assert_ne!(message.sender_id, recipient_id, "no self-notification");
        Self {
            user_id: recipient_id.to_string(),
            kind: NotificationKind::MessageReceived,
            body: format!(
                "New message in the ride from {} to {}",
                ride.origin_name, ride.destination_name
            ),
            ride_id: ride.id.clone(),
        }
    }
}

/// Unread notifications addressed to `user_id`.
pub fn unread_count(notifications: &[Notification], user_id: &str) -> usize {
    notifications
        .iter()
        .filter(|notification| notification.user_id == user_id && !notification.read)
        .count()
}

/// Mark every notification addressed to `user_id` as read. Idempotent;
/// returns how many actually flipped.
pub fn mark_all_read(notifications: &mut [Notification], user_id: &str) -> usize {
    let mut flipped = 0;
    for notification in notifications
        .iter_mut()
        .filter(|notification| notification.user_id == user_id && !notification.read)
    {
        notification.read = true;
        flipped += 1;
    }
    flipped
}

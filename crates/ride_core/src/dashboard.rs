//! Personal dashboard aggregation.
//!
//! One pure pass over a user's rides, requests, bookings, messages and
//! notifications. Everything here is derived on demand; nothing is cached
//! or incrementally maintained.

use chrono::{DateTime, Utc};

use crate::chat::ChatMessage;
use crate::notifications::{self, Notification};
use crate::rides::{RequestStatus, Ride, RideBooking, RideRequest, RideStatus};

/// Badge counts for a user's dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Rides the user offers as a driver, departing at or after `now`.
    pub upcoming_offered: usize,
    /// Live bookings the user holds on other users' upcoming rides.
    pub upcoming_booked: usize,
    /// Pending requests on the user's own rides, awaiting a decision.
    pub pending_incoming: usize,
    /// Pending requests the user has made on other rides.
    pub pending_outgoing: usize,
    /// Unread chat messages across the user's ride chats.
    pub unread_messages: usize,
    /// Unread notifications addressed to the user.
    pub unread_notifications: usize,
}

impl DashboardSummary {
    pub fn build(
        user_id: &str,
        rides: &[Ride],
        requests: &[RideRequest],
        bookings: &[RideBooking],
        messages: &[ChatMessage],
        notification_rows: &[Notification],
        now: DateTime<Utc>,
    ) -> Self {
        let upcoming = |ride: &Ride| {
            ride.departure_time >= now
                && !matches!(ride.status, RideStatus::Cancelled | RideStatus::Completed)
        };

        let upcoming_offered = rides
            .iter()
            .filter(|ride| ride.driver_id == user_id && upcoming(ride))
            .count();

        let upcoming_booked = bookings
            .iter()
            .filter(|booking| booking.passenger_id == user_id && !booking.cancelled)
            .filter(|booking| {
                rides
                    .iter()
                    .any(|ride| ride.id == booking.ride_id && ride.driver_id != user_id && upcoming(ride))
            })
            .count();

        let pending_incoming = requests
            .iter()
            .filter(|request| request.status == RequestStatus::Pending)
            .filter(|request| {
                rides
                    .iter()
                    .any(|ride| ride.id == request.ride_id && ride.driver_id == user_id)
            })
            .count();

        let pending_outgoing = requests
            .iter()
            .filter(|request| {
                request.rider_id == user_id && request.status == RequestStatus::Pending
            })
            .count();

        // A chat belongs to the user's dashboard when they drive the ride or
        // hold a live booking on it.
        let in_user_chat = |ride_id: &str| {
            rides
                .iter()
                .any(|ride| ride.id == ride_id && ride.driver_id == user_id)
                || bookings.iter().any(|booking| {
                    booking.ride_id == ride_id
                        && booking.passenger_id == user_id
                        && !booking.cancelled
                })
        };

        let unread_messages = messages
            .iter()
            .filter(|message| message.is_unread_for(user_id) && in_user_chat(&message.ride_id))
            .count();

        let unread_notifications = notifications::unread_count(notification_rows, user_id);

        Self {
            upcoming_offered,
            upcoming_booked,
            pending_incoming,
            pending_outgoing,
            unread_messages,
            unread_notifications,
        }
    }
}

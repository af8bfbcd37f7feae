//! Ride, request and booking rows, seat accounting and lifecycle rules.
//!
//! Rows mirror the backend's `rides`, `ride_requests` and `ride_bookings`
//! tables. The functions here guard writes the UI is about to issue
//! (requesting a seat, resolving a request); they never touch the backend
//! themselves.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geo::{self, Coordinate};
use crate::profiles::DriverProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Active,
    Full,
    Completed,
    Cancelled,
}

/// A `rides` table row with the driver profile joined in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: String,
    pub driver_id: String,
    #[serde(default)]
    pub driver: DriverProfile,
    pub origin_name: String,
    pub destination_name: String,
    /// Raw coordinate columns as stored by the backend (point-typed strings,
    /// JSON arrays, `lng`/`lat` objects). Parse via [`Ride::origin`].
    #[serde(default)]
    pub origin_coords: Option<serde_json::Value>,
    #[serde(default)]
    pub destination_coords: Option<serde_json::Value>,
    pub departure_time: DateTime<Utc>,
    pub seats_total: u32,
    pub status: RideStatus,
}

impl Ride {
    /// Departure hour of day (0–23, UTC).
    pub fn departure_hour(&self) -> u8 {
        self.departure_time.hour() as u8
    }

    pub fn origin(&self) -> Option<Coordinate> {
        self.origin_coords.as_ref().and_then(Coordinate::parse_value)
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.destination_coords
            .as_ref()
            .and_then(Coordinate::parse_value)
    }

    /// Approximate trip distance for display, `None` when either endpoint is
    /// missing or unparseable.
    pub fn trip_miles(&self) -> Option<f64> {
        geo::trip_miles(self.origin(), self.destination())
    }

    /// Seats not taken by live bookings. Saturates at zero even if
    /// overbooked rows arrive from the backend.
    pub fn seats_remaining(&self, bookings: &[RideBooking]) -> u32 {
        let taken: u32 = bookings
            .iter()
            .filter(|booking| booking.ride_id == self.id && !booking.cancelled)
            .map(|booking| booking.seats)
            .sum();
        self.seats_total.saturating_sub(taken)
    }

    /// Status as presented to riders: an active ride with no seats left
    /// shows as full.
    pub fn effective_status(&self, bookings: &[RideBooking]) -> RideStatus {
        if self.status == RideStatus::Active && self.seats_remaining(bookings) == 0 {
            RideStatus::Full
        } else {
            self.status
        }
    }

    /// Whether `rider_id` may request a seat on this ride right now.
    pub fn can_request(
        &self,
        rider_id: &str,
        bookings: &[RideBooking],
        now: DateTime<Utc>,
    ) -> Result<(), RequestError> {
        if rider_id == self.driver_id {
            return Err(RequestError::OwnRide);
        }
        if self.status != RideStatus::Active {
            return Err(RequestError::RideClosed);
        }
        if self.departure_time <= now {
            return Err(RequestError::AlreadyDeparted);
        }
        if self.seats_remaining(bookings) == 0 {
            return Err(RequestError::NoSeats);
        }
        Ok(())
    }
}

/// Reasons a seat request is rejected before it reaches the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    OwnRide,
    RideClosed,
    AlreadyDeparted,
    NoSeats,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            RequestError::OwnRide => "you cannot request a seat on your own ride",
            RequestError::RideClosed => "this ride is no longer accepting requests",
            RequestError::AlreadyDeparted => "this ride has already departed",
            RequestError::NoSeats => "this ride has no seats left",
        };
        f.write_str(message)
    }
}

impl std::error::Error for RequestError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
    Cancelled,
}

impl RequestStatus {
    /// Accepted, declined and cancelled requests never move again.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

/// A `ride_requests` table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideRequest {
    pub id: String,
    pub ride_id: String,
    pub rider_id: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl RideRequest {
    /// Move this request to a new status. Only pending requests may move,
    /// and only to a different status.
    pub fn transition(&mut self, to: RequestStatus) -> Result<(), TransitionError> {
        if self.status.is_terminal() {
            return Err(TransitionError::Resolved(self.status));
        }
        if self.status == to {
            return Err(TransitionError::Unchanged);
        }
        self.status = to;
        Ok(())
    }
}

/// Rejected request-status transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// The request already reached a terminal status.
    Resolved(RequestStatus),
    /// The target status equals the current status.
    Unchanged,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::Resolved(status) => {
                write!(f, "request was already resolved as {status:?}")
            }
            TransitionError::Unchanged => f.write_str("request is already in that status"),
        }
    }
}

impl std::error::Error for TransitionError {}

/// A `ride_bookings` table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideBooking {
    pub id: String,
    pub ride_id: String,
    pub passenger_id: String,
    pub seats: u32,
    #[serde(default)]
    pub cancelled: bool,
    pub created_at: DateTime<Utc>,
}

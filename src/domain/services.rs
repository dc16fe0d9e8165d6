//! Booking validation and commit logic.
//!
//! This module provides the booking manager that owns all availability
//! state and the append-only ledger of confirmed bookings.

use super::errors::{BookingError, BookingResult};
use super::models::{Booking, BookingRequest, ResourceKind, Room};
use chrono::{Duration, NaiveDateTime};
use std::collections::HashMap;

/// Start-time formats accepted from the form, tried in order.
const START_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Owns room/resource availability and the booking ledger.
///
/// Availability is a single boolean per room and per resource: once a
/// successful submission marks something booked it stays booked for the
/// life of the process. There is no release operation.
///
/// # Examples
///
/// ```
/// use roombook::domain::{BookingManager, ResourceKind};
///
/// let manager = BookingManager::default();
/// assert!(manager.room_available(1));
/// assert!(manager.resource_available(ResourceKind::Projector));
/// assert!(manager.bookings().is_empty());
/// ```
#[derive(Debug)]
pub struct BookingManager {
    rooms: HashMap<u8, bool>,
    resources: HashMap<ResourceKind, bool>,
    ledger: Vec<Booking>,
}

impl Default for BookingManager {
    fn default() -> Self {
        Self {
            rooms: Room::ALL.iter().map(|room| (room.id, true)).collect(),
            resources: ResourceKind::ALL.iter().map(|kind| (*kind, true)).collect(),
            ledger: Vec::new(),
        }
    }
}

impl BookingManager {
    pub fn room_available(&self, id: u8) -> bool {
        self.rooms.get(&id).copied().unwrap_or(false)
    }

    pub fn resource_available(&self, kind: ResourceKind) -> bool {
        self.resources.get(&kind).copied().unwrap_or(false)
    }

    /// Confirmed bookings in commit order.
    pub fn bookings(&self) -> &[Booking] {
        &self.ledger
    }

    /// Validates a candidate request and, if it passes, commits it.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// required fields, start time not in the past, duration at least one
    /// hour, room known and free, at least one resource requested, every
    /// requested resource free (projector, then whiteboard, then laptop).
    ///
    /// On success the room and requested resources are marked booked, the
    /// booking is appended to the ledger, and a copy is returned. On
    /// failure nothing changes.
    ///
    /// `now` is the reference point for the past-time check; callers pass
    /// the current wall-clock time.
    pub fn submit(&mut self, request: &BookingRequest, now: NaiveDateTime) -> BookingResult<Booking> {
        let (start, end) = self.validate(request, now)?;

        self.rooms.insert(request.room_id, false);
        for kind in ResourceKind::ALL {
            if request.resources.contains(kind) {
                self.resources.insert(kind, false);
            }
        }

        let booking = Booking {
            room: Room::label_for(request.room_id),
            name: request.name.trim().to_string(),
            office_id: request.office_id.trim().to_string(),
            start,
            end,
            resources: request.resources,
        };
        self.ledger.push(booking.clone());
        Ok(booking)
    }

    /// Runs the validation chain without touching any state.
    ///
    /// Returns the parsed start and computed end time for a passing
    /// request.
    fn validate(
        &self,
        request: &BookingRequest,
        now: NaiveDateTime,
    ) -> BookingResult<(NaiveDateTime, NaiveDateTime)> {
        if request.name.trim().is_empty()
            || request.office_id.trim().is_empty()
            || request.start.trim().is_empty()
            || request.duration_hours.trim().is_empty()
        {
            return Err(BookingError::MissingField);
        }

        // Unparseable start text fails the same rule as a past start.
        let start = parse_start_time(&request.start).ok_or(BookingError::PastStartTime)?;
        if start < now {
            return Err(BookingError::PastStartTime);
        }

        let hours = parse_duration_hours(&request.duration_hours)?;

        match self.rooms.get(&request.room_id).copied() {
            None => return Err(BookingError::UnknownRoom),
            Some(false) => return Err(BookingError::RoomUnavailable),
            Some(true) => {}
        }

        if request.resources.is_empty() {
            return Err(BookingError::NoResourceSelected);
        }

        for kind in ResourceKind::ALL {
            if request.resources.contains(kind) && !self.resource_available(kind) {
                return Err(BookingError::ResourceUnavailable(kind));
            }
        }

        let end = start + Duration::milliseconds((hours * 3_600_000.0).round() as i64);
        Ok((start, end))
    }
}

/// Parses form start-time text. Accepts the datetime-local shape
/// ("2025-03-11T10:00") and its space-separated variant.
pub fn parse_start_time(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

/// Parses the duration field as fractional hours, at least one.
///
/// Non-numeric text fails the same rule as a too-short duration. The
/// comparison is written so a NaN parse cannot slip through.
fn parse_duration_hours(text: &str) -> BookingResult<f64> {
    let hours: f64 = text
        .trim()
        .parse()
        .map_err(|_| BookingError::DurationTooShort)?;
    if hours >= 1.0 {
        Ok(hours)
    } else {
        Err(BookingError::DurationTooShort)
    }
}

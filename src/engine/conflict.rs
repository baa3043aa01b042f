use crate::limits::*;
use crate::model::{Booking, NewBooking, NewRoom, Slot};

use super::EngineError;

/// Find the first existing booking that blocks the candidate slot on the
/// given room and date. Search order is insertion order; the first hit wins.
///
/// A booking blocks the candidate only under [`Slot::blocked_by`], i.e. when
/// one of the candidate's endpoints lands inside the existing interval. Dates
/// are matched by exact string equality.
pub(super) fn find_conflict<'a>(
    bookings: &'a [Booking],
    room_id: u64,
    date: &str,
    candidate: Slot<'_>,
) -> Option<&'a Booking> {
    bookings
        .iter()
        .find(|b| b.room_id == room_id && b.date == date && candidate.blocked_by(&b.slot()))
}

/// Collect every missing or invalid field of a room-creation request.
pub(super) fn validate_new_room(new: &NewRoom) -> Result<(), EngineError> {
    let mut bad = Vec::new();
    match new.name.as_deref() {
        Some(name) if !name.is_empty() && name.len() <= MAX_ROOM_NAME_LEN => {}
        _ => bad.push("roomName"),
    }
    match new.capacity {
        Some(capacity) if capacity > 0 => {}
        _ => bad.push("seatsAvailable"),
    }
    match new.price_per_hour {
        Some(price) if price >= 0.0 && price.is_finite() => {}
        _ => bad.push("pricePerHour"),
    }
    if let Some(amenities) = &new.amenities {
        if amenities.len() > MAX_AMENITIES_PER_ROOM
            || amenities.iter().any(|a| a.len() > MAX_AMENITY_LEN)
        {
            bad.push("amenities");
        }
    }
    if bad.is_empty() {
        Ok(())
    } else {
        Err(EngineError::InvalidInput(bad))
    }
}

/// Collect every missing or invalid field of a booking request. Times and
/// dates are only checked for presence and length; their content stays
/// opaque.
pub(super) fn validate_new_booking(new: &NewBooking) -> Result<(), EngineError> {
    let mut bad = Vec::new();
    match new.customer_name.as_deref() {
        Some(name) if !name.is_empty() && name.len() <= MAX_CUSTOMER_NAME_LEN => {}
        _ => bad.push("customerName"),
    }
    for (value, field) in [
        (&new.date, "date"),
        (&new.start_time, "startTime"),
        (&new.end_time, "endTime"),
    ] {
        match value.as_deref() {
            Some(v) if !v.is_empty() && v.len() <= MAX_DATE_TIME_LEN => {}
            _ => bad.push(field),
        }
    }
    if new.room_id.is_none() {
        bad.push("roomId");
    }
    if bad.is_empty() {
        Ok(())
    } else {
        Err(EngineError::InvalidInput(bad))
    }
}

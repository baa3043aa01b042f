use std::sync::atomic::Ordering;

use crate::limits::*;
use crate::model::{Booking, NewBooking, NewRoom, Room, Slot};

use super::conflict::{find_conflict, validate_new_booking, validate_new_room};
use super::{Engine, EngineError};

impl Engine {
    pub async fn create_room(&self, new: NewRoom) -> Result<Room, EngineError> {
        validate_new_room(&new)?;

        let mut rooms = self.rooms.write().await;
        if rooms.len() >= MAX_ROOMS {
            return Err(EngineError::LimitExceeded("too many rooms"));
        }

        let room = Room {
            id: self.next_room_id.fetch_add(1, Ordering::Relaxed),
            name: new.name.unwrap_or_default(),
            capacity: new.capacity.unwrap_or_default(),
            amenities: new.amenities.unwrap_or_default(),
            price_per_hour: new.price_per_hour.unwrap_or_default(),
        };
        rooms.push(room.clone());
        Ok(room)
    }

    pub async fn create_booking(&self, new: NewBooking) -> Result<Booking, EngineError> {
        validate_new_booking(&new)?;
        let customer_name = new.customer_name.unwrap_or_default();
        let date = new.date.unwrap_or_default();
        let start_time = new.start_time.unwrap_or_default();
        let end_time = new.end_time.unwrap_or_default();
        let room_id = new.room_id.unwrap_or_default();

        if self.get_room(room_id).await.is_none() {
            return Err(EngineError::RoomNotFound(room_id));
        }

        // The conflict scan and the append happen under one write lock, so
        // two concurrent requests for the same slot can never both pass.
        let mut bookings = self.bookings.write().await;
        if bookings.len() >= MAX_BOOKINGS {
            return Err(EngineError::LimitExceeded("too many bookings"));
        }
        if let Some(existing) =
            find_conflict(&bookings, room_id, &date, Slot::new(&start_time, &end_time))
        {
            return Err(EngineError::Conflict(existing.id));
        }

        let booking = Booking {
            id: self.next_booking_id.fetch_add(1, Ordering::Relaxed),
            customer_name,
            date,
            start_time,
            end_time,
            room_id,
        };
        bookings.push(booking.clone());
        Ok(booking)
    }
}

use crate::model::{
    Booking, BookingSummary, CustomerBooking, HistoryEntry, Room, RoomBookings,
    BOOKING_STATUS_CONFIRMED, ROOM_NOT_FOUND_LABEL,
};

use super::{Engine, EngineError};

impl Engine {
    pub async fn list_rooms(&self) -> Vec<Room> {
        self.rooms.read().await.clone()
    }

    pub async fn list_bookings(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }

    pub async fn get_room(&self, id: u64) -> Option<Room> {
        self.rooms.read().await.iter().find(|r| r.id == id).cloned()
    }

    /// Every room in catalog order, with its bookings attached.
    pub async fn rooms_with_bookings(&self) -> Vec<RoomBookings> {
        let rooms = self.rooms.read().await;
        let bookings = self.bookings.read().await;
        rooms
            .iter()
            .map(|room| {
                let summaries: Vec<BookingSummary> = bookings
                    .iter()
                    .filter(|b| b.room_id == room.id)
                    .map(BookingSummary::from)
                    .collect();
                RoomBookings {
                    room: room.clone(),
                    booked: !summaries.is_empty(),
                    bookings: summaries,
                }
            })
            .collect()
    }

    /// Every booking in insertion order, joined to its room's name. A room
    /// id that fails to resolve renders the sentinel label instead of
    /// failing the whole query.
    pub async fn customers_with_bookings(&self) -> Vec<CustomerBooking> {
        let rooms = self.rooms.read().await;
        let bookings = self.bookings.read().await;
        bookings.iter().map(|b| join_room(b, &rooms)).collect()
    }

    /// A customer's bookings, exact case-sensitive name match. Zero matches
    /// is an error, not an empty list: history for an unknown customer is
    /// meaningless rather than merely empty.
    pub async fn customer_history(
        &self,
        customer_name: &str,
    ) -> Result<Vec<HistoryEntry>, EngineError> {
        let rooms = self.rooms.read().await;
        let bookings = self.bookings.read().await;
        let entries: Vec<HistoryEntry> = bookings
            .iter()
            .filter(|b| b.customer_name == customer_name)
            .map(|b| HistoryEntry {
                booking_date: b.date.clone(),
                booking_status: BOOKING_STATUS_CONFIRMED,
                booking: join_room(b, &rooms),
            })
            .collect();
        if entries.is_empty() {
            return Err(EngineError::UnknownCustomer(customer_name.to_string()));
        }
        Ok(entries)
    }
}

fn join_room(booking: &Booking, rooms: &[Room]) -> CustomerBooking {
    let room_name = rooms
        .iter()
        .find(|r| r.id == booking.room_id)
        .map_or_else(|| ROOM_NOT_FOUND_LABEL.to_string(), |r| r.name.clone());
    CustomerBooking {
        customer_name: booking.customer_name.clone(),
        room_name,
        date: booking.date.clone(),
        start_time: booking.start_time.clone(),
        end_time: booking.end_time.clone(),
        booking_id: booking.id,
    }
}

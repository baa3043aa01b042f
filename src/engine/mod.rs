mod conflict;
mod error;
mod mutations;
mod queries;

pub use error::EngineError;

use std::sync::atomic::AtomicU64;

use tokio::sync::RwLock;

use crate::model::{Booking, Room};

/// The in-memory booking engine: the room catalog and the booking ledger.
///
/// Each collection sits behind its own `RwLock`; reads run concurrently,
/// writes serialize per collection. Identity counters are monotonic and
/// never reused. Writers fetch their id while holding the collection's
/// write lock, so id order matches insertion order and the scheduler's
/// check-then-insert sequence is atomic as a whole.
///
/// Lock order is rooms before bookings everywhere a method touches both.
pub struct Engine {
    rooms: RwLock<Vec<Room>>,
    bookings: RwLock<Vec<Booking>>,
    next_room_id: AtomicU64,
    next_booking_id: AtomicU64,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(Vec::new()),
            bookings: RwLock::new(Vec::new()),
            next_room_id: AtomicU64::new(1),
            next_booking_id: AtomicU64::new(1),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

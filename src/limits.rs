//! Hard bounds on accepted input. These exist so a single client cannot
//! grow the in-memory state or a single request without limit.

/// Max rooms in the catalog.
pub const MAX_ROOMS: usize = 10_000;

/// Max bookings in the ledger.
pub const MAX_BOOKINGS: usize = 1_000_000;

/// Max length of a room name.
pub const MAX_ROOM_NAME_LEN: usize = 256;

/// Max length of a customer name.
pub const MAX_CUSTOMER_NAME_LEN: usize = 256;

/// Max length of a date or time-of-day string.
pub const MAX_DATE_TIME_LEN: usize = 64;

/// Max amenities on one room.
pub const MAX_AMENITIES_PER_ROOM: usize = 32;

/// Max length of one amenity label.
pub const MAX_AMENITY_LEN: usize = 128;

/// Max accepted HTTP request body, in bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

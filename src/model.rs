use serde::{Deserialize, Serialize};

/// Room name substituted into joined views when a booking's room id no
/// longer resolves. Rooms are never deleted, so this is a defensive label,
/// not an expected state.
pub const ROOM_NOT_FOUND_LABEL: &str = "Room not found";

/// Status stamped on every history entry. There is no cancellation state;
/// a booking that exists is confirmed.
pub const BOOKING_STATUS_CONFIRMED: &str = "Confirmed";

/// Half-open `[start, end)` interval of zero-padded `HH:MM` strings.
///
/// Times are compared as strings. Within a single day the lexicographic
/// order of zero-padded `HH:MM` coincides with clock order; malformed
/// values are carried verbatim and compare however the bytes compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

impl<'a> Slot<'a> {
    pub fn new(start: &'a str, end: &'a str) -> Self {
        Self { start, end }
    }

    /// Admission check used by the scheduler: the candidate is blocked when
    /// its start falls inside `existing`, or its end falls inside
    /// `(existing.start, existing.end]`. A candidate that strictly contains
    /// `existing` is NOT blocked; callers rely on this exact policy.
    pub fn blocked_by(&self, existing: &Slot<'_>) -> bool {
        (self.start >= existing.start && self.start < existing.end)
            || (self.end > existing.start && self.end <= existing.end)
    }
}

/// A bookable meeting room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u64,
    #[serde(rename = "roomName")]
    pub name: String,
    #[serde(rename = "seatsAvailable")]
    pub capacity: u32,
    pub amenities: Vec<String>,
    pub price_per_hour: f64,
}

/// A reservation of one room for a time slot on one date.
///
/// `date`, `start_time` and `end_time` are opaque strings: `date` is only
/// ever compared for exact equality, the times lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub room_id: u64,
}

impl Booking {
    pub fn slot(&self) -> Slot<'_> {
        Slot::new(&self.start_time, &self.end_time)
    }
}

// ── Creation inputs ──────────────────────────────────────────────

/// Room-creation input as it arrives from the boundary. Every field is
/// optional here so validation can report the full set of missing or
/// invalid fields in one pass.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    #[serde(rename = "roomName", default)]
    pub name: Option<String>,
    #[serde(rename = "seatsAvailable", default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub price_per_hour: Option<f64>,
}

/// Booking-creation input. Same optional-field shape as [`NewRoom`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub room_id: Option<u64>,
}

// ── Query result types ───────────────────────────────────────────

/// One booking reduced to the fields shown under a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub customer_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_id: u64,
}

impl From<&Booking> for BookingSummary {
    fn from(b: &Booking) -> Self {
        Self {
            customer_name: b.customer_name.clone(),
            date: b.date.clone(),
            start_time: b.start_time.clone(),
            end_time: b.end_time.clone(),
            booking_id: b.id,
        }
    }
}

/// A room with its bookings attached, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomBookings {
    #[serde(flatten)]
    pub room: Room,
    pub booked: bool,
    pub bookings: Vec<BookingSummary>,
}

/// A booking joined to its room's name, in booking order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBooking {
    pub customer_name: String,
    pub room_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_id: u64,
}

/// One row of a customer's booking history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub booking: CustomerBooking,
    pub booking_date: String,
    pub booking_status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_blocked_start_inside() {
        let existing = Slot::new("14:00", "16:00");
        assert!(Slot::new("15:00", "17:00").blocked_by(&existing));
    }

    #[test]
    fn slot_blocked_end_inside() {
        let existing = Slot::new("14:00", "16:00");
        assert!(Slot::new("13:00", "15:00").blocked_by(&existing));
    }

    #[test]
    fn slot_blocked_identical() {
        let existing = Slot::new("14:00", "16:00");
        assert!(Slot::new("14:00", "16:00").blocked_by(&existing));
    }

    #[test]
    fn slot_touching_boundary_not_blocked() {
        let existing = Slot::new("14:00", "16:00");
        assert!(!Slot::new("16:00", "18:00").blocked_by(&existing));
        assert!(!Slot::new("12:00", "14:00").blocked_by(&existing));
    }

    #[test]
    fn slot_strict_containment_not_blocked() {
        // The admission policy only looks at the candidate's endpoints, so a
        // candidate swallowing an existing slot whole passes.
        let existing = Slot::new("10:00", "11:00");
        assert!(!Slot::new("09:00", "17:00").blocked_by(&existing));
        // The reverse direction IS blocked.
        let wide = Slot::new("09:00", "17:00");
        assert!(Slot::new("10:00", "11:00").blocked_by(&wide));
    }

    #[test]
    fn slot_disjoint_not_blocked() {
        let existing = Slot::new("09:00", "10:00");
        assert!(!Slot::new("11:00", "12:00").blocked_by(&existing));
    }

    #[test]
    fn room_serializes_with_api_vocabulary() {
        let room = Room {
            id: 1,
            name: "MeetingRoom1".into(),
            capacity: 50,
            amenities: vec!["Wi-Fi".into(), "Projector".into()],
            price_per_hour: 50.0,
        };
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["roomName"], "MeetingRoom1");
        assert_eq!(json["seatsAvailable"], 50);
        assert_eq!(json["pricePerHour"], 50.0);
        assert_eq!(json["amenities"][1], "Projector");
    }

    #[test]
    fn room_bookings_flattens_room_fields() {
        let view = RoomBookings {
            room: Room {
                id: 2,
                name: "MeetingRoom2".into(),
                capacity: 20,
                amenities: vec![],
                price_per_hour: 80.0,
            },
            booked: false,
            bookings: vec![],
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["roomName"], "MeetingRoom2");
        assert_eq!(json["booked"], false);
        assert!(json["bookings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn new_room_deserializes_partial_input() {
        let new: NewRoom = serde_json::from_str(r#"{"roomName": "A"}"#).unwrap();
        assert_eq!(new.name.as_deref(), Some("A"));
        assert!(new.capacity.is_none());
        assert!(new.price_per_hour.is_none());
    }

    #[test]
    fn history_entry_carries_status() {
        let entry = HistoryEntry {
            booking: CustomerBooking {
                customer_name: "John".into(),
                room_name: "MeetingRoom1".into(),
                date: "2023-12-31".into(),
                start_time: "14:00".into(),
                end_time: "16:00".into(),
                booking_id: 1,
            },
            booking_date: "2023-12-31".into(),
            booking_status: BOOKING_STATUS_CONFIRMED,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["bookingStatus"], "Confirmed");
        assert_eq!(json["bookingDate"], "2023-12-31");
        assert_eq!(json["roomName"], "MeetingRoom1");
    }
}

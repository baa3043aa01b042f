use tracing::info;

use crate::engine::{Engine, EngineError};
use crate::model::{NewBooking, NewRoom};

/// Load the demo catalog through the public engine operations: three rooms
/// and one confirmed booking in each.
pub async fn load_demo(engine: &Engine) -> Result<(), EngineError> {
    let rooms = [
        ("MeetingRoom1", 50, 50.0),
        ("MeetingRoom2", 20, 80.0),
        ("MeetingRoom3", 20, 100.0),
    ];
    for (name, capacity, price) in rooms {
        engine
            .create_room(NewRoom {
                name: Some(name.to_string()),
                capacity: Some(capacity),
                amenities: Some(vec!["Wi-Fi".into(), "Projector".into()]),
                price_per_hour: Some(price),
            })
            .await?;
    }

    let bookings = [
        ("John Doe", "2023-12-31", "14:00", "16:00", 1),
        ("John", "2024-01-15", "14:00", "16:00", 2),
        ("Johnny", "2024-02-01", "14:00", "16:00", 3),
    ];
    for (customer, date, start, end, room_id) in bookings {
        engine
            .create_booking(NewBooking {
                customer_name: Some(customer.to_string()),
                date: Some(date.to_string()),
                start_time: Some(start.to_string()),
                end_time: Some(end.to_string()),
                room_id: Some(room_id),
            })
            .await?;
    }

    info!("demo catalog loaded: 3 rooms, 3 bookings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_catalog_loads_cleanly() {
        let engine = Engine::new();
        load_demo(&engine).await.unwrap();
        assert_eq!(engine.list_rooms().await.len(), 3);
        assert_eq!(engine.list_bookings().await.len(), 3);
        let views = engine.rooms_with_bookings().await;
        assert!(views.iter().all(|v| v.booked));
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum EngineError {
    /// One or more request fields are missing, empty, or out of range.
    /// Carries the offending field names in API vocabulary.
    InvalidInput(Vec<&'static str>),
    RoomNotFound(u64),
    /// The requested slot collides with the booking carrying this id.
    Conflict(u64),
    UnknownCustomer(String),
    LimitExceeded(&'static str),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidInput(fields) => {
                write!(f, "invalid input: {}", fields.join(", "))
            }
            EngineError::RoomNotFound(id) => write!(f, "room not found: {id}"),
            EngineError::Conflict(id) => write!(f, "conflict with booking: {id}"),
            EngineError::UnknownCustomer(name) => {
                write!(f, "no bookings found for customer: {name}")
            }
            EngineError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

use hyper::Method;

use crate::model::{NewBooking, NewRoom};

/// Parsed API call from an HTTP request line + body.
#[derive(Debug)]
pub enum ApiCall {
    Index,
    CreateRoom(NewRoom),
    ListRooms,
    BookRoom(NewBooking),
    ListBookings,
    RoomsWithBookings,
    CustomersWithBookings,
    CustomerHistory(String),
}

#[derive(Debug)]
pub enum RouteError {
    UnknownRoute,
    BadJson(String),
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::UnknownRoute => write!(f, "unknown route"),
            RouteError::BadJson(msg) => write!(f, "invalid JSON body: {msg}"),
        }
    }
}

impl std::error::Error for RouteError {}

const HISTORY_PREFIX: &str = "/getCustomerBookingHistory/";

/// Map method + path + body to an [`ApiCall`]. Query strings are ignored;
/// the history path parameter is percent-decoded.
pub fn parse(method: &Method, path: &str, body: &[u8]) -> Result<ApiCall, RouteError> {
    match (method, path) {
        (&Method::GET, "/") => Ok(ApiCall::Index),
        (&Method::POST, "/createRoom") => Ok(ApiCall::CreateRoom(parse_body(body)?)),
        (&Method::GET, "/getRooms") => Ok(ApiCall::ListRooms),
        (&Method::POST, "/bookRoom") => Ok(ApiCall::BookRoom(parse_body(body)?)),
        (&Method::GET, "/getBookings") => Ok(ApiCall::ListBookings),
        (&Method::GET, "/getRoomsAndBookings") => Ok(ApiCall::RoomsWithBookings),
        (&Method::GET, "/getCustomersAndBookings") => Ok(ApiCall::CustomersWithBookings),
        (&Method::GET, _) if path.starts_with(HISTORY_PREFIX) => {
            let raw = &path[HISTORY_PREFIX.len()..];
            if raw.is_empty() || raw.contains('/') {
                return Err(RouteError::UnknownRoute);
            }
            Ok(ApiCall::CustomerHistory(percent_decode(raw)))
        }
        _ => Err(RouteError::UnknownRoute),
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, RouteError> {
    serde_json::from_slice(body).map_err(|e| RouteError::BadJson(e.to_string()))
}

/// Decode `%XX` escapes in a path segment. Malformed escapes pass through
/// untouched; `+` is left alone (it only means space in query strings).
fn percent_decode(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = (bytes[i + 1] as char).to_digit(16);
            let lo = (bytes[i + 2] as char).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

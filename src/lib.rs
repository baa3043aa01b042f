//! hallbook — an in-memory meeting-room booking service.
//!
//! The engine owns the room catalog and the booking ledger and enforces the
//! no-overlap rule per room and date; `wire` serves it over HTTP/1 JSON.

pub mod engine;
pub mod limits;
pub mod model;
pub mod observability;
pub mod routes;
pub mod seed;
pub mod wire;

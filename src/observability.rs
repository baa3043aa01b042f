use std::net::SocketAddr;

use crate::routes::ApiCall;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: total API requests handled. Labels: op, status.
pub const REQUESTS_TOTAL: &str = "hallbook_requests_total";

/// Histogram: request latency in seconds. Labels: op.
pub const REQUEST_DURATION_SECONDS: &str = "hallbook_request_duration_seconds";

/// Counter: booking attempts rejected for overlapping an existing booking.
pub const BOOKING_CONFLICTS_TOTAL: &str = "hallbook_booking_conflicts_total";

// ── USE metrics (resource utilization) ──────────────────────────

/// Gauge: active TCP connections.
pub const CONNECTIONS_ACTIVE: &str = "hallbook_connections_active";

/// Counter: total connections accepted.
pub const CONNECTIONS_TOTAL: &str = "hallbook_connections_total";

/// Counter: connections rejected due to limit.
pub const CONNECTIONS_REJECTED_TOTAL: &str = "hallbook_connections_rejected_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}

/// Map an ApiCall variant to a short label for metrics.
pub fn op_label(call: &ApiCall) -> &'static str {
    match call {
        ApiCall::Index => "index",
        ApiCall::CreateRoom(_) => "create_room",
        ApiCall::ListRooms => "list_rooms",
        ApiCall::BookRoom(_) => "book_room",
        ApiCall::ListBookings => "list_bookings",
        ApiCall::RoomsWithBookings => "rooms_with_bookings",
        ApiCall::CustomersWithBookings => "customers_with_bookings",
        ApiCall::CustomerHistory(_) => "customer_history",
    }
}

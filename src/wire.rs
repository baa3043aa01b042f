use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::{BodyExt, Full, Limited};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde_json::json;
use tokio::net::TcpStream;

use crate::engine::{Engine, EngineError};
use crate::limits::MAX_BODY_BYTES;
use crate::observability;
use crate::routes::{self, ApiCall, RouteError};

/// Serve one HTTP/1 connection until the peer closes it.
pub async fn process_connection(
    socket: TcpStream,
    engine: Arc<Engine>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let io = TokioIo::new(socket);
    let service = service_fn(move |req: Request<Incoming>| {
        let engine = engine.clone();
        async move { Ok::<_, Infallible>(handle_request(req, &engine).await) }
    });
    http1::Builder::new().serve_connection(io, service).await?;
    Ok(())
}

async fn handle_request(req: Request<Incoming>, engine: &Engine) -> Response<Full<Bytes>> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let body = match Limited::new(req.into_body(), MAX_BODY_BYTES).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => {
            return json_error(StatusCode::PAYLOAD_TOO_LARGE, "request body too large");
        }
    };

    let call = match routes::parse(&method, &path, &body) {
        Ok(call) => call,
        Err(RouteError::UnknownRoute) => {
            tracing::debug!("{method} {path} -> no route");
            return json_error(StatusCode::NOT_FOUND, "not found");
        }
        Err(e @ RouteError::BadJson(_)) => {
            return json_error(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    let op = observability::op_label(&call);
    let response = execute(call, engine).await;

    let status = if response.status().is_success() { "ok" } else { "error" };
    metrics::counter!(observability::REQUESTS_TOTAL, "op" => op, "status" => status).increment(1);
    metrics::histogram!(observability::REQUEST_DURATION_SECONDS, "op" => op)
        .record(started.elapsed().as_secs_f64());
    tracing::debug!("{method} {path} -> {}", response.status());
    response
}

async fn execute(call: ApiCall, engine: &Engine) -> Response<Full<Bytes>> {
    match call {
        ApiCall::Index => text_response(StatusCode::OK, "Hall Booking App API"),
        ApiCall::CreateRoom(new) => match engine.create_room(new).await {
            Ok(room) => json_response(
                StatusCode::CREATED,
                &json!({ "message": "Room created successfully", "room": room }),
            ),
            Err(e) => engine_err(e),
        },
        ApiCall::ListRooms => {
            json_response(StatusCode::OK, &json!({ "rooms": engine.list_rooms().await }))
        }
        ApiCall::BookRoom(new) => match engine.create_booking(new).await {
            Ok(booking) => json_response(
                StatusCode::CREATED,
                &json!({ "message": "Room booked successfully", "booking": booking }),
            ),
            Err(e) => engine_err(e),
        },
        ApiCall::ListBookings => json_response(
            StatusCode::OK,
            &json!({ "bookings": engine.list_bookings().await }),
        ),
        ApiCall::RoomsWithBookings => json_response(
            StatusCode::OK,
            &json!({ "rooms": engine.rooms_with_bookings().await }),
        ),
        ApiCall::CustomersWithBookings => json_response(
            StatusCode::OK,
            &json!({ "customers": engine.customers_with_bookings().await }),
        ),
        ApiCall::CustomerHistory(name) => match engine.customer_history(&name).await {
            Ok(history) => json_response(StatusCode::OK, &json!({ "bookingHistory": history })),
            Err(e) => engine_err(e),
        },
    }
}

/// Map an engine error to its transport status: bad input is the caller's
/// to fix (400), a missing referent is 404, a slot collision is 409.
fn engine_err(e: EngineError) -> Response<Full<Bytes>> {
    let status = match &e {
        EngineError::InvalidInput(_) | EngineError::LimitExceeded(_) => StatusCode::BAD_REQUEST,
        EngineError::RoomNotFound(_) | EngineError::UnknownCustomer(_) => StatusCode::NOT_FOUND,
        EngineError::Conflict(_) => {
            metrics::counter!(observability::BOOKING_CONFLICTS_TOTAL).increment(1);
            StatusCode::CONFLICT
        }
    };
    json_error(status, &e.to_string())
}

fn json_response(status: StatusCode, value: &serde_json::Value) -> Response<Full<Bytes>> {
    let body = serde_json::to_vec(value).unwrap_or_default();
    let mut resp = Response::new(Full::new(Bytes::from(body)));
    *resp.status_mut() = status;
    resp.headers_mut().insert(
        hyper::header::CONTENT_TYPE,
        hyper::header::HeaderValue::from_static("application/json"),
    );
    resp
}

fn json_error(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    json_response(status, &json!({ "error": message }))
}

fn text_response(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(Bytes::from_static(body.as_bytes())));
    *resp.status_mut() = status;
    resp.headers_mut().insert(
        hyper::header::CONTENT_TYPE,
        hyper::header::HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    resp
}

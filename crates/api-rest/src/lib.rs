//! # API REST
//!
//! REST API implementation for the NIC decoder.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for request/response types. The server binary (`nic-run`) builds
//! the [`router`] once at startup and serves it.

#![warn(rust_2018_idioms)]

use api_shared::{
    DecodeErrorRes, DecodeReq, DecodeRes, EncodeReq, EncodeRes, ErrorRes, HealthRes,
    HealthService,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use nic_core::{Decoder, FormatVariant, Sex};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    decoder: Arc<Decoder>,
}

impl AppState {
    pub fn new(decoder: Decoder) -> Self {
        Self {
            decoder: Arc::new(decoder),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, decode_nic, decode_nic_path, encode_nic),
    components(schemas(
        HealthRes,
        DecodeReq,
        DecodeRes,
        DecodeErrorRes,
        EncodeReq,
        EncodeRes,
        ErrorRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with OpenAPI docs at `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/nic/decode", post(decode_nic))
        .route("/nic/decode/:nic", get(decode_nic_path))
        .route("/nic/encode", post(encode_nic))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type DecodeResult = Result<Json<DecodeRes>, (StatusCode, Json<DecodeErrorRes>)>;
type EncodeResult = Result<Json<EncodeRes>, (StatusCode, Json<ErrorRes>)>;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/nic/decode",
    request_body = DecodeReq,
    responses(
        (status = 200, description = "Decoded birth date and sex", body = DecodeRes),
        (status = 422, description = "Number could not be decoded", body = DecodeErrorRes)
    )
)]
/// Decode an NIC number supplied in the request body
///
/// # Errors
/// Returns `422 Unprocessable Entity` with the error kind if the number does not decode.
/// For `range_error` the body still carries the sex.
#[axum::debug_handler]
async fn decode_nic(State(state): State<AppState>, Json(req): Json<DecodeReq>) -> DecodeResult {
    decode_response(&state.decoder, req.nic)
}

#[utoipa::path(
    get,
    path = "/nic/decode/{nic}",
    params(
        ("nic" = String, Path, description = "NIC number in either layout")
    ),
    responses(
        (status = 200, description = "Decoded birth date and sex", body = DecodeRes),
        (status = 422, description = "Number could not be decoded", body = DecodeErrorRes)
    )
)]
/// Decode an NIC number supplied in the path
///
/// # Errors
/// Returns `422 Unprocessable Entity` if the number does not decode.
#[axum::debug_handler]
async fn decode_nic_path(State(state): State<AppState>, Path(nic): Path<String>) -> DecodeResult {
    decode_response(&state.decoder, nic)
}

#[utoipa::path(
    post,
    path = "/nic/encode",
    request_body = EncodeReq,
    responses(
        (status = 200, description = "Encoded NIC number", body = EncodeRes),
        (status = 400, description = "Bad request", body = ErrorRes)
    )
)]
/// Encode a birth date and sex as an NIC number
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the date, sex or format cannot be parsed, or
/// - the year or serial does not fit the requested layout.
#[axum::debug_handler]
async fn encode_nic(State(state): State<AppState>, Json(req): Json<EncodeReq>) -> EncodeResult {
    let birth_date = NaiveDate::parse_from_str(&req.birth_date, "%Y-%m-%d")
        .map_err(|e| bad_request(format!("invalid birth_date '{}': {e}", req.birth_date)))?;
    let sex = Sex::from_wire(&req.sex)
        .ok_or_else(|| bad_request(format!("invalid sex '{}'", req.sex)))?;
    let format = FormatVariant::from_wire(&req.format)
        .ok_or_else(|| bad_request(format!("invalid format '{}'", req.format)))?;

    let nic = state
        .decoder
        .encode(birth_date, sex, format, req.serial)
        .map_err(|e| bad_request(e.to_string()))?;

    Ok(Json(EncodeRes { nic }))
}

fn decode_response(decoder: &Decoder, nic: String) -> DecodeResult {
    match decoder.decode(&nic) {
        Ok(identity) => Ok(Json(DecodeRes::from_identity(nic, &identity))),
        Err(err) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(DecodeErrorRes::from(&err)),
        )),
    }
}

fn bad_request(message: String) -> (StatusCode, Json<ErrorRes>) {
    tracing::debug!("Encode request rejected: {message}");
    (StatusCode::BAD_REQUEST, Json(ErrorRes { message }))
}

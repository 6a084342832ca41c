//! Table booking. Requests are only logged, never stored.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, Json},
};
use bistro_types::{BookingRequest, BookingResponse};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::templates::BOOKING_CONFIRMED_PAGE;
use crate::types::ApiState;

/// Log a booking request and return its reference
pub fn log_booking(request: &BookingRequest) -> String {
    let reference = Uuid::new_v4().to_string();
    info!(
        reference = %reference,
        date = %request.date,
        time = %request.time,
        guests = %request.guests,
        name = %request.name,
        phone = %request.phone,
        comment = %request.comment,
        "Booking request received"
    );
    reference
}

/// JSON booking endpoint
pub async fn create_booking(
    Json(request): Json<BookingRequest>,
) -> (StatusCode, Json<BookingResponse>) {
    let reference = log_booking(&request);
    (
        StatusCode::ACCEPTED,
        Json(BookingResponse {
            message: "Booking request received".to_string(),
            reference,
        }),
    )
}

/// Booking form on the landing page
pub async fn submit_booking_form(
    State(state): State<ApiState>,
    Form(request): Form<BookingRequest>,
) -> Result<Html<String>, ApiError> {
    let reference = log_booking(&request);
    let html = state.pages.render(
        BOOKING_CONFIRMED_PAGE,
        &json!({
            "title": "Бронирование",
            "date": request.date,
            "time": request.time,
            "guests": request.guests,
            "name": request.name,
            "phone": request.phone,
            "comment": request.comment,
            "reference": reference,
        }),
    )?;
    Ok(Html(html))
}

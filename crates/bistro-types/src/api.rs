//! Request and response payloads of the HTTP API

use serde::{Deserialize, Serialize};

/// Success acknowledgement for document writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned on any failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Result of an image upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// Table booking request as submitted by the booking form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub date: String,
    pub time: String,
    #[serde(default = "default_guests")]
    pub guests: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub comment: String,
}

fn default_guests() -> String {
    "2".to_string()
}

/// Acknowledgement of a logged booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub message: String,
    pub reference: String,
}

/// Time slots offered by the booking form, noon until half past one at night
pub const AVAILABLE_TIMES: &[&str] = &[
    "12:00", "12:30", "13:00", "13:30", "14:00", "14:30", "15:00", "15:30", "16:00", "16:30",
    "17:00", "17:30", "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00", "21:30",
    "22:00", "22:30", "23:00", "23:30", "00:00", "00:30", "01:00", "01:30",
];

/// Party sizes offered by the booking form
pub const GUEST_OPTIONS: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10+"];

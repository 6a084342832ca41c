//! Whole-document menu endpoints

use axum::{body::Bytes, extract::State, response::Json};
use bistro_types::{Menu, MessageResponse};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::types::ApiState;

/// Current menu document. Falls back to the seed menu when nothing is
/// stored or the stored document cannot be read.
pub async fn get_menu(State(state): State<ApiState>) -> Json<Menu> {
    let menu = state.menu.load().await;
    debug!("Serving menu with {} categories", menu.len());
    Json(menu)
}

/// Replace the whole menu document
pub async fn put_menu(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let menu: Menu = serde_json::from_slice(&body).map_err(ApiError::InvalidDocument)?;
    state.menu.save(&menu).await?;

    info!("Menu updated ({} categories)", menu.len());
    Ok(Json(MessageResponse {
        message: "Menu updated".to_string(),
    }))
}

//! `GET /amount?blockchain_address=...`.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::state::SharedState;

#[derive(Deserialize)]
pub struct AmountQuery {
    pub blockchain_address: Option<String>,
}

#[derive(Serialize)]
pub struct AmountResponse {
    pub amount: f64,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn get_amount(
    State(state): State<SharedState>,
    Query(query): Query<AmountQuery>,
) -> Result<Json<AmountResponse>, (StatusCode, Json<MessageResponse>)> {
    let address = query.blockchain_address.filter(|a| !a.is_empty()).ok_or((
        StatusCode::BAD_REQUEST,
        Json(MessageResponse {
            message: "missing blockchain_address".to_string(),
        }),
    ))?;

    let node = state.node.lock().await;
    let amount = node.calculate_total_amount(&address);
    Ok(Json(AmountResponse { amount }))
}

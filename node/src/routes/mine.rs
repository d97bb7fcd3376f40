//! `GET /mine` and `GET /mine/start`.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::{SharedState, now};

use super::transactions::MessageResponse;

#[derive(Serialize)]
pub struct MineResponse {
    pub message: String,
    pub block_hash: String,
}

/// `GET /mine`: a single synchronous mining attempt, gated by the same
/// permit the periodic loop uses so a manual call can never race a
/// scheduled one. 400 if a mining operation is already in flight.
pub async fn mine_once(
    State(state): State<SharedState>,
) -> (StatusCode, Json<serde_json::Value>) {
    let result = state
        .scheduler
        .try_mine(|| async {
            let mut node = state.node.lock().await;
            node.mine_once(now()).await
        })
        .await;

    match result {
        Some((_block, hash)) => (
            StatusCode::OK,
            Json(serde_json::json!(MineResponse {
                message: "new block mined".to_string(),
                block_hash: hash,
            })),
        ),
        None => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!(MessageResponse {
                message: "mining already in progress".to_string(),
            })),
        ),
    }
}

/// `GET /mine/start`: starts the periodic mining (and peer-refresh) loop,
/// idempotently.
pub async fn start_mining(State(state): State<SharedState>) -> (StatusCode, Json<MessageResponse>) {
    state.start_background_loops();
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "mining loop started".to_string(),
        }),
    )
}

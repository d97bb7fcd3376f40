//! `PUT /consensus`.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::SharedState;

#[derive(Serialize)]
pub struct ConsensusResponse {
    pub replaced: bool,
}

pub async fn run_consensus(State(state): State<SharedState>) -> Json<ConsensusResponse> {
    let mut node = state.node.lock().await;
    let replaced = node.resolve_conflicts().await;
    Json(ConsensusResponse { replaced })
}

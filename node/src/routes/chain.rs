//! `GET /chain`.

use axum::{Json, extract::State};
use serde::Serialize;

use chain::Block;

use crate::state::SharedState;

#[derive(Serialize)]
pub struct ChainResponse {
    pub chain: Vec<Block>,
}

pub async fn get_chain(State(state): State<SharedState>) -> Json<ChainResponse> {
    let node = state.node.lock().await;
    Json(ChainResponse {
        chain: node.chain().to_vec(),
    })
}

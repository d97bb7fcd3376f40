//! `GET|POST|PUT|DELETE /transactions`.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use chain::Transaction;

use crate::state::SharedState;

#[derive(Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub length: usize,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn message(msg: impl Into<String>) -> Json<MessageResponse> {
    Json(MessageResponse { message: msg.into() })
}

/// Request body shared by `POST` and `PUT /transactions`. `sender_public_key`
/// and `signature` are optional so the coinbase-style callers used by peers
/// (and tests) can omit them; regular client submissions must supply both.
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    pub sender_blockchain_address: Option<String>,
    pub recipient_blockchain_address: Option<String>,
    pub value: Option<f64>,
    pub sender_public_key: Option<String>,
    pub signature: Option<String>,
}

impl TransactionRequest {
    fn require_fields(&self) -> Result<(&str, &str, f64), (StatusCode, Json<MessageResponse>)> {
        let sender = self
            .sender_blockchain_address
            .as_deref()
            .filter(|s| !s.is_empty());
        let recipient = self
            .recipient_blockchain_address
            .as_deref()
            .filter(|s| !s.is_empty());
        match (sender, recipient, self.value) {
            (Some(sender), Some(recipient), Some(value)) => Ok((sender, recipient, value)),
            _ => Err((
                StatusCode::BAD_REQUEST,
                message("missing sender_blockchain_address, recipient_blockchain_address, or value"),
            )),
        }
    }
}

pub async fn list_transactions(State(state): State<SharedState>) -> Json<TransactionsResponse> {
    let node = state.node.lock().await;
    let transactions = node.pool().to_vec();
    Json(TransactionsResponse {
        length: transactions.len(),
        transactions,
    })
}

/// `POST /transactions`: validates, accepts into the pool, and gossips to
/// every known peer on success.
pub async fn create_transaction(
    State(state): State<SharedState>,
    Json(body): Json<TransactionRequest>,
) -> (StatusCode, Json<MessageResponse>) {
    let (sender, recipient, value) = match body.require_fields() {
        Ok(fields) => fields,
        Err(response) => return response,
    };

    let mut node = state.node.lock().await;
    let accepted = node
        .create_transaction(
            sender,
            recipient,
            value,
            body.sender_public_key.as_deref(),
            body.signature.as_deref(),
        )
        .await;

    if accepted {
        (StatusCode::CREATED, message("transaction created"))
    } else {
        (StatusCode::BAD_REQUEST, message("transaction rejected"))
    }
}

/// `PUT /transactions`: accepts into the pool with no gossip. Used by peers
/// relaying a transaction they already broadcast once.
pub async fn add_transaction(
    State(state): State<SharedState>,
    Json(body): Json<TransactionRequest>,
) -> (StatusCode, Json<MessageResponse>) {
    let (sender, recipient, value) = match body.require_fields() {
        Ok(fields) => fields,
        Err(response) => return response,
    };

    let mut node = state.node.lock().await;
    let accepted = node.add_transaction(
        sender,
        recipient,
        value,
        body.sender_public_key.as_deref(),
        body.signature.as_deref(),
    );

    if accepted {
        (StatusCode::OK, message("transaction added"))
    } else {
        (StatusCode::BAD_REQUEST, message("transaction rejected"))
    }
}

/// `DELETE /transactions`: clears the pool. Used by peers once a block
/// carrying these transactions has been appended.
pub async fn clear_transactions(
    State(state): State<SharedState>,
) -> (StatusCode, Json<MessageResponse>) {
    let mut node = state.node.lock().await;
    node.clear_pool();
    (StatusCode::OK, message("transaction pool cleared"))
}

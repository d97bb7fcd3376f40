// node/tests/wire_api.rs
//
// Exercises the wire API end to end against an in-process router (no
// real socket), covering the concrete scenarios from spec §8: a fresh
// node's genesis block, rejection of a bad signature, and a mined
// block appearing on the chain afterwards.

use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use chain::{Keypair, Node, NodeConfig, PeerFinder};
use node::build_router;
use node::state::{AppState, now};

fn test_app() -> axum::Router {
    let node_cfg = NodeConfig::default();
    let keypair = Keypair::generate();
    let reward_address = keypair.address().to_string();
    let peer_finder = PeerFinder::new("127.0.0.1", 5000);
    let chain_node = Node::new(
        node_cfg.ledger,
        now(),
        "127.0.0.1:5000".to_string(),
        reward_address,
        peer_finder,
    );
    let state = Arc::new(AppState::new(chain_node, CancellationToken::new()));
    build_router(state)
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn genesis_chain_has_one_block_with_fixed_previous_hash() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/chain").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let blocks = json["chain"].as_array().unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["nonce"], 0);
    assert_eq!(
        blocks[0]["previous_hash"],
        "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
    );
    assert!(blocks[0]["transactions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn post_transaction_with_bad_signature_is_rejected_and_pool_stays_empty() {
    let app = test_app();

    let body = serde_json::json!({
        "sender_blockchain_address": "A",
        "recipient_blockchain_address": "B",
        "value": 1.0,
        "sender_public_key": "00".repeat(64),
        "signature": "00".repeat(64),
    });

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/transactions")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let pool_response = app
        .oneshot(Request::builder().uri("/transactions").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = json_body(pool_response).await;
    assert_eq!(json["length"], 0);
}

#[tokio::test]
async fn post_transaction_missing_fields_is_rejected() {
    let app = test_app();

    let body = serde_json::json!({ "sender_blockchain_address": "A" });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/transactions")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mine_endpoint_appends_a_block_visible_on_the_chain() {
    let app = test_app();

    let mine_response = app
        .clone()
        .oneshot(Request::builder().uri("/mine").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(mine_response.status(), StatusCode::OK);

    let chain_response = app
        .oneshot(Request::builder().uri("/chain").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = json_body(chain_response).await;
    let blocks = json["chain"].as_array().unwrap();
    assert_eq!(blocks.len(), 2);
    assert!(
        blocks[1]["nonce"].as_u64().is_some(),
        "mined block must carry a nonce"
    );
}

#[tokio::test]
async fn amount_query_without_address_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/amount").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn consensus_with_no_known_peers_reports_not_replaced() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/consensus")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["replaced"], false);
}

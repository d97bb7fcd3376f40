//! Wire API for the proof-of-work blockchain node (spec §6).
//!
//! Split out of `main.rs` so the route wiring (`build_router`) is
//! reusable from integration tests without standing up a real listener.

pub mod config;
pub mod routes;
pub mod state;

use axum::{
    Router,
    routing::{get, put},
};

use state::SharedState;

/// Builds the axum router for all wire-API routes, wired onto `state`.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/chain", get(routes::chain::get_chain))
        .route(
            "/transactions",
            get(routes::transactions::list_transactions)
                .post(routes::transactions::create_transaction)
                .put(routes::transactions::add_transaction)
                .delete(routes::transactions::clear_transactions),
        )
        .route("/mine", get(routes::mine::mine_once))
        .route("/mine/start", get(routes::mine::start_mining))
        .route("/consensus", put(routes::consensus::run_consensus))
        .route("/amount", get(routes::amount::get_amount))
        .with_state(state)
}

//! Network information handler.

use axum::{extract::State, Json};
use std::sync::Arc;

use super::AppState;
use crate::network::{hostname, network_addresses};
use crate::web::dto::NetworkInfoResponse;

/// GET /api/network-info - Addresses peers can use to reach this server.
#[utoipa::path(
    get,
    path = "/api/network-info",
    tag = "network",
    responses(
        (status = 200, description = "Host network information", body = NetworkInfoResponse)
    )
)]
pub async fn network_info(State(state): State<Arc<AppState>>) -> Json<NetworkInfoResponse> {
    let addresses = network_addresses().unwrap_or_else(|e| {
        tracing::warn!("Failed to enumerate network interfaces: {}", e);
        Vec::new()
    });

    Json(NetworkInfoResponse {
        hostname: hostname(),
        addresses,
        port: state.port,
    })
}

pub mod error;
pub mod handlers;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use handlers::{get_points, health_check, process_receipt, PointsResponse, ProcessReceiptResponse};

use crate::store::ReceiptStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 共享状态：收据存储
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }
}

/// 构建路由
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state)
}

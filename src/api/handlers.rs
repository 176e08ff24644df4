use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::models::ReceiptSubmission;
use crate::service::score_breakdown;
use axum::extract::{rejection::JsonRejection, Json, Path, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// 提交收据的响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// 积分查询的响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 提交收据，返回分配的ID
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let Json(submission) = payload.map_err(|rejection| {
        warn!("Rejected receipt submission: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    let receipt = state.store.insert(submission);
    info!(
        "Receipt {} stored ({} items, retailer {:?})",
        receipt.id(),
        receipt.items().len(),
        receipt.retailer()
    );

    Ok(Json(ProcessReceiptResponse {
        id: receipt.id().to_string(),
    }))
}

/// 按ID查询收据积分
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let receipt = state.store.get(&id).map_err(|e| {
        warn!("Receipt {} not found", id);
        ApiError::from(e)
    })?;

    let breakdown = score_breakdown(&receipt);
    let points = breakdown.total();
    debug!("Receipt {} breakdown: {:?}", id, breakdown);
    info!("Receipt {} scored {} points", id, points);

    Ok(Json(PointsResponse { points }))
}

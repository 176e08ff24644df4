pub mod api;
pub mod config;
pub mod models;
pub mod service;
pub mod store;

pub use api::{build_router, AppState};
pub use config::AppConfig;
pub use models::{Item, PointsBreakdown, Receipt, ReceiptSubmission};
pub use service::{compute_points, score_breakdown};
pub use store::{MemoryReceiptStore, ReceiptStore, StoreError};

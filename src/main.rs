use receipt_processor::{build_router, AppConfig, AppState, MemoryReceiptStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置
    let config = AppConfig::load()?;

    // 初始化日志 - 本地时间格式，RUST_LOG 优先
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))?;
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();

    info!("Starting server with config: {:?}", config);

    // 收据存储 (内存)
    let store = Arc::new(MemoryReceiptStore::new());
    let app = build_router(AppState::new(store));

    // 启动服务器
    let addr = config.bind_addr();
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /receipts/process       - submit a receipt");
    info!("  GET  /receipts/:id/points    - points awarded for a receipt");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

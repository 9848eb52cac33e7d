//! Runs the real catalog API on an ephemeral port for client tests.

use catalog_api::{create_routes, db};
use catalog_client::ApiService;
use tokio::net::TcpListener;

pub async fn spawn_api() -> ApiService {
    let pool = db::connect_in_memory().await.expect("in-memory pool");
    db::prepare(&pool).await.expect("migrate and seed");
    let app = create_routes(pool);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    ApiService::new(format!("http://{}", addr))
}

/// Nothing listens on port 1.
pub fn unreachable_api() -> ApiService {
    ApiService::new("http://127.0.0.1:1")
}

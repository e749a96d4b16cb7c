use axum::Router;
use tower_http::services::ServeDir;

pub fn router(assets_dir: &str) -> Router {
  Router::new().fallback_service(ServeDir::new(assets_dir))
}

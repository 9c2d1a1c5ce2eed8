use super::handlers;
use axum::{
	Router,
	extract::DefaultBodyLimit,
	routing::{get, post},
};

/// The upload form, the status probe and the conversion endpoint.
pub fn build_router(max_upload_bytes: usize) -> Router {
	Router::new()
		.route("/", get(handlers::index))
		.route("/status", get(handlers::status))
		.route("/convert", post(handlers::convert))
		.layer(DefaultBodyLimit::max(max_upload_bytes))
}

//! Builds the [`CorsLayer`] from the configured origin patterns.

use crate::config::CorsConfig;
use anyhow::{Context, Result};
use axum::http::{Method, header::HeaderValue, request::Parts};
use regex::Regex;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync + 'static>;

fn compile_pattern(pattern: &str) -> Result<Predicate> {
	Ok(if pattern == "*" {
		Box::new(|_: &str| true)
	} else if let Some(regex) = pattern.strip_prefix('/').and_then(|p| p.strip_suffix('/')) {
		let re = Regex::new(regex).with_context(|| format!("invalid origin regex '{pattern}'"))?;
		Box::new(move |origin: &str| re.is_match(origin))
	} else if let Some(suffix) = pattern.strip_prefix('*').filter(|s| !s.is_empty() && !s.contains('*')) {
		let suffix = suffix.to_string();
		Box::new(move |origin: &str| origin.ends_with(&suffix))
	} else if let Some(prefix) = pattern.strip_suffix('*').filter(|s| !s.is_empty() && !s.contains('*')) {
		let prefix = prefix.to_string();
		Box::new(move |origin: &str| origin.starts_with(&prefix))
	} else {
		let exact = pattern.to_string();
		Box::new(move |origin: &str| origin == exact)
	})
}

/// Allows `GET` and `POST` from every origin that matches one of the configured patterns.
pub fn build_cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
	let checks = config
		.allowed_origins
		.iter()
		.map(|pattern| compile_pattern(pattern))
		.collect::<Result<Vec<_>>>()?;

	Ok(CorsLayer::new()
		.allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _req: &Parts| {
			let origin = origin.to_str().unwrap_or_default();
			checks.iter().any(|check| check(origin))
		}))
		.allow_methods([Method::GET, Method::POST])
		.max_age(Duration::from_secs(config.max_age_seconds_or_default())))
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{
		Router,
		body::Body,
		http::{Request, header},
		routing::get,
	};
	use tower::ServiceExt;

	async fn allows(patterns: &[&str], origin: &str) -> bool {
		let config = CorsConfig {
			allowed_origins: patterns.iter().map(|p| (*p).to_string()).collect(),
			max_age_seconds: Some(60),
		};
		let app = Router::new()
			.route("/", get(|| async { "ok" }))
			.layer(build_cors_layer(&config).unwrap());
		let request = Request::builder()
			.uri("/")
			.header(header::ORIGIN, origin)
			.body(Body::empty())
			.unwrap();
		let response = app.oneshot(request).await.unwrap();
		response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_some()
	}

	#[tokio::test]
	async fn star_allows_everything() {
		assert!(allows(&["*"], "http://localhost:3000").await);
	}

	#[tokio::test]
	async fn exact() {
		assert!(allows(&["https://example.org"], "https://example.org").await);
		assert!(!allows(&["https://example.org"], "https://example.org.evil").await);
	}

	#[tokio::test]
	async fn suffix_and_prefix() {
		assert!(allows(&["*.example.org"], "https://app.example.org").await);
		assert!(!allows(&["*.example.org"], "https://example.com").await);
		assert!(allows(&["http://localhost*"], "http://localhost:5173").await);
		assert!(!allows(&["http://localhost*"], "https://localhost:5173").await);
	}

	#[tokio::test]
	async fn regex() {
		let pattern = r"/^https://(a|b)\.example\.org$/";
		assert!(allows(&[pattern], "https://b.example.org").await);
		assert!(!allows(&[pattern], "https://c.example.org").await);
	}

	#[test]
	fn invalid_regex() {
		let config = CorsConfig {
			allowed_origins: vec!["/(unclosed/".to_string()],
			max_age_seconds: None,
		};
		let err = build_cors_layer(&config).unwrap_err();
		assert_eq!(err.to_string(), "invalid origin regex '/(unclosed/'");
	}
}

//! Cross-Origin Resource Sharing settings.
//!
//! `allowed_origins` accepts:
//! - `*` for every origin
//! - exact origins like `https://example.org`
//! - a leading or trailing glob like `*.example.org` or `https://dev-*`
//! - a regular expression between slashes like `/^https://(a|b)\.example\.org$/`

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
	/// Defaults to `["*"]`.
	#[serde(default = "default_allowed_origins")]
	pub allowed_origins: Vec<String>,

	/// How long browsers may cache a preflight response. Defaults to 86400 (1 day).
	#[serde(default)]
	pub max_age_seconds: Option<u64>,
}

pub const DEFAULT_MAX_AGE_SECONDS: u64 = 86400;

fn default_allowed_origins() -> Vec<String> {
	vec!["*".to_string()]
}

impl CorsConfig {
	pub fn max_age_seconds_or_default(&self) -> u64 {
		self.max_age_seconds.unwrap_or(DEFAULT_MAX_AGE_SECONDS)
	}
}

impl Default for CorsConfig {
	fn default() -> Self {
		Self {
			allowed_origins: default_allowed_origins(),
			max_age_seconds: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_when_fields_are_missing() {
		let cors: CorsConfig = serde_yaml_ng::from_str("{}").unwrap();
		assert_eq!(cors, CorsConfig::default());
		assert_eq!(cors.max_age_seconds_or_default(), 86400);
	}
}

use super::{CorsConfig, ServerConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs::File, io::BufReader, io::Read, path::Path};

/// Top-level configuration file.
///
/// ```yaml
/// server:
///   ip: 127.0.0.1
///   port: 5000
///   max_upload_bytes: 10485760
/// cors:
///   allowed_origins: ["*"]
///   max_age_seconds: 86400
/// ```
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	#[serde(default)]
	pub server: ServerConfig,

	#[serde(default)]
	pub cors: CorsConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::io::Write;

	#[test]
	fn parse_full_config() {
		let cfg = Config::from_string(
			"server:\n  ip: 0.0.0.0\n  port: 8080\n  max_upload_bytes: 1024\ncors:\n  allowed_origins:\n    - https://example.org\n  max_age_seconds: 60\n",
		)
		.unwrap();
		assert_eq!(
			cfg,
			Config {
				server: ServerConfig {
					ip: Some("0.0.0.0".to_string()),
					port: Some(8080),
					max_upload_bytes: Some(1024),
				},
				cors: CorsConfig {
					allowed_origins: vec!["https://example.org".to_string()],
					max_age_seconds: Some(60),
				},
			}
		);
	}

	#[test]
	fn parse_empty_config() {
		assert_eq!(Config::from_string("").unwrap(), Config::default());
		assert_eq!(Config::default().cors.allowed_origins, ["*"]);
	}

	#[test]
	fn parse_invalid_config() {
		let err = Config::from_string("server:\n  pi: 3.14\n").unwrap_err();
		assert!(err.to_string().contains("unknown field `pi`"), "{err}");
		assert!(Config::from_string("uploads: 3\n").is_err());
	}

	#[test]
	fn from_path() -> Result<()> {
		let mut file = tempfile::NamedTempFile::new()?;
		writeln!(file, "server:\n  port: 6001")?;
		assert_eq!(Config::from_path(file.path())?.server.port, Some(6001));

		let err = Config::from_path(Path::new("/does/not/exist.yml")).unwrap_err();
		assert!(err.to_string().starts_with("opening config file"));
		Ok(())
	}
}

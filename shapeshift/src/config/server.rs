use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_IP: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
	/// IP to bind to.
	pub ip: Option<String>,

	/// TCP port to bind to.
	pub port: Option<u16>,

	/// Largest accepted request body.
	pub max_upload_bytes: Option<usize>,
}

impl ServerConfig {
	pub fn override_optional_ip(&mut self, ip: &Option<String>) {
		if ip.is_some() {
			self.ip.clone_from(ip);
		}
	}

	pub fn override_optional_port(&mut self, port: &Option<u16>) {
		if port.is_some() {
			self.port = *port;
		}
	}

	pub fn override_optional_max_upload_bytes(&mut self, max_upload_bytes: &Option<usize>) {
		if max_upload_bytes.is_some() {
			self.max_upload_bytes = *max_upload_bytes;
		}
	}

	/// Applies `BIND` and `PORT` as returned by `lookup` (normally `std::env::var`).
	pub fn override_from_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
		self.override_optional_ip(&lookup("BIND"));
		let port = lookup("PORT")
			.map(|v| v.trim().parse::<u16>().with_context(|| format!("invalid PORT '{v}'")))
			.transpose()?;
		self.override_optional_port(&port);
		Ok(())
	}

	pub fn ip_or_default(&self) -> &str {
		self.ip.as_deref().unwrap_or(DEFAULT_IP)
	}

	pub fn port_or_default(&self) -> u16 {
		self.port.unwrap_or(DEFAULT_PORT)
	}

	pub fn max_upload_bytes_or_default(&self) -> usize {
		self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
	}
}

//! [`Blob`] is the owned byte buffer passed into and out of the converters.
//!
//! ```rust
//! use shapeshift_core::Blob;
//!
//! let blob = Blob::from("Xylofön");
//! assert_eq!(blob.len(), 8);
//! assert_eq!(blob.as_str().unwrap(), "Xylofön");
//! ```

use anyhow::{Context, Result};
use std::fmt::Debug;
use std::path::Path;

/// A thin wrapper around `Vec<u8>`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Borrows the bytes as UTF-8 text.
	///
	/// # Errors
	/// Fails if the bytes are not valid UTF-8.
	pub fn as_str(&self) -> Result<&str> {
		std::str::from_utf8(&self.0).context("content is not valid UTF-8")
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the first `n` bytes (or fewer) as lowercase hex, for log lines.
	#[must_use]
	pub fn head_as_hex(&self, n: usize) -> String {
		self.0.iter().take(n).map(|byte| format!("{byte:02x}")).collect::<Vec<_>>().join(" ")
	}

	pub fn save_to_file(&self, path: &Path) -> Result<()> {
		std::fs::write(path, &self.0).with_context(|| format!("writing {} bytes to {path:?}", self.0.len()))
	}

	pub fn load_from_file(path: &Path) -> Result<Self> {
		Ok(Blob(std::fs::read(path).with_context(|| format!("reading {path:?}"))?))
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(item: &[u8; N]) -> Self {
		Blob(item.to_vec())
	}
}

impl From<String> for Blob {
	fn from(item: String) -> Self {
		Blob(item.into_bytes())
	}
}

impl From<&str> for Blob {
	fn from(item: &str) -> Self {
		Blob(item.as_bytes().to_vec())
	}
}

impl From<Blob> for Vec<u8> {
	fn from(blob: Blob) -> Self {
		blob.0
	}
}

impl AsRef<[u8]> for Blob {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.0.len() > 16 {
			write!(f, "Blob({}): {} ...", self.0.len(), self.head_as_hex(16))
		} else {
			write!(f, "Blob({}): {}", self.0.len(), self.head_as_hex(16))
		}
	}
}

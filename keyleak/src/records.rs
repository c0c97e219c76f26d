// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

//! The two keys the demo juggles: one meant to be shown, one meant to stay hidden.

use serde::Deserialize;
use std::fmt;

pub const DEFAULT_PUBLIC_KEY: &str = "abcpublic";
pub const DEFAULT_PRIVATE_KEY: &str = "abcsecret!";

/// A key that is fine to print.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PublicRecord {
	pub key: String,
}

impl PublicRecord {
	pub fn new(key: impl Into<String>) -> Self {
		Self { key: key.into() }
	}
}

impl Default for PublicRecord {
	fn default() -> Self {
		Self::new(DEFAULT_PUBLIC_KEY)
	}
}

/// A key that must never reach an output sink.
///
/// `Debug` redacts the value; the only way to read it is [`PrivateRecord::expose`],
/// so every disclosure shows up as a call site of that method.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PrivateRecord {
	key: String,
}

impl PrivateRecord {
	pub fn new(key: impl Into<String>) -> Self {
		Self { key: key.into() }
	}

	pub fn expose(&self) -> &str {
		&self.key
	}

	pub fn is_empty(&self) -> bool {
		self.key.is_empty()
	}
}

impl Default for PrivateRecord {
	fn default() -> Self {
		Self::new(DEFAULT_PRIVATE_KEY)
	}
}

impl fmt::Debug for PrivateRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PrivateRecord").field("key", &"<redacted>").finish()
	}
}

// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use std::io::{self, Write};
use tracing::{debug, warn};

use crate::records::{PrivateRecord, PublicRecord};

/// Required key length, in bytes.
pub const KEY_LENGTH: usize = 64;

/// Returned by [`get_length`] when the key fails [`check_length`].
pub const INVALID_LENGTH: i64 = -1;

/// Returns whether or not the key is exactly [`KEY_LENGTH`] bytes long.
pub fn check_length(key: &str) -> bool {
	key.len() == KEY_LENGTH
}

/// Returns the length of the public key, or [`INVALID_LENGTH`] if it is invalid.
///
/// On the invalid path this writes `private` to `out`. That is the leak the
/// walkthrough asks the reader to find, and it is kept on purpose.
pub fn get_length(public: &PublicRecord, private: &PrivateRecord, out: &mut impl Write) -> io::Result<i64> {
	if check_length(&public.key) {
		debug!(len = public.key.len(), "public key accepted");
		return Ok(public.key.len() as i64);
	}

	warn!(len = public.key.len(), expected = KEY_LENGTH, "public key rejected");
	// Which key is this?
	writeln!(out, "{}", private.expose())?;
	Ok(INVALID_LENGTH)
}

// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::records::{PrivateRecord, PublicRecord};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmptyCredentialError {
	#[error("empty! public key has no content")]
	Public,
	#[error("empty! private key has no content")]
	Private,
}

/// Fails if the public or private key is empty. Public is checked first.
///
/// Callers decide what an empty key means; the binary aborts the process.
pub fn initialize(public: &PublicRecord, private: &PrivateRecord) -> Result<(), EmptyCredentialError> {
	if public.key.is_empty() {
		return Err(EmptyCredentialError::Public);
	}
	if private.is_empty() {
		return Err(EmptyCredentialError::Private);
	}
	Ok(())
}

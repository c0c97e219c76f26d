// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

//! Does this program leak the private key?
//!
//! A deliberately small program meant to be read with hover docs,
//! jump-to-definition and find-references. Follow [`Demo::run`] from the top.

pub mod config;
pub mod length;
pub mod logging;
pub mod records;
pub mod validate;

use argh::FromArgs;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{error, info};

use config::{Args, Config};
use records::{PrivateRecord, PublicRecord};
use validate::EmptyCredentialError;

#[derive(Debug, Error)]
pub enum RunError {
	#[error(transparent)]
	EmptyCredential(#[from] EmptyCredentialError),
	#[error("Failed to write output")]
	Output(#[from] io::Error),
}

/// How the process should end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	Exit(u8),
	/// Startup validation failed; the binary aborts instead of exiting.
	Abort,
}

#[derive(Debug, Clone, Default)]
pub struct Demo {
	public: PublicRecord,
	private: PrivateRecord,
}

impl Demo {
	pub fn new(public: PublicRecord, private: PrivateRecord) -> Self {
		Self { public, private }
	}

	pub fn from_config(config: &Config) -> Self {
		Self::new(config.public(), config.private())
	}

	/// Validates both keys, then prints the length of the public key.
	///
	/// Returns the printed value.
	pub fn run(&self, out: &mut impl Write) -> Result<i64, RunError> {
		// What does initialize do? Hover to see.
		validate::initialize(&self.public, &self.private)?;
		let len = length::get_length(&self.public, &self.private, out)?;
		writeln!(out, "{len}")?;
		Ok(len)
	}
}

/// Run keyleak with the given command-line arguments, program name excluded.
pub fn run(args: &[&str], out: &mut impl Write) -> Status {
	let parsed = match Args::from_args(&["keyleak"], args) {
		Ok(args) => args,
		Err(early_exit) => {
			println!("{}", early_exit.output);
			return Status::Exit(u8::from(early_exit.status.is_err()));
		}
	};

	logging::init(parsed.verbose);

	let config = match Config::from_args(&parsed) {
		Ok(config) => config,
		Err(err) => {
			eprintln!("Error: {err:?}");
			return Status::Exit(1);
		}
	};

	let demo = Demo::from_config(&config);
	info!(?demo, "starting");
	match demo.run(out) {
		Ok(_) => Status::Exit(0),
		Err(RunError::EmptyCredential(err)) => {
			error!("{err}");
			Status::Abort
		}
		Err(err) => {
			eprintln!("Error: {err:?}");
			Status::Exit(1)
		}
	}
}

// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "KEYLEAK_LOG";

/// Installs a stderr subscriber. Stdout carries program output only.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
	let fallback = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

	let _ = tracing_subscriber::registry()
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
		.with(filter)
		.try_init();
}

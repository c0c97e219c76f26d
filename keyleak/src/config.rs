// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use argh::FromArgs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::records::{PrivateRecord, PublicRecord};

#[derive(FromArgs, Debug)]
/// Check the public key length. Does it leak the private key?
pub struct Args {
	/// TOML file with a [keys] table
	#[argh(option)]
	pub config: Option<PathBuf>,

	/// public key, overrides the config file
	#[argh(option)]
	pub public: Option<String>,

	/// private key, overrides the config file
	#[argh(option)]
	pub private: Option<String>,

	/// log at debug level (KEYLEAK_LOG takes precedence)
	#[argh(switch, short = 'v')]
	pub verbose: bool,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
	#[serde(default)]
	pub keys: KeysConfig,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct KeysConfig {
	pub public: Option<PublicRecord>,
	pub private: Option<PrivateRecord>,
}

impl Config {
	pub fn load(path: &Path) -> Result<Self> {
		let source = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
		Self::parse(&source).with_context(|| format!("Failed to parse {}", path.display()))
	}

	pub fn parse(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Builds the config for a run: file first (if any), then command-line overrides.
	pub fn from_args(args: &Args) -> Result<Self> {
		let mut config = match &args.config {
			Some(path) => Self::load(path)?,
			None => Self::default(),
		};
		if let Some(public) = &args.public {
			config.keys.public = Some(PublicRecord::new(public.as_str()));
		}
		if let Some(private) = &args.private {
			config.keys.private = Some(PrivateRecord::new(private.as_str()));
		}
		Ok(config)
	}

	pub fn public(&self) -> PublicRecord {
		self.keys.public.clone().unwrap_or_default()
	}

	pub fn private(&self) -> PrivateRecord {
		self.keys.private.clone().unwrap_or_default()
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Bridge configuration
//!
//! Defaults can be overridden from the environment:
//! - `SIDELOADER_BACKEND`: path to the backend library
//! - `SIDELOADER_ENCODING`: `utf8` or `ascii`

use std::{env, path::PathBuf};

use sideloader_abi::constants::BACKEND_LIBRARY_STEM;

use crate::{backend::library_file_name, encoding::Encoding, error::ConfigError};

pub const BACKEND_ENV: &str = "SIDELOADER_BACKEND";
pub const ENCODING_ENV: &str = "SIDELOADER_ENCODING";

/// Directory the backend library is looked up in when no explicit path is given
pub const DEFAULT_LIBRARY_DIR: &str = "Dependencies";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
	/// Explicit backend library path, takes precedence over `library_dir`
	pub library: Option<PathBuf>,
	pub library_dir: PathBuf,
	pub encoding: Encoding,
}

impl Default for BridgeConfig {
	fn default() -> Self {
		Self {
			library: None,
			library_dir: PathBuf::from(DEFAULT_LIBRARY_DIR),
			encoding: Encoding::default(),
		}
	}
}

impl BridgeConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_library(mut self, path: impl Into<PathBuf>) -> Self {
		self.library = Some(path.into());
		self
	}

	pub fn with_library_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.library_dir = dir.into();
		self
	}

	pub fn with_encoding(mut self, encoding: Encoding) -> Self {
		self.encoding = encoding;
		self
	}

	/// Defaults overridden by the process environment
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Defaults overridden by whatever `lookup` returns for each variable
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::default();

		if let Some(path) = lookup(BACKEND_ENV).filter(|value| !value.is_empty()) {
			config = config.with_library(path);
		}

		if let Some(encoding) = lookup(ENCODING_ENV).filter(|value| !value.is_empty()) {
			config = config.with_encoding(encoding.parse()?);
		}

		Ok(config)
	}

	pub fn library_path(&self) -> PathBuf {
		match &self.library {
			Some(path) => path.clone(),
			None => self.library_dir.join(library_file_name(BACKEND_LIBRARY_STEM)),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::{collections::HashMap, path::Path};

	use super::*;

	fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		move |key| vars.get(key).cloned()
	}

	#[test]
	fn test_default_library_path() {
		let config = BridgeConfig::default();

		assert_eq!(config.encoding, Encoding::Utf8);
		assert_eq!(config.library_path(), Path::new("Dependencies").join(library_file_name("SideloaderBackend")));
	}

	#[test]
	fn test_explicit_library_takes_precedence() {
		let config = BridgeConfig::new().with_library_dir("vendor").with_library("/opt/backend/libSideloaderBackend.so");
		assert_eq!(config.library_path(), PathBuf::from("/opt/backend/libSideloaderBackend.so"));
	}

	#[test]
	fn test_library_dir() {
		let config = BridgeConfig::new().with_library_dir("vendor");
		assert_eq!(config.library_path(), Path::new("vendor").join(library_file_name("SideloaderBackend")));
	}

	#[test]
	fn test_from_lookup_empty() {
		assert_eq!(BridgeConfig::from_lookup(lookup(&[])).unwrap(), BridgeConfig::default());
	}

	#[test]
	fn test_from_lookup_overrides() {
		let config =
			BridgeConfig::from_lookup(lookup(&[(BACKEND_ENV, "/tmp/libbackend.so"), (ENCODING_ENV, "ASCII")]))
				.unwrap();

		assert_eq!(config.library, Some(PathBuf::from("/tmp/libbackend.so")));
		assert_eq!(config.encoding, Encoding::Ascii);
	}

	#[test]
	fn test_from_lookup_ignores_empty_values() {
		let config = BridgeConfig::from_lookup(lookup(&[(BACKEND_ENV, ""), (ENCODING_ENV, "")])).unwrap();
		assert_eq!(config, BridgeConfig::default());
	}

	#[test]
	fn test_from_lookup_rejects_unknown_encoding() {
		let err = BridgeConfig::from_lookup(lookup(&[(ENCODING_ENV, "ebcdic")])).unwrap_err();
		assert_eq!(
			err,
			ConfigError::UnknownEncoding {
				value: "ebcdic".to_string(),
			}
		);
	}
}

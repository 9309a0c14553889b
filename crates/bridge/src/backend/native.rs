// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Backend loaded from the prebuilt shared library

use std::path::{Path, PathBuf};

use libloading::Library;
use sideloader_abi::{backend::HelloFn, constants::HELLO_SYMBOL, data::DStr};
use tracing::{debug, info, instrument, trace};

use super::Backend;
use crate::{config::BridgeConfig, error::BackendError};

/// Backend implemented by a dynamically loaded library
pub struct NativeBackend {
	path: PathBuf,
	hello: HelloFn,
	/// Keeps `hello` mapped; must outlive every call through it
	_library: Library,
}

impl NativeBackend {
	/// Load the library at `path` and resolve its entry points
	#[instrument(name = "backend::native::load", level = "debug", skip_all, fields(path = %path.as_ref().display()))]
	pub fn load(path: impl AsRef<Path>) -> Result<Self, BackendError> {
		let path = path.as_ref();

		// SAFETY: loading runs the library's initialisers, the backend library is trusted
		let library = unsafe { Library::new(path) }.map_err(|source| BackendError::Load {
			path: path.to_path_buf(),
			source,
		})?;
		debug!("library mapped");

		// SAFETY: `hello` is declared by the backend as `void hello(DString)`
		let hello = unsafe { library.get::<HelloFn>(HELLO_SYMBOL) }.map(|symbol| *symbol).map_err(|source| {
			BackendError::Symbol {
				symbol: symbol_name(HELLO_SYMBOL),
				source,
			}
		})?;

		info!("loaded backend from {}", path.display());

		Ok(Self {
			path: path.to_path_buf(),
			hello,
			_library: library,
		})
	}

	pub fn load_from(config: &BridgeConfig) -> Result<Self, BackendError> {
		Self::load(config.library_path())
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl Backend for NativeBackend {
	fn hello(&self, message: DStr<'_>) {
		trace!(len = message.len(), "calling backend hello");
		// SAFETY: the descriptor borrows bytes that stay live for the whole call
		unsafe { (self.hello)(message.raw()) }
	}
}

fn symbol_name(symbol: &[u8]) -> String {
	String::from_utf8_lossy(symbol.strip_suffix(b"\0").unwrap_or(symbol)).into_owned()
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Backends exposing the `hello` entry point

use std::path::PathBuf;

use sideloader_abi::data::DStr;

pub mod native;

pub trait Backend {
	/// Deliver a message; `message` is only valid for the duration of the call
	fn hello(&self, message: DStr<'_>);
}

impl<B: Backend + ?Sized> Backend for &B {
	fn hello(&self, message: DStr<'_>) {
		(**self).hello(message)
	}
}

impl<B: Backend + ?Sized> Backend for Box<B> {
	fn hello(&self, message: DStr<'_>) {
		(**self).hello(message)
	}
}

/// Platform file name of a shared library, e.g. `libSideloaderBackend.dylib` on macOS
pub fn library_file_name(stem: &str) -> PathBuf {
	PathBuf::from(libloading::library_filename(stem))
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Marshalling of text into descriptors for the backend

use sideloader_abi::data::DStr;
use tracing::{debug, instrument, warn};

use crate::{
	backend::Backend,
	encoding::Encoding,
	error::{EncodingError, Result},
};

/// Text encoded for the backend, borrowing the source string's storage
#[derive(Debug, Clone, Copy)]
pub struct Encoded<'a> {
	encoding: Encoding,
	bytes: &'a [u8],
}

impl<'a> Encoded<'a> {
	pub fn encoding(&self) -> Encoding {
		self.encoding
	}

	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	pub fn as_bytes(&self) -> &'a [u8] {
		self.bytes
	}

	/// Borrowed view over the encoded bytes; null pointer when empty
	pub fn descriptor(&self) -> DStr<'a> {
		DStr::from_bytes(self.bytes)
	}

	pub fn decode(&self) -> std::result::Result<String, EncodingError> {
		self.encoding.decode(self.bytes)
	}
}

/// Marshaller for converting text into backend descriptors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marshaller {
	encoding: Encoding,
}

impl Marshaller {
	pub fn new(encoding: Encoding) -> Self {
		Self {
			encoding,
		}
	}

	pub fn encoding(&self) -> Encoding {
		self.encoding
	}

	pub fn marshal<'a>(&self, text: &'a str) -> std::result::Result<Encoded<'a>, EncodingError> {
		let bytes = self.encoding.encode(text)?;
		debug!(encoding = %self.encoding, len = bytes.len(), "marshalled text");
		Ok(Encoded {
			encoding: self.encoding,
			bytes,
		})
	}

	/// Lend a descriptor for `text` to `f`
	///
	/// The descriptor cannot escape `f`; the encoded storage stays live until `f` returns or
	/// unwinds. On an encoding failure `f` is never called.
	pub fn with_descriptor<R, F>(&self, text: &str, f: F) -> std::result::Result<R, EncodingError>
	where
		F: FnOnce(DStr<'_>) -> R,
	{
		let encoded = self.marshal(text)?;
		Ok(f(encoded.descriptor()))
	}

	/// Marshal `text` and pass it to the backend's `hello` entry point
	#[instrument(name = "marshal::call", level = "debug", skip_all, fields(encoding = %self.encoding))]
	pub fn call<B>(&self, backend: &B, text: &str) -> Result<()>
	where
		B: Backend + ?Sized,
	{
		self.with_descriptor(text, |descriptor| backend.hello(descriptor)).map_err(|err| {
			warn!("refusing to call backend: {}", err);
			err.into()
		})
	}
}

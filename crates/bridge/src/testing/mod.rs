// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Testing utilities for code that talks to the backend
//!
//! [`RecordingBackend`] stands in for the native library and copies every message it
//! receives while the descriptor is still valid.

use std::cell::RefCell;

use sideloader_abi::data::DStr;

use crate::backend::Backend;

/// A message as seen by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Received {
	pub bytes: Vec<u8>,
	/// The descriptor arrived with a null pointer
	pub null_pointer: bool,
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
	received: RefCell<Vec<Received>>,
}

impl RecordingBackend {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn calls(&self) -> usize {
		self.received.borrow().len()
	}

	pub fn messages(&self) -> Vec<Vec<u8>> {
		self.received.borrow().iter().map(|r| r.bytes.clone()).collect()
	}

	pub fn last(&self) -> Option<Received> {
		self.received.borrow().last().cloned()
	}

	pub fn clear(&self) {
		self.received.borrow_mut().clear();
	}
}

impl Backend for RecordingBackend {
	fn hello(&self, message: DStr<'_>) {
		self.received.borrow_mut().push(Received {
			bytes: message.as_bytes().to_vec(),
			null_pointer: message.raw().ptr.is_null(),
		});
	}
}

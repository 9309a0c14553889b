// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Stand-in for the prebuilt backend library
//!
//! Exports `hello` with the backend's calling convention and records the last descriptor
//! it received. The `last_*` exports let a host inspect the record after the call.

use std::{
	ffi::c_char,
	ptr::null,
	sync::{Mutex, MutexGuard, PoisonError},
};

use sideloader_abi::data::DString;

struct Last {
	calls: usize,
	len: usize,
	ptr: usize,
	bytes: Vec<u8>,
}

static LAST: Mutex<Last> = Mutex::new(Last {
	calls: 0,
	len: 0,
	ptr: 0,
	bytes: Vec::new(),
});

fn last() -> MutexGuard<'static, Last> {
	LAST.lock().unwrap_or_else(PoisonError::into_inner)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn hello(message: DString) {
	let mut last = last();
	last.calls += 1;
	last.len = message.len;
	last.ptr = message.ptr as usize;
	// SAFETY: the host keeps the bytes live for the duration of this call
	last.bytes = unsafe { message.as_bytes() }.to_vec();
}

/// Number of `hello` calls so far
#[unsafe(no_mangle)]
pub extern "C" fn hello_calls() -> usize {
	last().calls
}

/// `len` of the last descriptor
#[unsafe(no_mangle)]
pub extern "C" fn last_len() -> usize {
	last().len
}

/// `ptr` of the last descriptor; only compared, never read through
#[unsafe(no_mangle)]
pub extern "C" fn last_ptr() -> *const c_char {
	let ptr = last().ptr;
	if ptr == 0 { null() } else { ptr as *const c_char }
}

/// Copy up to `cap` bytes of the last message into `out`, returning the number copied
#[unsafe(no_mangle)]
pub unsafe extern "C" fn last_copy(out: *mut u8, cap: usize) -> usize {
	let last = last();
	let count = last.bytes.len().min(cap);
	if count > 0 && !out.is_null() {
		// SAFETY: caller provides `cap` writable bytes at `out`
		unsafe { std::ptr::copy_nonoverlapping(last.bytes.as_ptr(), out, count) };
	}
	count
}

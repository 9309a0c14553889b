// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use core::{ffi::c_char, marker::PhantomData, ptr::null, slice, str, str::Utf8Error};

/// FFI-safe string descriptor in D slice layout
///
/// The backend expects the length first and the pointer second. The descriptor
/// does not own the bytes it points at.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DString {
	/// Number of bytes
	pub len: usize,
	/// Pointer to the first byte (null when `len` is zero)
	pub ptr: *const c_char,
}

impl DString {
	/// Create an empty descriptor
	pub const fn empty() -> Self {
		Self {
			len: 0,
			ptr: null(),
		}
	}

	/// Check if the descriptor is empty
	pub fn is_empty(&self) -> bool {
		self.len == 0 || self.ptr.is_null()
	}

	/// Get the viewed bytes (unsafe - caller must ensure pointer validity)
	pub unsafe fn as_bytes(&self) -> &[u8] {
		if self.is_empty() {
			&[]
		} else {
			// SAFETY: Caller must ensure pointer validity and lifetime
			unsafe { slice::from_raw_parts(self.ptr.cast::<u8>(), self.len) }
		}
	}
}

/// A [`DString`] bound to the lifetime of the bytes it views
///
/// Has the same layout as [`DString`], so it can be handed to the backend as is.
#[repr(transparent)]
#[derive(Debug, Clone, Copy)]
pub struct DStr<'a> {
	raw: DString,
	_marker: PhantomData<&'a [u8]>,
}

impl<'a> DStr<'a> {
	/// Borrow a byte slice as a descriptor
	pub fn from_bytes(bytes: &'a [u8]) -> Self {
		let raw = if bytes.is_empty() {
			DString::empty()
		} else {
			DString {
				len: bytes.len(),
				ptr: bytes.as_ptr().cast::<c_char>(),
			}
		};

		Self {
			raw,
			_marker: PhantomData,
		}
	}

	/// Create an empty descriptor with a null pointer
	pub const fn empty() -> DStr<'static> {
		DStr {
			raw: DString::empty(),
			_marker: PhantomData,
		}
	}

	/// Number of bytes viewed
	pub fn len(&self) -> usize {
		self.raw.len
	}

	/// Check if the descriptor is empty
	pub fn is_empty(&self) -> bool {
		self.raw.is_empty()
	}

	/// The raw descriptor, valid for as long as `'a`
	pub fn raw(&self) -> DString {
		self.raw
	}

	/// Get the viewed bytes for the full borrow
	pub fn as_bytes(&self) -> &'a [u8] {
		if self.raw.is_empty() {
			return &[];
		}
		// SAFETY: raw was built from a `&'a [u8]` in `from_bytes`
		unsafe { slice::from_raw_parts(self.raw.ptr.cast::<u8>(), self.raw.len) }
	}

	/// Get the viewed bytes as UTF-8 text
	pub fn to_str(&self) -> Result<&'a str, Utf8Error> {
		str::from_utf8(self.as_bytes())
	}
}

#[cfg(test)]
mod tests {
	use core::mem::{offset_of, size_of};

	use super::*;

	#[test]
	fn test_layout_is_length_then_pointer() {
		assert_eq!(size_of::<DString>(), 2 * size_of::<usize>());
		assert_eq!(offset_of!(DString, len), 0);
		assert_eq!(offset_of!(DString, ptr), size_of::<usize>());
		assert_eq!(size_of::<DStr<'_>>(), size_of::<DString>());
	}

	#[test]
	fn test_empty_descriptor_has_null_pointer() {
		let descriptor = DStr::from_bytes(b"");
		assert_eq!(descriptor.len(), 0);
		assert!(descriptor.raw().ptr.is_null());
		assert!(descriptor.is_empty());
		assert_eq!(descriptor.as_bytes(), b"");
	}

	#[test]
	fn test_static_empty_matches_empty_slice() {
		let descriptor = DStr::empty();
		assert_eq!(descriptor.len(), 0);
		assert!(descriptor.is_empty());
		assert!(descriptor.raw().ptr.is_null());
		assert_eq!(descriptor.to_str().unwrap(), "");
		assert_eq!(descriptor.raw().len, DStr::from_bytes(&[]).raw().len);
	}

	#[test]
	fn test_descriptor_views_source_bytes() {
		let text = String::from("Hello world");
		let descriptor = DStr::from_bytes(text.as_bytes());

		assert_eq!(descriptor.len(), 11);
		assert_eq!(descriptor.raw().ptr.cast::<u8>(), text.as_ptr());
		assert_eq!(descriptor.to_str().unwrap(), "Hello world");
	}

	#[test]
	fn test_raw_as_bytes() {
		let bytes = [0xde, 0xad, 0xbe, 0xef];
		let raw = DStr::from_bytes(&bytes).raw();
		assert_eq!(unsafe { raw.as_bytes() }, &bytes);
		let empty = DString::empty();
		assert_eq!(unsafe { empty.as_bytes() }, b"");
	}

	#[test]
	fn test_to_str_rejects_invalid_utf8() {
		let bytes = [0x66, 0xff];
		assert!(DStr::from_bytes(&bytes).to_str().is_err());
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Character encodings accepted by the backend
//!
//! Both encodings are subsets of Rust's own string representation, so encoding a
//! representable `&str` never copies: the encoded bytes are the string's bytes.

use std::{
	fmt,
	fmt::{Display, Formatter},
	str,
	str::FromStr,
};

use crate::error::{ConfigError, EncodingError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
	#[default]
	Utf8,
	Ascii,
}

impl Encoding {
	/// Encode `text`, failing on the first character the encoding cannot represent
	pub fn encode(self, text: &str) -> Result<&[u8], EncodingError> {
		match self {
			Encoding::Utf8 => Ok(text.as_bytes()),
			Encoding::Ascii => match text.char_indices().find(|(_, c)| !c.is_ascii()) {
				Some((index, character)) => Err(EncodingError::Unrepresentable {
					encoding: self,
					character,
					index,
				}),
				None => Ok(text.as_bytes()),
			},
		}
	}

	pub fn decode(self, bytes: &[u8]) -> Result<String, EncodingError> {
		match self {
			Encoding::Utf8 => str::from_utf8(bytes).map(str::to_owned).map_err(|e| EncodingError::Malformed {
				encoding: self,
				index: e.valid_up_to(),
			}),
			Encoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
				Some(index) => Err(EncodingError::Malformed {
					encoding: self,
					index,
				}),
				None => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
			},
		}
	}
}

impl Display for Encoding {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Encoding::Utf8 => f.write_str("UTF-8"),
			Encoding::Ascii => f.write_str("ASCII"),
		}
	}
}

impl FromStr for Encoding {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"utf8" | "utf-8" => Ok(Encoding::Utf8),
			"ascii" => Ok(Encoding::Ascii),
			_ => Err(ConfigError::UnknownEncoding {
				value: s.to_string(),
			}),
		}
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::PathBuf;

use crate::encoding::Encoding;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
	#[error("character {character:?} at byte {index} is not representable in {encoding}")]
	Unrepresentable {
		encoding: Encoding,
		character: char,
		index: usize,
	},

	#[error("bytes are not valid {encoding} at byte {index}")]
	Malformed {
		encoding: Encoding,
		index: usize,
	},
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
	#[error("failed to load backend library {}", path.display())]
	Load {
		path: PathBuf,
		#[source]
		source: libloading::Error,
	},

	#[error("backend library does not export `{symbol}`")]
	Symbol {
		symbol: String,
		#[source]
		source: libloading::Error,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	#[error("unknown encoding '{value}', expected 'utf8' or 'ascii'")]
	UnknownEncoding {
		value: String,
	},
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Encoding(#[from] EncodingError),

	#[error(transparent)]
	Backend(#[from] BackendError),

	#[error(transparent)]
	Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

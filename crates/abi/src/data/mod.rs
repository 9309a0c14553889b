// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! FFI-safe data marshalling types for text passed to the backend

mod string;

pub use string::*;

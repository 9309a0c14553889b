// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Entry points exported by the backend library

use crate::data::DString;

/// Greeting entry point
///
/// # Parameters
/// - `message`: Text bytes (not null-terminated), only valid for the duration of the call
///
/// The backend returns nothing observable.
pub type HelloFn = unsafe extern "C" fn(message: DString);

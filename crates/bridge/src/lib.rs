// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Host side of the Sideloader backend boundary
//!
//! Text is encoded into a borrowed [`DStr`](sideloader_abi::data::DStr) descriptor and handed
//! to a [`Backend`](backend::Backend) for the duration of a single call.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod backend;
pub mod config;
pub mod encoding;
pub mod error;
pub mod marshal;
pub mod testing;

pub use backend::{Backend, native::NativeBackend};
pub use config::BridgeConfig;
pub use encoding::Encoding;
pub use error::{Error, Result};
pub use marshal::{Encoded, Marshaller};

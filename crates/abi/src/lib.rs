// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! C ABI definitions for the Sideloader backend
//!
//! This crate provides the calling convention the prebuilt backend library exposes.
//! It defines the FFI-safe string descriptor and the signatures of the backend's
//! exported entry points.

// #![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod backend;
pub mod constants;
pub mod data;

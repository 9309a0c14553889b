// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Library name stem of the backend, without platform prefix or extension
pub const BACKEND_LIBRARY_STEM: &str = "SideloaderBackend";

/// Exported symbol of the greeting entry point (null-terminated for symbol lookup)
pub const HELLO_SYMBOL: &[u8] = b"hello\0";

// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Data structure for storing compile-time configuration options.
//!
//! Options are collected in a typed `const` object rather than scattered
//! `#[cfg(feature = ...)]` blocks. Every code path stays type-checked even
//! when disabled, and the compiler folds the constants away so a disabled
//! option costs nothing in the final binary.

/// Data structure holding compile-time configuration options.
///
/// To change the configuration, enable the matching cargo feature of the
/// kernel crate from the crate that builds the final image.
pub struct Config {
    /// Whether capsules should emit a `trace` event for every register
    /// transaction, successful or not.
    ///
    /// Failed transactions are always logged; this covers the successful ones,
    /// which is useful when bringing up a new board but far too chatty for
    /// production.
    pub trace_register_access: bool,
    /// Whether capsules should log each step of device bring-up.
    pub debug_bringup: bool,
}

/// A unique instance of `Config` where compile-time configuration options are
/// defined. This is the only location where `#[cfg(x)]` is used to configure
/// code based on cargo features.
pub const CONFIG: Config = Config {
    trace_register_access: cfg!(feature = "trace_register_access"),
    debug_bringup: cfg!(feature = "debug_bringup"),
};

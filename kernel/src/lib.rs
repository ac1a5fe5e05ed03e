// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Core CPLD Kernel
//!
//! The kernel crate holds the code shared by the platform CPLD capsules: the
//! Hardware Interface Layer (HIL) definitions for the host bus, the standard
//! error type, and compile-time configuration.
//!
//! Bus transports, device discovery and the management presentation layer
//! live outside this crate and reach the capsules through the HIL traits.

#![no_std]

pub mod config;
pub mod errorcode;
pub mod hil;
pub mod utilities;

pub use crate::errorcode::ErrorCode;

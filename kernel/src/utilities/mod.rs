// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Utility re-exports provided by the kernel crate.

/// The Tock Register Interface.
///
/// This is a re-export of the `tock-registers` crate provided for
/// convenience.
///
/// CPLD registers are not memory mapped, so capsules only use the bitfield
/// declarations and [`LocalRegisterCopy`] to pick apart and rebuild the bytes
/// they move over the bus.
pub mod registers {
    pub use tock_registers::fields::{Field, FieldValue};
    pub use tock_registers::register_bitfields;
    pub use tock_registers::{LocalRegisterCopy, RegisterLongName};
}

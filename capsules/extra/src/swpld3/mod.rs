// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Driver for the SWPLD3 control CPLD on the Nokia 7220 IXR-H4-32D.
//!
//! The SWPLD3 sits on an I2C bus and exposes the control and status lines of
//! front panel QSFP ports 17-32 and the SFP port through byte-wide
//! registers: module reset, low-power mode, module select, presence and
//! interrupt, plus LED test, a scratch byte, a soft reset and the CPLD build
//! identity.
//!
//! Driver Semantics
//! ----------------
//!
//! Every named signal is one bit of one register, described by a
//! [`Signal`] in the [`signals::SIGNALS`] table. Reads fetch the whole byte
//! and test the bit. Writes are a read-modify-write performed under the
//! device lock, so updates to sibling bits from other callers are never
//! lost. Nothing is retried: a failed bus transaction is logged once and
//! returned to the caller as [`Error::Transport`].
//!
//! [`Swpld3::probe`] runs bring-up exactly once: it checks the adapter
//! supports SMBus byte data, snapshots the build identity, and forces every
//! module into reset, out of low-power mode and deselected.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! use capsules_extra::swpld3::{Module, ModuleSignal, Swpld3};
//!
//! // `bus` is the board's SMBus endpoint bound to address 0x35.
//! let swpld3 = Swpld3::probe(bus).map_err(|(error, _bus)| error)?;
//!
//! let qsfp21 = Module::new(21)?;
//! swpld3.set_module(qsfp21, ModuleSignal::Reset, false)?;
//! let present = swpld3.get_module(qsfp21, ModuleSignal::Present)?;
//! ```

use core::fmt;

use kernel::hil::i2c;
use kernel::ErrorCode;

pub mod attributes;
pub mod device;
pub mod registers;
pub mod signals;
pub mod transport;

pub use self::attributes::{Attribute, Value};
pub use self::device::{Identity, Swpld3};
pub use self::registers::Register;
pub use self::signals::{Module, ModuleSignal, Signal};
pub use self::transport::RegisterTransport;

/// Default 7-bit bus address of the SWPLD3.
pub const I2C_ADDRESS: u8 = 0x35;

/// Name the driver binds under.
pub const DRIVER_NAME: &str = "h4_32d_swpld3";

/// Device tree compatible string of the SWPLD3.
pub const COMPATIBLE: &str = "nokia,h4-32d_swpld3";

/// Direction of a failed bus transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Read,
    Write,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Read => f.write_str("READ"),
            Direction::Write => f.write_str("WRITE"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The bus transaction failed: device absent, bus busy, NAK.
    #[error("CPLD {direction} ERROR: reg({register}) {error}")]
    Transport {
        register: Register,
        direction: Direction,
        #[source]
        error: i2c::Error,
    },
    /// A value outside the domain of the target field. Rejected before any
    /// bus access.
    #[error("value out of range for the target field")]
    InvalidInput,
    /// The signal is read-only. Rejected before any bus access.
    #[error("{signal} is read-only")]
    NotWritable { signal: &'static str },
    /// The signal cannot be read back. Rejected before any bus access.
    #[error("{signal} is write-only")]
    NotReadable { signal: &'static str },
    /// The bus adapter cannot perform SMBus byte data transactions.
    #[error("adapter does not support SMBus byte data transfers")]
    CapabilityUnavailable,
    #[error("no such attribute")]
    NoSuchAttribute,
    /// The identity register could not be read at bring-up.
    #[error("identity not captured at bring-up")]
    IdentityUnavailable,
}

impl From<Error> for ErrorCode {
    fn from(err: Error) -> Self {
        match err {
            Error::Transport { error, .. } => error.into(),
            Error::InvalidInput => ErrorCode::INVAL,
            Error::NotWritable { .. } => ErrorCode::NOSUPPORT,
            Error::NotReadable { .. } => ErrorCode::NOSUPPORT,
            Error::CapabilityUnavailable => ErrorCode::NODEVICE,
            Error::NoSuchAttribute => ErrorCode::INVAL,
            Error::IdentityUnavailable => ErrorCode::FAIL,
        }
    }
}

/// Constrain an externally supplied number to a single bit.
pub fn bit_value(value: u32) -> Result<bool, Error> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(Error::InvalidInput),
    }
}

#[cfg(test)]
mod test {
    use super::{bit_value, Direction, Error, Register};
    use kernel::hil::i2c;
    use kernel::ErrorCode;
    use std::string::ToString;

    #[test]
    fn bit_value_domain() {
        assert_eq!(bit_value(0), Ok(false));
        assert_eq!(bit_value(1), Ok(true));
        assert_eq!(bit_value(2), Err(Error::InvalidInput));
        assert_eq!(bit_value(u32::MAX), Err(Error::InvalidInput));
    }

    #[test]
    fn transport_error_message() {
        let err = Error::Transport {
            register: Register::QsfpModSel1,
            direction: Direction::Write,
            error: i2c::Error::DataNak,
        };
        assert_eq!(
            err.to_string(),
            "CPLD WRITE ERROR: reg(0x32) I2C Data Not Acknowledged"
        );
        assert_eq!(ErrorCode::from(err), ErrorCode::NOACK);
    }

    #[test]
    fn error_codes_distinguish_kinds() {
        assert_eq!(ErrorCode::from(Error::InvalidInput), ErrorCode::INVAL);
        assert_eq!(
            ErrorCode::from(Error::NotWritable { signal: "qsfp17_prs" }),
            ErrorCode::NOSUPPORT
        );
        assert_eq!(
            ErrorCode::from(Error::NotReadable { signal: "strobe" }),
            ErrorCode::NOSUPPORT
        );
        assert_eq!(
            ErrorCode::from(Error::CapabilityUnavailable),
            ErrorCode::NODEVICE
        );
    }
}

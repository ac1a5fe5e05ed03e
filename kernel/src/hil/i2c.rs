// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interface for I2C/SMBus devices.
//!
//! Platform CPLDs are driven with SMBus "byte data" transactions: a command
//! byte selecting the register followed by one data byte in either direction.
//! The transport behind this trait (a host I2C adapter, a bus multiplexer
//! channel, a test fake) is provided by the board.
//!
//! Transactions are blocking. A stuck bus blocks its caller until the
//! transport itself gives up and reports an error.

use core::fmt::{Display, Formatter, Result};

use crate::ErrorCode;

/// The type of error encountered during an I2C/SMBus transaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The slave did not acknowledge the chip address. Most likely the address
    /// is incorrect or the slave is not properly connected.
    AddressNak,

    /// The data was not acknowledged by the slave.
    DataNak,

    /// Arbitration lost, meaning the state of the data line does not correspond
    /// to the data driven onto it. This can happen, for example, when a
    /// higher-priority transmission is in progress by a different master.
    ArbitrationLost,

    /// A start condition was received before received data has been read
    /// from the receive register.
    Overrun,

    /// The requested transaction is not supported by the adapter.
    NotSupported,

    /// The bus is in use by another master or transaction.
    Busy,

    /// The transport gave up waiting for the transaction to complete.
    Timeout,
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> Result {
        let display_str = match *self {
            Error::AddressNak => "I2C Address Not Acknowledged",
            Error::DataNak => "I2C Data Not Acknowledged",
            Error::ArbitrationLost => "I2C Bus Arbitration Lost",
            Error::Overrun => "I2C receive overrun",
            Error::NotSupported => "I2C/SMBus Transaction Not Supported",
            Error::Busy => "I2C Bus Busy",
            Error::Timeout => "I2C Transaction Timed Out",
        };
        write!(fmt, "{}", display_str)
    }
}

impl core::error::Error for Error {}

impl From<Error> for ErrorCode {
    fn from(val: Error) -> Self {
        match val {
            Error::AddressNak | Error::DataNak => ErrorCode::NOACK,
            Error::ArbitrationLost | Error::Busy => ErrorCode::BUSY,
            Error::Overrun => ErrorCode::SIZE,
            Error::NotSupported => ErrorCode::NOSUPPORT,
            Error::Timeout => ErrorCode::FAIL,
        }
    }
}

/// Transaction types an adapter may or may not implement.
///
/// Adapters answer [`SMBusDevice::supports`] for each kind. Drivers check for
/// the one they need before touching the device, since some adapters only
/// implement word data or raw I2C.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transfer {
    /// SMBus read/write byte data (command byte + one data byte).
    SmbusByteData,
    /// SMBus read/write word data (command byte + two data bytes).
    SmbusWordData,
    /// Plain I2C messages with repeated start.
    I2c,
}

/// An SMBus endpoint bound to a single chip address.
///
/// Methods take `&mut self`: whoever holds the endpoint has the bus to itself
/// for the length of the call.
pub trait SMBusDevice {
    /// Whether the underlying adapter can perform `transfer`.
    fn supports(&self, transfer: Transfer) -> bool;

    /// Read the byte held by `register`.
    fn read_byte_data(&mut self, register: u8) -> core::result::Result<u8, Error>;

    /// Write `value` to `register`.
    fn write_byte_data(&mut self, register: u8, value: u8) -> core::result::Result<(), Error>;
}

impl<T: SMBusDevice + ?Sized> SMBusDevice for &mut T {
    fn supports(&self, transfer: Transfer) -> bool {
        (**self).supports(transfer)
    }

    fn read_byte_data(&mut self, register: u8) -> core::result::Result<u8, Error> {
        (**self).read_byte_data(register)
    }

    fn write_byte_data(&mut self, register: u8, value: u8) -> core::result::Result<(), Error> {
        (**self).write_byte_data(register, value)
    }
}

#[cfg(test)]
mod test {
    use super::Error;
    use crate::ErrorCode;

    #[test]
    fn nak_maps_to_noack() {
        assert_eq!(ErrorCode::from(Error::AddressNak), ErrorCode::NOACK);
        assert_eq!(ErrorCode::from(Error::DataNak), ErrorCode::NOACK);
    }

    #[test]
    fn contention_maps_to_busy() {
        assert_eq!(ErrorCode::from(Error::Busy), ErrorCode::BUSY);
        assert_eq!(ErrorCode::from(Error::ArbitrationLost), ErrorCode::BUSY);
        assert_eq!(ErrorCode::from(Error::Timeout), ErrorCode::FAIL);
    }
}

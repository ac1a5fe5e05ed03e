// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Serialized byte access to the SWPLD3 register space.
//!
//! The SMBus endpoint lives inside the lock, so there is no way to reach the
//! bus without holding it. The lock is only held for a single read, a single
//! write, or one read-modify-write.

use kernel::config::CONFIG;
use kernel::hil::i2c::SMBusDevice;
use spin::Mutex;
use tracing::{error, trace};

use super::registers::Register;
use super::{Direction, Error};

pub struct RegisterTransport<B: SMBusDevice> {
    bus: Mutex<B>,
}

impl<B: SMBusDevice> RegisterTransport<B> {
    pub fn new(bus: B) -> RegisterTransport<B> {
        RegisterTransport {
            bus: Mutex::new(bus),
        }
    }

    pub fn read(&self, register: Register) -> Result<u8, Error> {
        let mut bus = self.bus.lock();
        read_locked(&mut *bus, register)
    }

    pub fn write(&self, register: Register, value: u8) -> Result<(), Error> {
        let mut bus = self.bus.lock();
        write_locked(&mut *bus, register, value)
    }

    /// Replace the contents of `register` with `f(current)` and return the
    /// new byte.
    ///
    /// The read and the write happen under one hold of the lock. If the read
    /// fails nothing is written.
    pub fn modify<F>(&self, register: Register, f: F) -> Result<u8, Error>
    where
        F: FnOnce(u8) -> u8,
    {
        let mut bus = self.bus.lock();
        let current = read_locked(&mut *bus, register)?;
        let value = f(current);
        write_locked(&mut *bus, register, value)?;
        Ok(value)
    }

    /// Give back the bus endpoint.
    pub fn into_inner(self) -> B {
        self.bus.into_inner()
    }
}

fn read_locked<B: SMBusDevice>(bus: &mut B, register: Register) -> Result<u8, Error> {
    match bus.read_byte_data(register.addr()) {
        Ok(value) => {
            if CONFIG.trace_register_access {
                trace!(register = %register, value, "CPLD read");
            }
            Ok(value)
        }
        Err(error) => {
            error!(register = %register, %error, "CPLD READ ERROR");
            Err(Error::Transport {
                register,
                direction: Direction::Read,
                error,
            })
        }
    }
}

fn write_locked<B: SMBusDevice>(bus: &mut B, register: Register, value: u8) -> Result<(), Error> {
    match bus.write_byte_data(register.addr(), value) {
        Ok(()) => {
            if CONFIG.trace_register_access {
                trace!(register = %register, value, "CPLD write");
            }
            Ok(())
        }
        Err(error) => {
            error!(register = %register, value, %error, "CPLD WRITE ERROR");
            Err(Error::Transport {
                register,
                direction: Direction::Write,
                error,
            })
        }
    }
}

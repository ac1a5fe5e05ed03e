// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! The SWPLD3 device handle: bring-up, signal access and detach.

use kernel::config::CONFIG;
use kernel::hil::i2c::{SMBusDevice, Transfer};
use kernel::utilities::registers::LocalRegisterCopy;
use tracing::{debug, error, info};

use super::registers::{Register, BASELINE, CODE_REV};
use super::signals::{self, Module, ModuleSignal, Signal};
use super::transport::RegisterTransport;
use super::{bit_value, Error};

/// CPLD build identity, captured once at bring-up.
///
/// A field is `None` when its register could not be read during bring-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    pub code_ver: Option<u8>,
    pub code_type: Option<u8>,
    pub code_day: Option<u8>,
    pub code_month: Option<u8>,
    pub code_year: Option<u8>,
}

pub struct Swpld3<B: SMBusDevice> {
    registers: RegisterTransport<B>,
    identity: Identity,
    bringup_fault: Option<Error>,
}

impl<B: SMBusDevice> Swpld3<B> {
    /// Bring up the CPLD behind `bus`.
    ///
    /// Fails only if the adapter cannot do SMBus byte data transfers, in which
    /// case the endpoint is handed back untouched. Faults while reading the
    /// identity or forcing the baseline are logged and kept in
    /// [`Swpld3::bringup_fault`], but still produce a handle.
    pub fn probe(bus: B) -> Result<Swpld3<B>, (Error, B)> {
        if !bus.supports(Transfer::SmbusByteData) {
            error!("CPLD PROBE ERROR: adapter lacks SMBus byte data support");
            return Err((Error::CapabilityUnavailable, bus));
        }

        info!("Nokia-7220-IXR-H4-32D SWPLD3 chip found");

        let mut swpld3 = Swpld3 {
            registers: RegisterTransport::new(bus),
            identity: Identity::default(),
            bringup_fault: None,
        };
        swpld3.capture_identity();
        swpld3.force_baseline();
        Ok(swpld3)
    }

    fn capture_identity(&mut self) {
        if let Some(rev) = self.bringup_read(Register::CodeRev) {
            let rev = LocalRegisterCopy::<u8, CODE_REV::Register>::new(rev);
            self.identity.code_ver = Some(rev.read(CODE_REV::VERSION));
            self.identity.code_type = Some(rev.read(CODE_REV::TYPE));
        }
        self.identity.code_day = self.bringup_read(Register::CodeDay);
        self.identity.code_month = self.bringup_read(Register::CodeMonth);
        self.identity.code_year = self.bringup_read(Register::CodeYear);

        debug!(identity = ?self.identity, "SWPLD3 identity");
    }

    fn force_baseline(&mut self) {
        for (register, value) in BASELINE {
            match self.registers.write(register, value) {
                Ok(()) => {
                    if CONFIG.debug_bringup {
                        debug!(register = %register, value, "SWPLD3 baseline");
                    }
                }
                Err(e) => self.record_fault(e),
            }
        }
    }

    fn bringup_read(&mut self, register: Register) -> Option<u8> {
        match self.registers.read(register) {
            Ok(value) => {
                if CONFIG.debug_bringup {
                    debug!(register = %register, value, "SWPLD3 identity read");
                }
                Some(value)
            }
            Err(e) => {
                self.record_fault(e);
                None
            }
        }
    }

    fn record_fault(&mut self, e: Error) {
        if self.bringup_fault.is_none() {
            self.bringup_fault = Some(e);
        }
    }

    /// Build identity captured at bring-up. Never touches the bus.
    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// The first fault hit during bring-up, if any.
    pub fn bringup_fault(&self) -> Option<Error> {
        self.bringup_fault
    }

    /// Whole-byte access to the register space.
    pub fn registers(&self) -> &RegisterTransport<B> {
        &self.registers
    }

    /// Read the current level of `signal`.
    ///
    /// A failed bus read is returned as [`Error::Transport`], never as a
    /// `false` level.
    pub fn get(&self, signal: &Signal) -> Result<bool, Error> {
        if !signal.is_readable() {
            return Err(Error::NotReadable {
                signal: signal.name(),
            });
        }
        let byte = self.registers.read(signal.register())?;
        Ok(signal.extract(byte))
    }

    /// Drive `signal` to `value`, leaving the other bits of its register as
    /// they are.
    ///
    /// Read-only signals fail with [`Error::NotWritable`] before any bus
    /// access. If reading the current byte fails, nothing is written.
    pub fn set(&self, signal: &Signal, value: bool) -> Result<(), Error> {
        if !signal.is_writable() {
            return Err(Error::NotWritable {
                signal: signal.name(),
            });
        }
        self.registers
            .modify(signal.register(), |byte| signal.merge(byte, value))
            .map(|_| ())
    }

    /// Set a signal from an externally supplied number, which must be 0 or 1.
    pub fn set_value(&self, signal: &Signal, value: u32) -> Result<(), Error> {
        if !signal.is_writable() {
            return Err(Error::NotWritable {
                signal: signal.name(),
            });
        }
        self.set(signal, bit_value(value)?)
    }

    /// [`Swpld3::get`] for one of the per-module signals.
    pub fn get_module(&self, module: Module, kind: ModuleSignal) -> Result<bool, Error> {
        self.get(signals::module_signal(module, kind))
    }

    /// [`Swpld3::set`] for one of the per-module signals. Presence and
    /// interrupt are read-only.
    pub fn set_module(&self, module: Module, kind: ModuleSignal, value: bool) -> Result<(), Error> {
        self.set(signals::module_signal(module, kind), value)
    }

    /// Read the scratch byte.
    pub fn scratch(&self) -> Result<u8, Error> {
        self.registers.read(Register::Scratch)
    }

    /// Overwrite the whole scratch byte. No read is done first.
    pub fn set_scratch(&self, value: u8) -> Result<(), Error> {
        self.registers.write(Register::Scratch, value)
    }

    /// Detach from the chip and give back the bus endpoint.
    pub fn remove(self) -> B {
        info!("SWPLD3 detached");
        self.registers.into_inner()
    }
}

// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! An in-memory SMBus endpoint with a 256-byte register file.
//!
//! Faults can be injected per register and direction. Every transaction
//! attempt is counted, including ones that fail.

use kernel::hil::i2c::{Error, SMBusDevice, Transfer};

#[derive(Debug)]
pub struct FakeSMBus {
    registers: [u8; 256],
    transfers: &'static [Transfer],
    read_faults: [Option<Error>; 256],
    write_faults: [Option<Error>; 256],
    reads: usize,
    writes: usize,
}

impl Default for FakeSMBus {
    fn default() -> Self {
        FakeSMBus::new()
    }
}

impl FakeSMBus {
    pub fn new() -> FakeSMBus {
        FakeSMBus {
            registers: [0; 256],
            transfers: &[Transfer::SmbusByteData],
            read_faults: [None; 256],
            write_faults: [None; 256],
            reads: 0,
            writes: 0,
        }
    }

    /// An adapter that only does word data and raw I2C, not SMBus byte data.
    pub fn without_byte_data() -> FakeSMBus {
        FakeSMBus {
            transfers: &[Transfer::SmbusWordData, Transfer::I2c],
            ..FakeSMBus::new()
        }
    }

    /// Preload a register without counting a transaction.
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.registers[register as usize] = value;
    }

    pub fn register(&self, register: u8) -> u8 {
        self.registers[register as usize]
    }

    pub fn fail_reads(&mut self, register: u8, error: Error) {
        self.read_faults[register as usize] = Some(error);
    }

    pub fn fail_writes(&mut self, register: u8, error: Error) {
        self.write_faults[register as usize] = Some(error);
    }

    pub fn clear_faults(&mut self) {
        self.read_faults = [None; 256];
        self.write_faults = [None; 256];
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SMBusDevice for FakeSMBus {
    fn supports(&self, transfer: Transfer) -> bool {
        self.transfers.contains(&transfer)
    }

    fn read_byte_data(&mut self, register: u8) -> Result<u8, Error> {
        self.reads += 1;
        match self.read_faults[register as usize] {
            Some(error) => Err(error),
            None => Ok(self.registers[register as usize]),
        }
    }

    fn write_byte_data(&mut self, register: u8, value: u8) -> Result<(), Error> {
        self.writes += 1;
        match self.write_faults[register as usize] {
            Some(error) => Err(error),
            None => {
                self.registers[register as usize] = value;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::FakeSMBus;
    use kernel::hil::i2c::{Error, SMBusDevice, Transfer};

    #[test]
    fn faults_are_counted_and_cleared() {
        let mut bus = FakeSMBus::new();
        bus.fail_writes(0x10, Error::DataNak);
        assert_eq!(bus.write_byte_data(0x10, 1), Err(Error::DataNak));
        assert_eq!(bus.register(0x10), 0);

        bus.clear_faults();
        assert_eq!(bus.write_byte_data(0x10, 1), Ok(()));
        assert_eq!(bus.read_byte_data(0x10), Ok(1));
        assert_eq!(bus.writes(), 2);
        assert_eq!(bus.reads(), 1);
    }

    #[test]
    fn capability_switch() {
        assert!(FakeSMBus::new().supports(Transfer::SmbusByteData));
        assert!(!FakeSMBus::new().supports(Transfer::I2c));

        let bus = FakeSMBus::without_byte_data();
        assert!(!bus.supports(Transfer::SmbusByteData));
        assert!(bus.supports(Transfer::SmbusWordData));
        assert!(bus.supports(Transfer::I2c));
    }
}

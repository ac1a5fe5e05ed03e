// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Named control and status signals of the SWPLD3.
//!
//! Each signal is one bit of one register. The per-module signals place the
//! lowest module of each group of eight in bit 7, so the bit of module `n` is
//! `7 - (n - first)`, where `first` is 17 for the `*0` registers and 25 for
//! the `*1` registers.

use kernel::utilities::registers::{Field, LocalRegisterCopy};

use super::registers::{Register, HITLESS, LED_TEST, RST, SFP0, SFP1};
use super::Error;

/// Lowest QSFP port number handled by this CPLD.
pub const FIRST_MODULE: u8 = 17;
/// Highest QSFP port number handled by this CPLD.
pub const LAST_MODULE: u8 = 32;
/// Modules sharing one register.
pub const MODULES_PER_REGISTER: u8 = 8;

const MODULES: usize = (LAST_MODULE - FIRST_MODULE + 1) as usize;

/// Describes where a named signal lives and whether it may be read or
/// written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signal {
    name: &'static str,
    register: Register,
    bit: u8,
    readable: bool,
    writable: bool,
}

impl Signal {
    const fn read_only(name: &'static str, register: Register, bit: u8) -> Signal {
        Signal {
            name,
            register,
            bit,
            readable: true,
            writable: false,
        }
    }

    const fn read_write(name: &'static str, register: Register, bit: u8) -> Signal {
        Signal {
            name,
            register,
            bit,
            readable: true,
            writable: true,
        }
    }

    /// A strobe-style line with nothing to read back. No SWPLD3 register has
    /// one.
    #[cfg(test)]
    pub(crate) const fn write_only(name: &'static str, register: Register, bit: u8) -> Signal {
        Signal {
            name,
            register,
            bit,
            readable: false,
            writable: true,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn register(&self) -> Register {
        self.register
    }

    /// Bit index of the signal within its register, 0-7.
    pub const fn bit(&self) -> u8 {
        self.bit
    }

    pub const fn is_readable(&self) -> bool {
        self.readable
    }

    pub const fn is_writable(&self) -> bool {
        self.writable
    }

    fn field(&self) -> Field<u8, ()> {
        Field::<u8, ()>::new(1, self.bit as usize)
    }

    /// Whether the signal is set in `byte`.
    pub fn extract(&self, byte: u8) -> bool {
        LocalRegisterCopy::<u8>::new(byte).is_set(self.field())
    }

    /// `byte` with the signal's bit replaced by `value` and every other bit
    /// left as it was.
    pub fn merge(&self, byte: u8, value: bool) -> u8 {
        let mut reg = LocalRegisterCopy::<u8>::new(byte);
        reg.modify(self.field().val(u8::from(value)));
        reg.get()
    }
}

/// A QSFP port number known to be handled by this CPLD.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Module(u8);

impl Module {
    pub fn new(number: u8) -> Result<Module, Error> {
        if number < FIRST_MODULE || number > LAST_MODULE {
            return Err(Error::InvalidInput);
        }
        Ok(Module(number))
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Bit index of this module within its register.
    pub const fn bit(self) -> u8 {
        module_bit(self.0)
    }

    /// Whether the module lives in the `*1` register of each pair.
    pub const fn in_high_register(self) -> bool {
        self.0 >= FIRST_MODULE + MODULES_PER_REGISTER
    }

    pub fn all() -> impl Iterator<Item = Module> {
        (FIRST_MODULE..=LAST_MODULE).map(Module)
    }

    const fn offset(self) -> usize {
        (self.0 - FIRST_MODULE) as usize
    }
}

/// The per-module signal kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleSignal {
    Reset,
    LowPowerMode,
    Select,
    Present,
    Interrupt,
}

impl ModuleSignal {
    pub const ALL: [ModuleSignal; 5] = [
        ModuleSignal::Reset,
        ModuleSignal::LowPowerMode,
        ModuleSignal::Select,
        ModuleSignal::Present,
        ModuleSignal::Interrupt,
    ];

    /// The (QSFP17-24, QSFP25-32) register pair carrying this signal.
    pub const fn registers(self) -> (Register, Register) {
        match self {
            ModuleSignal::Reset => (Register::QsfpReset0, Register::QsfpReset1),
            ModuleSignal::LowPowerMode => (Register::QsfpLpMode0, Register::QsfpLpMode1),
            ModuleSignal::Select => (Register::QsfpModSel0, Register::QsfpModSel1),
            ModuleSignal::Present => (Register::QsfpPresent0, Register::QsfpPresent1),
            ModuleSignal::Interrupt => (Register::QsfpInterrupt0, Register::QsfpInterrupt1),
        }
    }

    pub fn register_for(self, module: Module) -> Register {
        let (low, high) = self.registers();
        if module.in_high_register() {
            high
        } else {
            low
        }
    }

    /// Suffix of the signal name, as in `qsfp21_rst`.
    pub const fn suffix(self) -> &'static str {
        match self {
            ModuleSignal::Reset => "rst",
            ModuleSignal::LowPowerMode => "lpmod",
            ModuleSignal::Select => "modsel",
            ModuleSignal::Present => "prs",
            ModuleSignal::Interrupt => "int",
        }
    }

    pub const fn is_writable(self) -> bool {
        matches!(
            self,
            ModuleSignal::Reset | ModuleSignal::LowPowerMode | ModuleSignal::Select
        )
    }

    // Position of this kind's QSFP17 entry in `SIGNALS`.
    const fn table_base(self) -> usize {
        match self {
            ModuleSignal::Reset => RESET_BASE,
            ModuleSignal::LowPowerMode => LOW_POWER_BASE,
            ModuleSignal::Select => SELECT_BASE,
            ModuleSignal::Present => PRESENT_BASE,
            ModuleSignal::Interrupt => INTERRUPT_BASE,
        }
    }
}

const fn module_bit(number: u8) -> u8 {
    let first = if number < FIRST_MODULE + MODULES_PER_REGISTER {
        FIRST_MODULE
    } else {
        FIRST_MODULE + MODULES_PER_REGISTER
    };
    7 - (number - first)
}

const fn module_register(number: u8, low: Register, high: Register) -> Register {
    if number < FIRST_MODULE + MODULES_PER_REGISTER {
        low
    } else {
        high
    }
}

/// Number of LED test signals at the head of `SIGNALS`.
pub const LED_TEST_SIGNALS: usize = 4;

const RESET_BASE: usize = LED_TEST_SIGNALS + 1;
const LOW_POWER_BASE: usize = RESET_BASE + MODULES;
const SELECT_BASE: usize = LOW_POWER_BASE + MODULES;
// hitless_en sits between the writable and the read-only module groups.
const PRESENT_BASE: usize = SELECT_BASE + MODULES + 1;
const INTERRUPT_BASE: usize = PRESENT_BASE + MODULES;
const SFP_BASE: usize = INTERRUPT_BASE + MODULES;

pub const SIGNAL_COUNT: usize = SFP_BASE + 4;

macro_rules! signal_table {
    ($($n:literal),+ $(,)?) => {
        [
            Signal::read_write("led_test_amb", Register::LedTest, LED_TEST::AMBER.shift as u8),
            Signal::read_write("led_test_grn", Register::LedTest, LED_TEST::GREEN.shift as u8),
            Signal::read_write("led_test_blink", Register::LedTest, LED_TEST::BLINK.shift as u8),
            Signal::read_write("led_test_src_sel", Register::LedTest, LED_TEST::SRC_SEL.shift as u8),
            Signal::read_write("rst_pld_soft", Register::Reset, RST::PLD_SOFT.shift as u8),
            $(Signal::read_write(
                concat!("qsfp", $n, "_rst"),
                module_register($n, Register::QsfpReset0, Register::QsfpReset1),
                module_bit($n),
            ),)+
            $(Signal::read_write(
                concat!("qsfp", $n, "_lpmod"),
                module_register($n, Register::QsfpLpMode0, Register::QsfpLpMode1),
                module_bit($n),
            ),)+
            $(Signal::read_write(
                concat!("qsfp", $n, "_modsel"),
                module_register($n, Register::QsfpModSel0, Register::QsfpModSel1),
                module_bit($n),
            ),)+
            Signal::read_only("hitless_en", Register::Hitless, HITLESS::EN.shift as u8),
            $(Signal::read_only(
                concat!("qsfp", $n, "_prs"),
                module_register($n, Register::QsfpPresent0, Register::QsfpPresent1),
                module_bit($n),
            ),)+
            $(Signal::read_only(
                concat!("qsfp", $n, "_int"),
                module_register($n, Register::QsfpInterrupt0, Register::QsfpInterrupt1),
                module_bit($n),
            ),)+
            Signal::read_only("sfp_tx_fault", Register::Sfp0, SFP0::TX_FAULT.shift as u8),
            Signal::read_only("sfp_rx_los", Register::Sfp0, SFP0::RX_LOS.shift as u8),
            Signal::read_only("sfp_prs", Register::Sfp0, SFP0::PRS.shift as u8),
            Signal::read_write("sfp_tx_en", Register::Sfp1, SFP1::TX_EN.shift as u8),
        ]
    };
}

/// Every single-bit signal of the SWPLD3.
pub static SIGNALS: [Signal; SIGNAL_COUNT] =
    signal_table!(17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32);

/// Look a signal up by name.
pub fn find(name: &str) -> Option<&'static Signal> {
    SIGNALS.iter().find(|signal| signal.name == name)
}

/// The table entry for `kind` of `module`.
pub fn module_signal(module: Module, kind: ModuleSignal) -> &'static Signal {
    &SIGNALS[kind.table_base() + module.offset()]
}

// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! SWPLD3 register address map and bit-field layout.

use core::fmt;

use kernel::utilities::registers::register_bitfields;

/// Byte-wide registers of the SWPLD3, by SMBus command code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Register {
    CodeRev = 0x01,
    LedTest = 0x08,
    Scratch = 0x0F,
    Reset = 0x10,
    QsfpReset0 = 0x11,
    QsfpReset1 = 0x12,
    QsfpLpMode0 = 0x21,
    QsfpLpMode1 = 0x22,
    QsfpModSel0 = 0x31,
    QsfpModSel1 = 0x32,
    Hitless = 0x39,
    QsfpPresent0 = 0x51,
    QsfpPresent1 = 0x52,
    QsfpInterrupt0 = 0x61,
    QsfpInterrupt1 = 0x62,
    Sfp0 = 0x71,
    Sfp1 = 0x72,
    CodeDay = 0xF0,
    CodeMonth = 0xF1,
    CodeYear = 0xF2,
    TestCodeRev = 0xF3,
}

impl Register {
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:02x}", self.addr())
    }
}

register_bitfields![u8,
    pub CODE_REV [
        /// CPLD code version
        VERSION OFFSET(0) NUMBITS(6) [],
        /// CPLD code type. Bit 6 is unused.
        TYPE OFFSET(7) NUMBITS(1) []
    ],
    pub LED_TEST [
        AMBER OFFSET(0) NUMBITS(1) [],
        GREEN OFFSET(1) NUMBITS(1) [],
        BLINK OFFSET(3) NUMBITS(1) [],
        /// Drive the front panel LEDs from this register instead of the ASIC
        SRC_SEL OFFSET(7) NUMBITS(1) []
    ],
    pub RST [
        PLD_SOFT OFFSET(0) NUMBITS(1) []
    ],
    pub HITLESS [
        EN OFFSET(0) NUMBITS(1) []
    ],
    pub SFP0 [
        TX_FAULT OFFSET(4) NUMBITS(1) [],
        RX_LOS OFFSET(5) NUMBITS(1) [],
        PRS OFFSET(6) NUMBITS(1) []
    ],
    pub SFP1 [
        TX_EN OFFSET(7) NUMBITS(1) []
    ],
    // The per-module registers come in pairs: QSFP17-24 in the `*0` register
    // and QSFP25-32 in the `*1` register, with the lowest module number in
    // the most significant bit.
    pub QSFP_LO [
        QSFP17 OFFSET(7) NUMBITS(1) [],
        QSFP18 OFFSET(6) NUMBITS(1) [],
        QSFP19 OFFSET(5) NUMBITS(1) [],
        QSFP20 OFFSET(4) NUMBITS(1) [],
        QSFP21 OFFSET(3) NUMBITS(1) [],
        QSFP22 OFFSET(2) NUMBITS(1) [],
        QSFP23 OFFSET(1) NUMBITS(1) [],
        QSFP24 OFFSET(0) NUMBITS(1) []
    ],
    pub QSFP_HI [
        QSFP25 OFFSET(7) NUMBITS(1) [],
        QSFP26 OFFSET(6) NUMBITS(1) [],
        QSFP27 OFFSET(5) NUMBITS(1) [],
        QSFP28 OFFSET(4) NUMBITS(1) [],
        QSFP29 OFFSET(3) NUMBITS(1) [],
        QSFP30 OFFSET(2) NUMBITS(1) [],
        QSFP31 OFFSET(1) NUMBITS(1) [],
        QSFP32 OFFSET(0) NUMBITS(1) []
    ]
];

/// Register values forced at bring-up: every module held in reset, out of
/// low-power mode, and deselected.
pub const BASELINE: [(Register, u8); 6] = [
    (Register::QsfpReset0, 0xFF),
    (Register::QsfpReset1, 0xFF),
    (Register::QsfpLpMode0, 0x00),
    (Register::QsfpLpMode1, 0x00),
    (Register::QsfpModSel0, 0x00),
    (Register::QsfpModSel1, 0x00),
];

// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Named attribute view of the SWPLD3, for management layers that address
//! the device by attribute name and exchange values as text.
//!
//! Show formats: `code_ver` is `0x%02x`, `code_type` is `%x`, every signal is
//! `0` or `1`, `scratch` is `%02x` and the build date fields are decimal.
//! Stores take decimal for signals and hex for `scratch`, with one trailing
//! newline allowed.

use core::fmt;

use kernel::hil::i2c::SMBusDevice;

use super::device::Swpld3;
use super::signals::{Signal, LED_TEST_SIGNALS, SIGNALS};
use super::{bit_value, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribute {
    CodeVersion,
    CodeType,
    Scratch,
    CodeDay,
    CodeMonth,
    CodeYear,
    Signal(&'static Signal),
}

impl Attribute {
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::CodeVersion => "code_ver",
            Attribute::CodeType => "code_type",
            Attribute::Scratch => "scratch",
            Attribute::CodeDay => "code_day",
            Attribute::CodeMonth => "code_month",
            Attribute::CodeYear => "code_year",
            Attribute::Signal(signal) => signal.name(),
        }
    }

    pub fn is_writable(&self) -> bool {
        match self {
            Attribute::Scratch => true,
            Attribute::Signal(signal) => signal.is_writable(),
            _ => false,
        }
    }

    /// Bit index of a signal attribute. `None` for whole-byte attributes.
    pub fn index(&self) -> Option<u8> {
        match self {
            Attribute::Signal(signal) => Some(signal.bit()),
            _ => None,
        }
    }

    pub fn lookup(name: &str) -> Option<Attribute> {
        attributes().find(|attr| attr.name() == name)
    }
}

/// Every attribute, in presentation order.
pub fn attributes() -> impl Iterator<Item = Attribute> {
    let (leds, rest) = SIGNALS.split_at(LED_TEST_SIGNALS);
    [Attribute::CodeVersion, Attribute::CodeType]
        .into_iter()
        .chain(leds.iter().map(Attribute::Signal))
        .chain(core::iter::once(Attribute::Scratch))
        .chain(rest.iter().map(Attribute::Signal))
        .chain([
            Attribute::CodeDay,
            Attribute::CodeMonth,
            Attribute::CodeYear,
        ])
}

/// A shown attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value {
    Version(u8),
    Type(u8),
    Bit(bool),
    Hex(u8),
    Decimal(u8),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Version(v) => write!(f, "0x{:02x}", v),
            Value::Type(v) => write!(f, "{:x}", v),
            Value::Bit(v) => write!(f, "{}", u8::from(v)),
            Value::Hex(v) => write!(f, "{:02x}", v),
            Value::Decimal(v) => write!(f, "{}", v),
        }
    }
}

/// Parse a `u8` the way sysfs stores do: an optional `+`, one trailing
/// newline, and an optional `0x` prefix in base 16.
fn parse_u8(text: &str, radix: u32) -> Result<u8, Error> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_prefix('+').unwrap_or(text);
    let digits = if radix == 16 {
        text.strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text)
    } else {
        text
    };
    // from_str_radix would take a second sign.
    if digits.starts_with('+') {
        return Err(Error::InvalidInput);
    }
    u8::from_str_radix(digits, radix).map_err(|_| Error::InvalidInput)
}

impl<B: SMBusDevice> Swpld3<B> {
    /// Current value of `attr`. Identity attributes come from the bring-up
    /// snapshot and fail with [`Error::IdentityUnavailable`] if that read
    /// failed; everything else is read from the chip.
    pub fn show(&self, attr: Attribute) -> Result<Value, Error> {
        let identity = self.identity();
        match attr {
            Attribute::CodeVersion => identity
                .code_ver
                .map(Value::Version)
                .ok_or(Error::IdentityUnavailable),
            Attribute::CodeType => identity
                .code_type
                .map(Value::Type)
                .ok_or(Error::IdentityUnavailable),
            Attribute::CodeDay => identity
                .code_day
                .map(Value::Decimal)
                .ok_or(Error::IdentityUnavailable),
            Attribute::CodeMonth => identity
                .code_month
                .map(Value::Decimal)
                .ok_or(Error::IdentityUnavailable),
            Attribute::CodeYear => identity
                .code_year
                .map(Value::Decimal)
                .ok_or(Error::IdentityUnavailable),
            Attribute::Scratch => self.scratch().map(Value::Hex),
            Attribute::Signal(signal) => self.get(signal).map(Value::Bit),
        }
    }

    /// Parse `text` and write it to `attr`. Nothing reaches the bus unless
    /// the attribute is writable and the text parses to a value in range.
    pub fn store(&self, attr: Attribute, text: &str) -> Result<(), Error> {
        match attr {
            Attribute::Scratch => self.set_scratch(parse_u8(text, 16)?),
            Attribute::Signal(signal) => {
                if !signal.is_writable() {
                    return Err(Error::NotWritable {
                        signal: signal.name(),
                    });
                }
                let value = bit_value(u32::from(parse_u8(text, 10)?))?;
                self.set(signal, value)
            }
            _ => Err(Error::NotWritable {
                signal: attr.name(),
            }),
        }
    }

    /// [`Swpld3::show`] by attribute name.
    pub fn show_by_name(&self, name: &str) -> Result<Value, Error> {
        self.show(Attribute::lookup(name).ok_or(Error::NoSuchAttribute)?)
    }

    /// [`Swpld3::store`] by attribute name.
    pub fn store_by_name(&self, name: &str, text: &str) -> Result<(), Error> {
        self.store(Attribute::lookup(name).ok_or(Error::NoSuchAttribute)?, text)
    }
}

#[cfg(test)]
mod test {
    use super::{attributes, parse_u8, Attribute, Value};
    use crate::swpld3::registers::Register;
    use crate::swpld3::{Error, Swpld3};
    use crate::test::smbus::FakeSMBus;
    use kernel::hil::i2c;
    use std::collections::HashSet;
    use std::string::ToString;
    use std::vec::Vec;

    #[test]
    fn catalog_order() {
        let names: Vec<&str> = attributes().map(|attr| attr.name()).collect();
        assert_eq!(names.len(), 96);
        assert_eq!(
            names[..8],
            [
                "code_ver",
                "code_type",
                "led_test_amb",
                "led_test_grn",
                "led_test_blink",
                "led_test_src_sel",
                "scratch",
                "rst_pld_soft",
            ]
        );
        assert_eq!(names[8], "qsfp17_rst");
        assert_eq!(names[56], "hitless_en");
        assert_eq!(names[57], "qsfp17_prs");
        assert_eq!(
            names[89..],
            [
                "sfp_tx_fault",
                "sfp_rx_los",
                "sfp_prs",
                "sfp_tx_en",
                "code_day",
                "code_month",
                "code_year",
            ]
        );

        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn lookup_and_index() {
        let attr = Attribute::lookup("qsfp21_rst").unwrap();
        assert_eq!(attr.index(), Some(3));
        assert!(attr.is_writable());

        let attr = Attribute::lookup("qsfp30_prs").unwrap();
        assert_eq!(attr.index(), Some(2));
        assert!(!attr.is_writable());

        assert_eq!(Attribute::lookup("scratch"), Some(Attribute::Scratch));
        assert_eq!(Attribute::Scratch.index(), None);
        assert!(!Attribute::CodeVersion.is_writable());
        assert_eq!(Attribute::lookup("qsfp33_rst"), None);
    }

    #[test]
    fn show_formats() {
        let mut bus = FakeSMBus::new();
        bus.set_register(Register::CodeRev.addr(), 0b11_000101);
        bus.set_register(Register::CodeDay.addr(), 7);
        bus.set_register(Register::CodeMonth.addr(), 11);
        bus.set_register(Register::CodeYear.addr(), 23);
        bus.set_register(Register::Scratch.addr(), 0x0B);
        bus.set_register(Register::Sfp0.addr(), 0b0100_0000);
        let swpld3 = Swpld3::probe(bus).unwrap();

        let shown = |name| swpld3.show_by_name(name).unwrap().to_string();
        assert_eq!(shown("code_ver"), "0x05");
        assert_eq!(shown("code_type"), "1");
        assert_eq!(shown("code_day"), "7");
        assert_eq!(shown("code_month"), "11");
        assert_eq!(shown("code_year"), "23");
        assert_eq!(shown("scratch"), "0b");
        assert_eq!(shown("sfp_prs"), "1");
        assert_eq!(shown("sfp_rx_los"), "0");
        assert_eq!(shown("qsfp25_rst"), "1");
    }

    #[test]
    fn store_parses_like_sysfs() {
        let swpld3 = Swpld3::probe(FakeSMBus::new()).unwrap();

        swpld3.store_by_name("scratch", "a5\n").unwrap();
        assert_eq!(swpld3.scratch(), Ok(0xA5));
        swpld3.store_by_name("scratch", "0x3c").unwrap();
        assert_eq!(swpld3.scratch(), Ok(0x3C));

        swpld3.store_by_name("qsfp18_lpmod", "1\n").unwrap();
        assert_eq!(swpld3.show_by_name("qsfp18_lpmod"), Ok(Value::Bit(true)));
        swpld3.store_by_name("qsfp18_lpmod", "0").unwrap();
        assert_eq!(swpld3.show_by_name("qsfp18_lpmod"), Ok(Value::Bit(false)));
    }

    #[test]
    fn bad_stores_never_touch_bus() {
        let mut bus = FakeSMBus::new();
        let swpld3 = Swpld3::probe(&mut bus).unwrap();

        for text in ["2", "10", "255", "256", "-1", "", "one", "1\n\n", "0x1"] {
            assert_eq!(
                swpld3.store_by_name("sfp_tx_en", text),
                Err(Error::InvalidInput),
                "{:?}",
                text
            );
        }
        assert_eq!(swpld3.store_by_name("scratch", "100"), Err(Error::InvalidInput));
        assert_eq!(
            swpld3.store_by_name("qsfp17_int", "1"),
            Err(Error::NotWritable {
                signal: "qsfp17_int"
            })
        );
        assert_eq!(
            swpld3.store_by_name("code_year", "24"),
            Err(Error::NotWritable {
                signal: "code_year"
            })
        );
        assert_eq!(
            swpld3.store_by_name("qsfp40_rst", "1"),
            Err(Error::NoSuchAttribute)
        );
        drop(swpld3);

        assert_eq!(bus.writes(), 6);
        assert_eq!(bus.reads(), 4);
    }

    #[test]
    fn missing_identity_is_reported() {
        let mut bus = FakeSMBus::new();
        bus.fail_reads(Register::CodeMonth.addr(), i2c::Error::AddressNak);
        let swpld3 = Swpld3::probe(bus).unwrap();

        assert_eq!(
            swpld3.show(Attribute::CodeMonth),
            Err(Error::IdentityUnavailable)
        );
        assert_eq!(swpld3.show(Attribute::CodeDay), Ok(Value::Decimal(0)));
    }

    #[test]
    fn parse_radix() {
        assert_eq!(parse_u8("+1", 10), Ok(1));
        assert_eq!(parse_u8("ff", 16), Ok(0xFF));
        assert_eq!(parse_u8("0XfF\n", 16), Ok(0xFF));
        assert_eq!(parse_u8("++1", 10), Err(Error::InvalidInput));
        assert_eq!(parse_u8("0x", 16), Err(Error::InvalidInput));
    }
}

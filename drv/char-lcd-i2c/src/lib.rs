// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A driver for HD44780-compatible character LCDs hanging off a PCF8574 I2C
//! "backpack".
//!
//! The backpack is an 8-bit I/O expander wired to the display as follows:
//!
//! | expander bit | display line |
//! |---|---|
//! | P0 | RS |
//! | P1 | R/W |
//! | P2 | EN |
//! | P3 | backlight transistor |
//! | P4-P7 | D4-D7 |
//!
//! so the display only ever runs in 4-bit mode and we never read back from
//! it (R/W stays low). Every byte sent to the controller is therefore two
//! nibbles, and every nibble is latched by pulsing EN: one expander write
//! with EN high, one with EN low.
//!
//! The protocol logic is generic over [`LcdBus`]; board-specific buses live
//! in submodules behind features.

#![cfg_attr(not(test), no_std)]

use bitflags::bitflags;
use drv_char_lcd_api::{CharLcd, Glyph, LcdError, COLUMNS, GLYPH_SLOTS, ROWS};

#[cfg(feature = "f411")]
pub mod stm32f4_i2c;

/// 7-bit address of a PCF8574 with all address jumpers open.
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// The raw transport under the display: byte writes to one I2C address and a
/// way to wait out the controller's execution times.
pub trait LcdBus {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), LcdError>;
    fn delay_us(&mut self, us: u32);
}

bitflags! {
    /// Control lines driven through the expander's low nibble.
    pub struct Backpack: u8 {
        const RS = 0b0000_0001;
        const RW = 0b0000_0010;
        const EN = 0b0000_0100;
        const BACKLIGHT = 0b0000_1000;
    }
}

bitflags! {
    /// HD44780 instruction set, 4-bit subset.
    pub struct Command: u8 {
        const CLEAR = 0x01;
        const HOME = 0x02;
        const ENTRY_MODE = 0x04;
        const DISPLAY_CONTROL = 0x08;
        const FUNCTION_SET = 0x20;
        const SET_CGRAM_ADDR = 0x40;
        const SET_DDRAM_ADDR = 0x80;
    }
}

bitflags! {
    /// Option bits OR'd into [`Command`]s; meaning depends on the command.
    pub struct Flags: u8 {
        // ENTRY_MODE
        const ENTRY_INCREMENT = 0x02;
        // DISPLAY_CONTROL
        const DISPLAY_ON = 0x04;
        const CURSOR_ON = 0x02;
        const BLINK_ON = 0x01;
        // FUNCTION_SET
        const TWO_LINES = 0x08;
    }
}

// DDRAM address of the first cell of each row.
const ROW_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

// Execution times from the HD44780 datasheet, rounded up.
const POWER_ON_US: u32 = 50_000;
const WAKE_US: u32 = 4_500;
const WAKE_SHORT_US: u32 = 150;
const CLEAR_US: u32 = 2_000;
const COMMAND_US: u32 = 50;
const PULSE_US: u32 = 1;

pub struct Hd44780<B> {
    bus: B,
    address: u8,
    backlight: Backpack,
}

impl<B: LcdBus> Hd44780<B> {
    /// Runs the 4-bit initialization-by-instruction sequence, leaving the
    /// display on, blank, cursor hidden and backlight lit.
    pub fn init(bus: B, address: u8) -> Result<Self, LcdError> {
        let mut this = Self {
            bus,
            address,
            backlight: Backpack::BACKLIGHT,
        };

        this.bus.delay_us(POWER_ON_US);
        this.expander_write(Backpack::empty(), 0)?;

        // The controller may be in 8-bit mode or halfway through a 4-bit
        // transfer; three "8-bit" function sets resync it either way.
        this.write_nibble(0x03 << 4, Backpack::empty())?;
        this.bus.delay_us(WAKE_US);
        this.write_nibble(0x03 << 4, Backpack::empty())?;
        this.bus.delay_us(WAKE_US);
        this.write_nibble(0x03 << 4, Backpack::empty())?;
        this.bus.delay_us(WAKE_SHORT_US);
        this.write_nibble(0x02 << 4, Backpack::empty())?;

        this.command(Command::FUNCTION_SET, Flags::TWO_LINES)?;
        this.command(Command::DISPLAY_CONTROL, Flags::DISPLAY_ON)?;
        this.clear()?;
        this.command(Command::ENTRY_MODE, Flags::ENTRY_INCREMENT)?;

        log::debug!("lcd ready at {:#04x}", address);
        Ok(this)
    }

    fn command(&mut self, cmd: Command, flags: Flags) -> Result<(), LcdError> {
        self.send(cmd.bits() | flags.bits(), Backpack::empty())?;
        self.bus.delay_us(COMMAND_US);
        Ok(())
    }

    fn send(&mut self, value: u8, mode: Backpack) -> Result<(), LcdError> {
        self.write_nibble(value & 0xf0, mode)?;
        self.write_nibble(value << 4, mode)
    }

    // `nibble` is already in the high four bits, where D4-D7 are wired.
    fn write_nibble(&mut self, nibble: u8, mode: Backpack) -> Result<(), LcdError> {
        self.expander_write(mode | Backpack::EN, nibble)?;
        self.bus.delay_us(PULSE_US);
        self.expander_write(mode, nibble)?;
        self.bus.delay_us(COMMAND_US);
        Ok(())
    }

    fn expander_write(&mut self, lines: Backpack, data: u8) -> Result<(), LcdError> {
        let byte = (data & 0xf0) | (lines | self.backlight).bits();
        self.bus.write(self.address, &[byte])
    }
}

impl<B: LcdBus> CharLcd for Hd44780<B> {
    fn clear(&mut self) -> Result<(), LcdError> {
        self.send(Command::CLEAR.bits(), Backpack::empty())?;
        self.bus.delay_us(CLEAR_US);
        Ok(())
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), LcdError> {
        if column >= COLUMNS || row >= ROWS {
            return Err(LcdError::BadPosition);
        }
        let addr = ROW_OFFSETS[usize::from(row)] + column;
        self.send(Command::SET_DDRAM_ADDR.bits() | addr, Backpack::empty())
    }

    fn print(&mut self, text: &[u8]) -> Result<(), LcdError> {
        for &b in text {
            self.send(b, Backpack::RS)?;
        }
        Ok(())
    }

    fn create_glyph(
        &mut self,
        slot: u8,
        glyph: &Glyph,
    ) -> Result<(), LcdError> {
        if slot >= GLYPH_SLOTS {
            return Err(LcdError::BadPosition);
        }
        self.send(
            Command::SET_CGRAM_ADDR.bits() | (slot << 3),
            Backpack::empty(),
        )?;
        for &row in glyph {
            self.send(row & 0x1f, Backpack::RS)?;
        }
        // Leave the address counter back in DDRAM so text goes to the screen.
        self.send(Command::SET_DDRAM_ADDR.bits(), Backpack::empty())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), LcdError> {
        self.backlight.set(Backpack::BACKLIGHT, on);
        self.expander_write(Backpack::empty(), 0)
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client API for character LCD drivers.
//!
//! Positions are zero based: column 0 is the leftmost cell, row 0 the top
//! line. Text is raw display ROM codes, which coincide with ASCII for the
//! printable range.

#![no_std]

/// Width of the 16x2 modules we drive.
pub const COLUMNS: u8 = 16;
/// Height of the 16x2 modules we drive.
pub const ROWS: u8 = 2;

/// Number of user-definable glyphs in CGRAM.
pub const GLYPH_SLOTS: u8 = 8;

/// A 5x8 custom character; one byte per row, low five bits used.
pub type Glyph = [u8; 8];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LcdError {
    /// The display (or its I/O expander) did not acknowledge its address.
    Nack,

    /// The bus did not reach the expected state in time.
    Timeout,

    /// Cursor position or glyph slot out of range.
    BadPosition,
}

pub trait CharLcd {
    /// Blanks the display and homes the cursor.
    fn clear(&mut self) -> Result<(), LcdError>;

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), LcdError>;

    /// Writes `text` starting at the cursor, which advances one cell per
    /// byte.
    fn print(&mut self, text: &[u8]) -> Result<(), LcdError>;

    /// Uploads `glyph` into CGRAM slot `slot`.
    fn create_glyph(&mut self, slot: u8, glyph: &Glyph)
        -> Result<(), LcdError>;

    /// Writes the custom glyph in `slot` at the cursor.
    fn write_glyph(&mut self, slot: u8) -> Result<(), LcdError> {
        if slot >= GLYPH_SLOTS {
            return Err(LcdError::BadPosition);
        }
        self.print(&[slot])
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), LcdError>;
}

impl<L: CharLcd + ?Sized> CharLcd for &mut L {
    fn clear(&mut self) -> Result<(), LcdError> {
        (**self).clear()
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), LcdError> {
        (**self).set_cursor(column, row)
    }

    fn print(&mut self, text: &[u8]) -> Result<(), LcdError> {
        (**self).print(text)
    }

    fn create_glyph(
        &mut self,
        slot: u8,
        glyph: &Glyph,
    ) -> Result<(), LcdError> {
        (**self).create_glyph(slot, glyph)
    }

    fn write_glyph(&mut self, slot: u8) -> Result<(), LcdError> {
        (**self).write_glyph(slot)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), LcdError> {
        (**self).set_backlight(on)
    }
}

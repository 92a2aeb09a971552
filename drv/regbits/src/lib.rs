// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-modify-write of raw bit masks on `svd2rust` registers.
//!
//! The generated field accessors cover most of what the drivers do, but pin
//! and clock-enable setup is easier to read as "these bits on, those bits
//! off". Both macros go through the register's `modify`, so bits outside
//! the mask are preserved.

#![cfg_attr(not(test), no_std)]

/// Sets every bit of `$mask` in `$reg`.
#[macro_export]
macro_rules! set_bits {
    ($reg:expr, $mask:expr) => {
        $reg.modify(|r, w| unsafe { w.bits(r.bits() | $mask) })
    };
}

/// Clears every bit of `$mask` in `$reg`.
#[macro_export]
macro_rules! clear_bits {
    ($reg:expr, $mask:expr) => {
        $reg.modify(|r, w| unsafe { w.bits(r.bits() & !$mask) })
    };
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    // Just enough of the svd2rust register shape for the macros.
    struct R(u32);

    impl R {
        fn bits(&self) -> u32 {
            self.0
        }
    }

    struct W(u32);

    impl W {
        unsafe fn bits(&mut self, bits: u32) -> &mut Self {
            self.0 = bits;
            self
        }
    }

    struct Reg(Cell<u32>);

    impl Reg {
        fn modify<F>(&self, f: F)
        where
            F: for<'w> FnOnce(&R, &'w mut W) -> &'w mut W,
        {
            let r = R(self.0.get());
            let mut w = W(r.0);
            f(&r, &mut w);
            self.0.set(w.0);
        }
    }

    #[test]
    fn set_leaves_other_bits_alone() {
        let reg = Reg(Cell::new(0b1000_0001));
        set_bits!(reg, 0b0110 << 1);
        assert_eq!(reg.0.get(), 0b1000_1101);
    }

    #[test]
    fn clear_leaves_other_bits_alone() {
        let reg = Reg(Cell::new(0xffff_ffff));
        clear_bits!(reg, 0b11 << 12);
        assert_eq!(reg.0.get(), 0xffff_cfff);
    }

    #[test]
    fn clear_then_set_replaces_a_field() {
        // Pin 6 alternate function: a 4-bit field at bit 24.
        let reg = Reg(Cell::new(0x0f00_00a5));
        clear_bits!(reg, 0b1111 << 24);
        set_bits!(reg, 2 << 24);
        assert_eq!(reg.0.get(), 0x0200_00a5);
    }
}

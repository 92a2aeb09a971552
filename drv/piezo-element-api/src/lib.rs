// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client API for the Piezo Element driver.
//!
//! A piezo element is either silent or sounding a single square wave. The
//! driver does not time notes itself; callers turn the tone on and back off
//! at their own deadlines.

#![no_std]

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PiezoError {
    /// The PWM timer cannot divide down to the requested frequency.
    FrequencyTooLow,
}

pub trait Piezo {
    /// Turn the piezo on at a given frequency, replacing any tone already
    /// sounding.
    fn piezo_on(&mut self, freq_hz: u16) -> Result<(), PiezoError>;

    /// Turn the piezo off. Idempotent.
    fn piezo_off(&mut self);
}

impl<P: Piezo + ?Sized> Piezo for &mut P {
    fn piezo_on(&mut self, freq_hz: u16) -> Result<(), PiezoError> {
        (**self).piezo_on(freq_hz)
    }

    fn piezo_off(&mut self) {
        (**self).piezo_off()
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A driver for a GPIO-controlled piezo element. Assumes a connection to GPIO
//! pin PC6, and we use general purpose timer Tim3 in PWM mode to control the
//! frequency.
//!
//! The driver owns Tim3 and PC6 outright; nothing else on the board may touch
//! them once [`PiezoTimer::setup`] has run.

#![no_std]

use drv_piezo_element_api::{Piezo, PiezoError};
use regbits::{clear_bits, set_bits};

cfg_if::cfg_if! {
    if #[cfg(feature = "f407")] {
        use stm32f4::stm32f407 as device;
    } else {
        use stm32f4::stm32f411 as device;
    }
}

// RCC enable bits for the peripherals we drive directly.
const RCC_AHB1ENR_GPIOCEN: u32 = 1 << 2;
const RCC_APB1ENR_TIM3EN: u32 = 1 << 1;

const OUTPUT_PIN: u32 = 6;
const OUTPUT_PIN_AF: u32 = 2; // Tim3 channel 1

// We set our timer to 1MHz, so the auto-reload value is (1MHz / freq - 1). If
// freq is < 16, this division won't fit in a u16.
const TIMER_FREQ: u32 = 1_000_000;
const MIN_FREQ_HZ: u16 = 16;

#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct PiezoTimer(&'static device::tim3::RegisterBlock);

impl PiezoTimer {
    /// Powers Tim3 and GPIOC, routes PC6 to Tim3 channel 1 and leaves the
    /// element silent.
    pub fn setup() -> Self {
        // From thin air, pluck pointers to the register blocks.
        //
        // Safety: these are static MMIO blocks accessed through & references;
        // we are the only code on the board that touches these bits.
        let rcc = unsafe { &*device::RCC::ptr() };
        let gpioc = unsafe { &*device::GPIOC::ptr() };
        let tim3 = unsafe { &*device::TIM3::ptr() };

        set_bits!(rcc.ahb1enr, RCC_AHB1ENR_GPIOCEN);
        set_bits!(rcc.apb1enr, RCC_APB1ENR_TIM3EN);

        // Drive low while we reconfigure, then hand the pin to the timer:
        // alternate function mode, push-pull, high speed, no pull.
        let shift2 = OUTPUT_PIN * 2;
        let shift4 = OUTPUT_PIN * 4;
        gpioc
            .bsrr
            .write(|w| unsafe { w.bits(1 << (OUTPUT_PIN + 16)) });
        clear_bits!(gpioc.otyper, 1 << OUTPUT_PIN);
        clear_bits!(gpioc.pupdr, 0b11 << shift2);
        set_bits!(gpioc.ospeedr, 0b11 << shift2);
        clear_bits!(gpioc.afrl, 0b1111 << shift4);
        set_bits!(gpioc.afrl, OUTPUT_PIN_AF << shift4);
        clear_bits!(gpioc.moder, 0b11 << shift2);
        set_bits!(gpioc.moder, 0b10 << shift2);

        tim3.ccmr1_output().write(|w| {
            w.oc1m().bits(0b111) // PWM mode 2
        });
        tim3.ccer.write(|w| w.cc1p().set_bit().cc1e().set_bit()); // activate timer channel 1

        // Default clock rate is 16MHz, and we don't currently bump that up on
        // boot.  Set our prescaler to divide by 16 (down to 1MHz) so we can
        // accept frequencies down to ceil(1MHz / u16::MAX) = 16Hz. The
        // prescaler has an implicit +1.
        tim3.psc.write(|w| w.psc().bits(15));

        // Start out disabled.
        let this = Self(tim3);
        this.disable();

        // Setup complete - enable tim3
        this.0.cr1.write(|w| w.cen().set_bit());

        log::debug!("piezo ready on PC6 (tim3 ch1)");
        this
    }

    fn disable(self) {
        // Set duty cycle to 0%.
        self.0.ccr1.write(|w| w.ccr().bits(0));
        self.0.arr.write(|w| w.arr().bits(1));
    }

    fn set_frequency(self, freq: u16) -> Result<(), PiezoError> {
        if freq < MIN_FREQ_HZ {
            return Err(PiezoError::FrequencyTooLow);
        }

        let arr = ((TIMER_FREQ / u32::from(freq)) - 1) as u16;
        self.0.arr.write(|w| w.arr().bits(arr));
        self.0.ccr1.write(|w| w.ccr().bits(arr / 2)); // 50% duty cycle

        Ok(())
    }
}

impl Piezo for PiezoTimer {
    fn piezo_on(&mut self, freq_hz: u16) -> Result<(), PiezoError> {
        self.set_frequency(freq_hz)
    }

    fn piezo_off(&mut self) {
        self.disable();
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polled, write-only I2C1 controller for the STM32F411, standard mode
//! (100kHz), on PB8 (SCL) / PB9 (SDA).
//!
//! This is deliberately minimal: the backpack only ever receives single-byte
//! writes, so there is no DMA, no interrupts and no read path.

use super::LcdBus;
use drv_char_lcd_api::LcdError;
use regbits::{clear_bits, set_bits};
use stm32f4::stm32f411 as device;

const RCC_AHB1ENR_GPIOBEN: u32 = 1 << 1;
const RCC_APB1ENR_I2C1EN: u32 = 1 << 21;
const RCC_APB1RSTR_I2C1RST: u32 = 1 << 21;

const SCL_PIN: u32 = 8;
const SDA_PIN: u32 = 9;
const PIN_AF: u32 = 4;

// CR1
const PE: u32 = 1 << 0;
const START: u32 = 1 << 8;
const STOP: u32 = 1 << 9;
// SR1
const SB: u32 = 1 << 0;
const ADDR: u32 = 1 << 1;
const BTF: u32 = 1 << 2;
const TXE: u32 = 1 << 7;
const AF: u32 = 1 << 10;

// APB1 runs at the 16MHz HSI out of reset; we don't change clocks.
const PCLK1_MHZ: u32 = 16;
// Standard mode: t_high = t_low = CCR * t_pclk = 5us.
const CCR_100KHZ: u32 = PCLK1_MHZ * 1_000 / (2 * 100);
// Max rise time 1000ns -> PCLK1_MHZ + 1.
const TRISE: u32 = PCLK1_MHZ + 1;

// Status polls before we give up on the bus; comfortably longer than a
// byte time at 100kHz.
const SPIN_LIMIT: u32 = 10_000;

pub struct I2c1 {
    reg: &'static device::i2c1::RegisterBlock,
}

impl I2c1 {
    pub fn setup() -> Self {
        // Safety: static MMIO blocks, accessed through & references; I2C1
        // and PB8/PB9 belong to this driver alone.
        let rcc = unsafe { &*device::RCC::ptr() };
        let gpiob = unsafe { &*device::GPIOB::ptr() };
        let reg = unsafe { &*device::I2C1::ptr() };

        set_bits!(rcc.ahb1enr, RCC_AHB1ENR_GPIOBEN);
        set_bits!(rcc.apb1enr, RCC_APB1ENR_I2C1EN);
        set_bits!(rcc.apb1rstr, RCC_APB1RSTR_I2C1RST);
        clear_bits!(rcc.apb1rstr, RCC_APB1RSTR_I2C1RST);

        // Both lines: alternate function 4, open drain, pull-up, fast.
        for &pin in &[SCL_PIN, SDA_PIN] {
            let shift2 = pin * 2;
            let shift4 = (pin - 8) * 4;
            set_bits!(gpiob.otyper, 1 << pin);
            clear_bits!(gpiob.pupdr, 0b11 << shift2);
            set_bits!(gpiob.pupdr, 0b01 << shift2);
            set_bits!(gpiob.ospeedr, 0b10 << shift2);
            clear_bits!(gpiob.afrh, 0b1111 << shift4);
            set_bits!(gpiob.afrh, PIN_AF << shift4);
            clear_bits!(gpiob.moder, 0b11 << shift2);
            set_bits!(gpiob.moder, 0b10 << shift2);
        }

        reg.cr1.write(|w| unsafe { w.bits(0) });
        reg.cr2.write(|w| unsafe { w.bits(PCLK1_MHZ) });
        reg.ccr.write(|w| unsafe { w.bits(CCR_100KHZ) });
        reg.trise.write(|w| unsafe { w.bits(TRISE) });
        reg.cr1.write(|w| unsafe { w.bits(PE) });

        Self { reg }
    }

    fn wait_sr1(&self, mask: u32) -> Result<(), LcdError> {
        for _ in 0..SPIN_LIMIT {
            let sr1 = self.reg.sr1.read().bits();
            if sr1 & AF != 0 {
                clear_bits!(self.reg.sr1, AF);
                return Err(LcdError::Nack);
            }
            if sr1 & mask != 0 {
                return Ok(());
            }
        }
        Err(LcdError::Timeout)
    }

    fn transfer(&self, address: u8, bytes: &[u8]) -> Result<(), LcdError> {
        set_bits!(self.reg.cr1, START);
        self.wait_sr1(SB)?;

        self.reg
            .dr
            .write(|w| unsafe { w.bits(u32::from(address) << 1) });
        self.wait_sr1(ADDR)?;
        // ADDR is cleared by reading SR1 (done above) followed by SR2.
        let _ = self.reg.sr2.read().bits();

        for &b in bytes {
            self.wait_sr1(TXE)?;
            self.reg.dr.write(|w| unsafe { w.bits(u32::from(b)) });
        }
        self.wait_sr1(BTF)
    }
}

impl LcdBus for I2c1 {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), LcdError> {
        let result = self.transfer(address, bytes);
        // Release the bus whether or not the transfer made it.
        set_bits!(self.reg.cr1, STOP);
        if let Err(e) = result {
            log::warn!("i2c write to {:#04x} failed: {:?}", address, e);
        }
        result
    }

    fn delay_us(&mut self, us: u32) {
        cortex_m::asm::delay(us.saturating_mul(PCLK1_MHZ));
    }
}

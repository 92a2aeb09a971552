// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Jukebox firmware for an STM32F411 board.
//!
//! Wiring:
//!
//! - PA0..PA3: back, pause, next and menu buttons to ground (internal
//!   pull-ups)
//! - PA4: tempo potentiometer wiper (ADC1 channel 4)
//! - PC6: piezo element (Tim3 channel 1)
//! - PB8/PB9: I2C1 to the LCD's PCF8574 backpack

#![no_std]
#![no_main]

use core::sync::atomic::{AtomicU32, Ordering};

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::{entry, exception};
use drv_char_lcd_i2c::stm32f4_i2c::I2c1;
use drv_char_lcd_i2c::{Hd44780, DEFAULT_ADDRESS};
use drv_piezo_element::PiezoTimer;
use panic_itm as _;
use regbits::{clear_bits, set_bits};
use stm32f4::stm32f411 as device;
use task_jukebox::button::BUTTON_COUNT;
use task_jukebox::{
    Button, Catalog, Jukebox, Level, PlayerState, RawInputs, Timing,
};

struct BoardConfig {
    /// GPIOA pin of each button, indexed by `Button::index`.
    button_pins: [u32; BUTTON_COUNT],
    tempo_pin: u32,
    tempo_channel: u32,
    lcd_address: u8,
    /// SysTick reload for a 1ms tick.
    ticks_per_ms: u32,
}

const BOARD: BoardConfig = BoardConfig {
    button_pins: [0, 1, 2, 3],
    tempo_pin: 4,
    tempo_channel: 4,
    lcd_address: DEFAULT_ADDRESS,
    // HSI, untouched out of reset
    ticks_per_ms: 16_000,
};

static_assertions::const_assert_eq!(Button::Back.index(), 0);
static_assertions::const_assert_eq!(Button::Menu.index(), BUTTON_COUNT - 1);

const RCC_AHB1ENR_GPIOAEN: u32 = 1 << 0;
const RCC_APB2ENR_ADC1EN: u32 = 1 << 8;

// ADC1 CR2
const ADON: u32 = 1 << 0;
const SWSTART: u32 = 1 << 30;
// ADC1 SR
const EOC: u32 = 1 << 1;
// 84 cycle sample time; the wiper is a high impedance source.
const SAMPLE_TIME: u32 = 0b100;

/// Milliseconds since boot, bumped by SysTick.
static TICKS: AtomicU32 = AtomicU32::new(0);

#[exception]
fn SysTick() {
    TICKS.fetch_add(1, Ordering::Relaxed);
}

/// Widens the 32-bit tick count so it never wraps in practice.
struct Clock {
    last: u32,
    now: u64,
}

impl Clock {
    fn new() -> Self {
        Self {
            last: TICKS.load(Ordering::Relaxed),
            now: 0,
        }
    }

    fn now(&mut self) -> u64 {
        let ticks = TICKS.load(Ordering::Relaxed);
        self.now += u64::from(ticks.wrapping_sub(self.last));
        self.last = ticks;
        self.now
    }
}

/// Writes log records to ITM stimulus port 0.
struct ItmLogger;

impl log::Log for ItmLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        cortex_m::interrupt::free(|_| {
            // Safety: interrupts are off, so nobody else is mid-write on the
            // stimulus port. panic-itm does the same.
            let itm = unsafe {
                &mut *(cortex_m::peripheral::ITM::PTR
                    as *mut cortex_m::peripheral::itm::RegisterBlock)
            };
            cortex_m::iprintln!(
                &mut itm.stim[0],
                "{} {}",
                record.level(),
                record.args()
            );
        });
    }

    fn flush(&self) {}
}

static LOGGER: ItmLogger = ItmLogger;

/// Buttons and the tempo pot, all on GPIOA.
struct Inputs {
    gpioa: &'static device::gpioa::RegisterBlock,
    adc: &'static device::adc1::RegisterBlock,
}

impl Inputs {
    fn setup() -> Self {
        // Safety: static MMIO blocks; GPIOA and ADC1 are ours alone.
        let rcc = unsafe { &*device::RCC::ptr() };
        let gpioa = unsafe { &*device::GPIOA::ptr() };
        let adc = unsafe { &*device::ADC1::ptr() };

        set_bits!(rcc.ahb1enr, RCC_AHB1ENR_GPIOAEN);
        set_bits!(rcc.apb2enr, RCC_APB2ENR_ADC1EN);

        for &pin in &BOARD.button_pins {
            let shift2 = pin * 2;
            clear_bits!(gpioa.moder, 0b11 << shift2);
            clear_bits!(gpioa.pupdr, 0b11 << shift2);
            set_bits!(gpioa.pupdr, 0b01 << shift2);
        }
        let shift2 = BOARD.tempo_pin * 2;
        clear_bits!(gpioa.pupdr, 0b11 << shift2);
        set_bits!(gpioa.moder, 0b11 << shift2); // analog

        // 12-bit resolution (the reset default), one conversion in the
        // regular sequence.
        let shift3 = BOARD.tempo_channel * 3;
        clear_bits!(adc.smpr2, 0b111 << shift3);
        set_bits!(adc.smpr2, SAMPLE_TIME << shift3);
        adc.sqr1.write(|w| unsafe { w.bits(0) });
        adc.sqr3.write(|w| unsafe { w.bits(BOARD.tempo_channel) });
        set_bits!(adc.cr2, ADON);

        Self { gpioa, adc }
    }

    fn buttons(&self) -> [Level; BUTTON_COUNT] {
        let idr = self.gpioa.idr.read().bits();
        let mut levels = [Level::High; BUTTON_COUNT];
        for (level, &pin) in levels.iter_mut().zip(&BOARD.button_pins) {
            if idr & (1 << pin) == 0 {
                *level = Level::Low;
            }
        }
        levels
    }

    /// Tempo pot position, scaled to ten bits.
    fn tempo(&self) -> u16 {
        set_bits!(self.adc.cr2, SWSTART);
        while self.adc.sr.read().bits() & EOC == 0 {}
        // Reading DR clears EOC.
        let sample = self.adc.dr.read().bits() & 0xfff;
        (sample >> 2) as u16
    }

    fn read(&self) -> RawInputs {
        RawInputs {
            buttons: self.buttons(),
            tempo: self.tempo(),
        }
    }
}

#[entry]
fn main() -> ! {
    let mut cp = match cortex_m::Peripherals::take() {
        Some(cp) => cp,
        None => panic!("core peripherals already taken"),
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }

    cp.SYST.set_clock_source(SystClkSource::Core);
    cp.SYST.set_reload(BOARD.ticks_per_ms - 1);
    cp.SYST.clear_current();
    cp.SYST.enable_counter();
    cp.SYST.enable_interrupt();

    let inputs = Inputs::setup();
    let piezo = PiezoTimer::setup();
    let lcd = match Hd44780::init(I2c1::setup(), BOARD.lcd_address) {
        Ok(lcd) => lcd,
        Err(e) => panic!("no lcd at {:#x}: {:?}", BOARD.lcd_address, e),
    };

    let state = PlayerState::new(Catalog::BUILT_IN, Timing::DEFAULT);
    let mut jukebox = Jukebox::new(piezo, lcd, state);
    log::info!("jukebox up, {} songs", Catalog::BUILT_IN.len());

    let mut clock = Clock::new();
    loop {
        let now = clock.now();
        jukebox.poll(now, &inputs.read());
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A buzzer jukebox: a catalog of melodies played on a piezo element, a 16x2
//! character LCD showing what's playing, four buttons (back, pause, next,
//! menu) and a potentiometer for tempo.
//!
//! Everything here is hardware independent. [`PlayerState::step`] is the
//! whole player: given the time and a snapshot of the raw inputs it advances
//! debouncing, selection, tempo and note timing, and says what to do with the
//! piezo and the screen. [`Jukebox`] pairs it with a [`Piezo`] and a
//! [`CharLcd`] and applies those decisions; the board binary just calls
//! [`Jukebox::poll`] in a loop.
//!
//! There is no preemption and no sleeping anywhere. Every wait (a note being
//! held, the pause screen, the menu) is the top-level loop calling `poll`
//! again until a deadline passes or a button edge ends the wait.
//!
//! [`Piezo`]: drv_piezo_element_api::Piezo
//! [`CharLcd`]: drv_char_lcd_api::CharLcd

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod config;
pub mod display;
pub mod jukebox;
pub mod player;
pub mod songs;
pub mod tempo;

pub use self::button::{Button, Edge, Level};
pub use self::config::Timing;
pub use self::jukebox::{Jukebox, Mode, PlayerState, RawInputs, Step};
pub use self::player::ToneCommand;
pub use self::songs::{Catalog, Song, SongNumber};
pub use self::tempo::{Tempo, TempoRange};

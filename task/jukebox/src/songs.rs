// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Song tables and the catalog they're selected from.
//!
//! Songs are `const` data built at compile time. Durations use the usual
//! "divider" convention of hobbyist melody tables: `4` is a quarter note,
//! `8` an eighth, and a negative divider is the dotted version (`-4` is a
//! dotted quarter, 1.5 times as long).

use crate::tempo::TempoRange;
use static_assertions::const_assert;

mod doom;
mod mario;
mod pacman;
mod rick;
mod takeonme;
mod tetris;

pub struct Song {
    pub name: &'static str,
    pub notes: &'static [Note],
    pub tempo: TempoRange,
}

/// A note's length as a fraction of a whole note. Never zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Divider(i16);

impl Divider {
    pub const fn new(divider: i16) -> Self {
        assert!(divider != 0, "a note can't be 1/0 of a whole note");
        Self(divider)
    }

    pub fn get(self) -> i16 {
        self.0
    }

    pub fn is_dotted(self) -> bool {
        self.0 < 0
    }

    /// How long the note lasts when a whole note takes `wholenote_ms`.
    pub fn note_ms(self, wholenote_ms: u64) -> u64 {
        let plain = wholenote_ms / u64::from(self.0.unsigned_abs());
        if self.is_dotted() {
            plain * 3 / 2
        } else {
            plain
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Note {
    /// Frequency in Hz; `None` is a rest.
    pub freq: Option<u16>,
    pub divider: Divider,
}

impl Note {
    /// `octave` is scientific pitch notation: C4 is middle C, A4 is 440Hz.
    pub const fn new(name: NoteName, octave: u8, divider: i16) -> Self {
        Self {
            freq: Some(note_to_freq(name, octave)),
            divider: Divider::new(divider),
        }
    }

    pub const fn rest(divider: i16) -> Self {
        Self {
            freq: None,
            divider: Divider::new(divider),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
#[allow(dead_code)]
pub enum NoteName {
    C,
    Db,
    D,
    Eb,
    E,
    F,
    Gb,
    G,
    Ab,
    A,
    Bb,
    B,
}

// `PIANO_NOTES_HZ`: one entry per keyboard key, A0 first, generated by
// build.rs. Only `note_to_freq` reads it, and only in const context.
include!(concat!(env!("OUT_DIR"), "/piano.rs"));

const fn note_to_freq(name: NoteName, octave: u8) -> u16 {
    // The keyboard starts at A0, nine semitones above C0.
    let index = name as usize + 12 * octave as usize - 9;
    PIANO_NOTES_HZ[index]
}

/// Position of a song in a [`Catalog`], counting from 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SongNumber(u8);

impl SongNumber {
    pub fn get(self) -> u8 {
        self.0
    }
}

/// An ordered, cyclic list of songs.
#[derive(Copy, Clone)]
pub struct Catalog {
    songs: &'static [&'static Song],
}

impl Catalog {
    pub const BUILT_IN: Self = Self::new(SONGS);

    pub const fn new(songs: &'static [&'static Song]) -> Self {
        assert!(!songs.is_empty(), "catalog must not be empty");
        assert!(songs.len() <= u8::MAX as usize, "too many songs");
        Self { songs }
    }

    pub fn len(&self) -> u8 {
        self.songs.len() as u8
    }

    pub fn first(&self) -> SongNumber {
        SongNumber(1)
    }

    pub fn last(&self) -> SongNumber {
        SongNumber(self.len())
    }

    /// The song after `n`, wrapping from the last back to the first.
    pub fn next(&self, n: SongNumber) -> SongNumber {
        if n.0 >= self.len() {
            self.first()
        } else {
            SongNumber(n.0 + 1)
        }
    }

    /// The song before `n`, wrapping from the first around to the last.
    pub fn prev(&self, n: SongNumber) -> SongNumber {
        if n.0 <= 1 || n.0 > self.len() {
            self.last()
        } else {
            SongNumber(n.0 - 1)
        }
    }

    pub fn song(&self, n: SongNumber) -> &'static Song {
        // Numbers only come from this catalog and are always in range; the
        // modulo keeps a number from some other catalog from indexing past
        // the end.
        let i = usize::from(n.0.saturating_sub(1)) % self.songs.len();
        self.songs[i]
    }
}

const SONGS: &[&Song] = &[
    &doom::DOOM,
    &pacman::PACMAN,
    &tetris::TETRIS,
    &mario::MARIO,
    &rick::RICK,
    &takeonme::TAKE_ON_ME,
];

// The menu shows the song number as a single digit.
const_assert!(SONGS.len() <= 9);

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The intro jingle.

use super::NoteName::*;
use super::{Note, Song};
use crate::tempo::TempoRange;

pub(super) const PACMAN: Song = Song {
    name: "ARCADE PACMAN MUSIC",
    notes: &[
        // bar 1
        Note::new(B, 4, 16),
        Note::new(B, 5, 16),
        Note::new(Gb, 5, 16),
        Note::new(Eb, 5, 16),
        // bar 2
        Note::new(B, 5, 32),
        Note::new(Gb, 5, -16),
        Note::new(Eb, 5, 8),
        Note::new(C, 5, 16),
        // bar 3
        Note::new(C, 6, 16),
        Note::new(G, 6, 16),
        Note::new(E, 6, 16),
        Note::new(C, 6, 32),
        Note::new(G, 6, -16),
        Note::new(E, 6, 8),
        // bar 4
        Note::new(B, 4, 16),
        Note::new(B, 5, 16),
        Note::new(Gb, 5, 16),
        Note::new(Eb, 5, 16),
        Note::new(B, 5, 32),
        // bar 5
        Note::new(Gb, 5, -16),
        Note::new(Eb, 5, 8),
        Note::new(Eb, 5, 32),
        Note::new(E, 5, 32),
        Note::new(F, 5, 32),
        // bar 6
        Note::new(F, 5, 32),
        Note::new(Gb, 5, 32),
        Note::new(G, 5, 32),
        Note::new(G, 5, 32),
        Note::new(Ab, 5, 32),
        Note::new(A, 5, 16),
        Note::new(B, 5, 8),
    ],
    tempo: TempoRange::new(50, 105),
};

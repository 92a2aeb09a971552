// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opening riff of "At Doom's Gate".

use super::NoteName::*;
use super::{Note, Song};
use crate::tempo::TempoRange;

pub(super) const DOOM: Song = Song {
    name: "DOOM BY JADE ARCADE",
    notes: &[
        // bar 1
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(E, 3, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(D, 3, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        // bar 2
        Note::new(C, 3, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(Bb, 2, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(B, 2, 8),
        Note::new(C, 3, 8),
        // bar 3
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(E, 3, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(D, 3, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        // bar 4
        Note::new(C, 3, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(Bb, 2, -2),
        // bar 5
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(E, 3, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(D, 3, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        // bar 6
        Note::new(C, 3, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(Bb, 2, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(B, 2, 8),
        Note::new(C, 3, 8),
        // bar 7
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(E, 3, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(D, 3, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        // bar 8
        Note::new(C, 3, 8),
        Note::new(E, 2, 8),
        Note::new(E, 2, 8),
        Note::new(Bb, 2, -2),
        // bar 9
        Note::new(A, 2, 8),
        Note::new(A, 2, 8),
        Note::new(A, 3, 8),
        Note::new(A, 2, 8),
        Note::new(A, 2, 8),
        Note::new(G, 3, 8),
        Note::new(A, 2, 8),
        Note::new(A, 2, 8),
        // bar 10
        Note::new(F, 3, 8),
        Note::new(A, 2, 8),
        Note::new(A, 2, 8),
        Note::new(Eb, 3, 8),
        Note::new(A, 2, 8),
        Note::new(A, 2, 8),
        Note::new(E, 3, 8),
        Note::new(F, 3, 8),
        // bar 11
        Note::new(A, 2, 8),
        Note::new(A, 2, 8),
        Note::new(A, 3, 8),
        Note::new(A, 2, 8),
        Note::new(A, 2, 8),
        Note::new(G, 3, 8),
        Note::new(A, 2, 8),
        Note::new(A, 2, 8),
        // bar 12
        Note::new(F, 3, 8),
        Note::new(A, 2, 8),
        Note::new(A, 2, 8),
        Note::new(Eb, 3, -2),
    ],
    tempo: TempoRange::new(150, 350),
};

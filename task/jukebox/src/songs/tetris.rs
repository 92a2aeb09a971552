// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Korobeiniki, as heard in Type A.

use super::NoteName::*;
use super::{Note, Song};
use crate::tempo::TempoRange;

pub(super) const TETRIS: Song = Song {
    name: "TETRIS NES MUSIC",
    notes: &[
        // bar 1
        Note::new(E, 5, 4),
        Note::new(B, 4, 8),
        Note::new(C, 5, 8),
        Note::new(D, 5, 4),
        Note::new(C, 5, 8),
        Note::new(B, 4, 8),
        // bar 2
        Note::new(A, 4, 4),
        Note::new(A, 4, 8),
        Note::new(C, 5, 8),
        Note::new(E, 5, 4),
        Note::new(D, 5, 8),
        Note::new(C, 5, 8),
        // bar 3
        Note::new(B, 4, -4),
        Note::new(C, 5, 8),
        Note::new(D, 5, 4),
        Note::new(E, 5, 4),
        // bar 4
        Note::new(C, 5, 4),
        Note::new(A, 4, 4),
        Note::new(A, 4, 8),
        Note::new(A, 4, 4),
        Note::new(B, 4, 8),
        Note::new(C, 5, 8),
        // bar 5
        Note::new(D, 5, -4),
        Note::new(F, 5, 8),
        Note::new(A, 5, 4),
        Note::new(G, 5, 8),
        Note::new(F, 5, 8),
        // bar 6
        Note::new(E, 5, -4),
        Note::new(C, 5, 8),
        Note::new(E, 5, 4),
        Note::new(D, 5, 8),
        Note::new(C, 5, 8),
        // bar 7
        Note::new(B, 4, 4),
        Note::new(B, 4, 8),
        Note::new(C, 5, 8),
        Note::new(D, 5, 4),
        Note::new(E, 5, 4),
        // bar 8
        Note::new(C, 5, 4),
        Note::new(A, 4, 4),
        Note::new(A, 4, 4),
        Note::rest(4),
        // bar 9
        Note::new(E, 5, 2),
        Note::new(C, 5, 2),
        // bar 10
        Note::new(D, 5, 2),
        Note::new(B, 4, 2),
        // bar 11
        Note::new(C, 5, 2),
        Note::new(A, 4, 2),
        // bar 12
        Note::new(Ab, 4, 2),
        Note::new(B, 4, 4),
        Note::rest(8),
        // bar 13
        Note::new(E, 5, 2),
        Note::new(C, 5, 2),
        // bar 14
        Note::new(D, 5, 2),
        Note::new(B, 4, 2),
        // bar 15
        Note::new(C, 5, 4),
        Note::new(E, 5, 4),
        Note::new(A, 5, 2),
        // bar 16
        Note::new(Ab, 5, 2),
    ],
    tempo: TempoRange::new(100, 200),
};

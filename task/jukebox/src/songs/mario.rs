// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Overworld theme, first phrase.

use super::NoteName::*;
use super::{Note, Song};
use crate::tempo::TempoRange;

pub(super) const MARIO: Song = Song {
    name: "SUPER MARIO BROS THEME",
    notes: &[
        // bar 1
        Note::new(E, 5, 8),
        Note::new(E, 5, 8),
        Note::rest(8),
        Note::new(E, 5, 8),
        Note::rest(8),
        Note::new(C, 5, 8),
        Note::new(E, 5, 8),
        // bar 2
        Note::new(G, 5, 4),
        Note::rest(4),
        Note::new(G, 4, 8),
        Note::rest(4),
        // bar 3
        Note::new(C, 5, -4),
        Note::new(G, 4, 8),
        Note::rest(4),
        Note::new(E, 4, -4),
        // bar 4
        Note::new(A, 4, 4),
        Note::new(B, 4, 4),
        Note::new(Bb, 4, 8),
        Note::new(A, 4, 4),
        // bar 5
        Note::new(G, 4, -8),
        Note::new(E, 5, -8),
        Note::new(G, 5, -8),
        Note::new(A, 5, 4),
        Note::new(F, 5, 8),
        Note::new(G, 5, 8),
        // bar 6
        Note::rest(8),
        Note::new(E, 5, 4),
        Note::new(C, 5, 8),
        Note::new(D, 5, 8),
        Note::new(B, 4, -4),
        // bar 7
        Note::new(C, 5, -4),
        Note::new(G, 4, 8),
        Note::rest(4),
        Note::new(E, 4, -4),
        // bar 8
        Note::new(A, 4, 4),
        Note::new(B, 4, 4),
        Note::new(Bb, 4, 8),
        Note::new(A, 4, 4),
        // bar 9
        Note::new(G, 4, -8),
        Note::new(E, 5, -8),
        Note::new(G, 5, -8),
        Note::new(A, 5, 4),
        Note::new(F, 5, 8),
        Note::new(G, 5, 8),
        // bar 10
        Note::rest(8),
        Note::new(E, 5, 4),
        Note::new(C, 5, 8),
        Note::new(D, 5, 8),
        Note::new(B, 4, -4),
    ],
    tempo: TempoRange::new(120, 220),
};

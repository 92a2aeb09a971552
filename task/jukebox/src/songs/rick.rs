// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Intro riff and the first verse line.

use super::NoteName::*;
use super::{Note, Song};
use crate::tempo::TempoRange;

pub(super) const RICK: Song = Song {
    name: "NEVER GONNA GIVE YOU UP",
    notes: &[
        // bar 1
        Note::new(D, 5, -4),
        Note::new(E, 5, -4),
        Note::new(A, 4, 4),
        // bar 2
        Note::new(E, 5, -4),
        Note::new(Gb, 5, -4),
        Note::new(A, 5, 16),
        Note::new(G, 5, 16),
        Note::new(Gb, 5, 8),
        // bar 3
        Note::new(D, 5, -4),
        Note::new(E, 5, -4),
        Note::new(A, 4, 2),
        // bar 4
        Note::new(A, 4, 16),
        Note::new(A, 4, 16),
        Note::new(B, 4, 16),
        Note::new(D, 5, 8),
        Note::new(D, 5, 16),
        // bar 5
        Note::new(D, 5, -4),
        Note::new(E, 5, -4),
        Note::new(A, 4, 4),
        // bar 6
        Note::new(E, 5, -4),
        Note::new(Gb, 5, -4),
        Note::new(A, 5, 16),
        Note::new(G, 5, 16),
        Note::new(Gb, 5, 8),
        // bar 7
        Note::new(D, 5, -4),
        Note::new(E, 5, -4),
        Note::new(A, 4, 2),
        // bar 8
        Note::new(A, 4, 16),
        Note::new(A, 4, 16),
        Note::new(B, 4, 16),
        Note::new(D, 5, 8),
        Note::new(D, 5, 16),
        // bar 9
        Note::rest(4),
        Note::new(B, 4, 8),
        Note::new(Db, 5, 8),
        Note::new(D, 5, 8),
        Note::new(D, 5, 8),
        Note::new(E, 5, 8),
        Note::new(Db, 5, -8),
        // bar 10
        Note::new(B, 4, 16),
        Note::new(A, 4, 2),
        Note::rest(4),
        // bar 11
        Note::rest(8),
        Note::new(B, 4, 8),
        Note::new(B, 4, 8),
        Note::new(Db, 5, 8),
        Note::new(D, 5, 8),
        Note::new(B, 4, 4),
        Note::new(A, 4, 8),
        // bar 12
        Note::new(A, 5, 8),
        Note::rest(8),
        Note::new(A, 5, 8),
        Note::new(E, 5, -4),
        Note::rest(4),
    ],
    tempo: TempoRange::new(90, 150),
};

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The synth riff.

use super::NoteName::*;
use super::{Note, Song};
use crate::tempo::TempoRange;

pub(super) const TAKE_ON_ME: Song = Song {
    name: "TAKE ON ME, ON ME TAKE",
    notes: &[
        // bar 1
        Note::new(Gb, 5, 8),
        Note::new(Gb, 5, 8),
        Note::new(D, 5, 8),
        Note::new(B, 4, 8),
        Note::rest(8),
        Note::new(B, 4, 8),
        Note::rest(8),
        Note::new(E, 5, 8),
        // bar 2
        Note::rest(8),
        Note::new(E, 5, 8),
        Note::rest(8),
        Note::new(E, 5, 8),
        Note::new(Ab, 5, 8),
        Note::new(Ab, 5, 8),
        Note::new(A, 5, 8),
        Note::new(B, 5, 8),
        // bar 3
        Note::new(A, 5, 8),
        Note::new(A, 5, 8),
        Note::new(A, 5, 8),
        Note::new(E, 5, 8),
        Note::rest(8),
        Note::new(D, 5, 8),
        Note::rest(8),
        Note::new(Gb, 5, 8),
        // bar 4
        Note::rest(8),
        Note::new(Gb, 5, 8),
        Note::rest(8),
        Note::new(Gb, 5, 8),
        Note::new(E, 5, 8),
        Note::new(E, 5, 8),
        Note::new(Gb, 5, 8),
        Note::new(E, 5, 8),
        // bar 5
        Note::new(Gb, 5, 8),
        Note::new(Gb, 5, 8),
        Note::new(D, 5, 8),
        Note::new(B, 4, 8),
        Note::rest(8),
        Note::new(B, 4, 8),
        Note::rest(8),
        Note::new(E, 5, 8),
        // bar 6
        Note::rest(8),
        Note::new(E, 5, 8),
        Note::rest(8),
        Note::new(E, 5, 8),
        Note::new(Ab, 5, 8),
        Note::new(Ab, 5, 8),
        Note::new(A, 5, 8),
        Note::new(B, 5, 8),
        // bar 7
        Note::new(A, 5, 8),
        Note::new(A, 5, 8),
        Note::new(A, 5, 8),
        Note::new(E, 5, 8),
        Note::rest(8),
        Note::new(D, 5, 8),
        Note::rest(8),
        Note::new(Gb, 5, 8),
        // bar 8
        Note::rest(8),
        Note::new(Gb, 5, 8),
        Note::rest(8),
        Note::new(Gb, 5, 8),
        Note::new(E, 5, 8),
        Note::new(E, 5, 8),
        Note::new(Gb, 5, 8),
        Note::new(E, 5, 8),
    ],
    tempo: TempoRange::new(100, 170),
};

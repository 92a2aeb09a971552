// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Compile-time timing configuration.

use static_assertions::const_assert;

/// Every fixed interval the player uses, in milliseconds unless noted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timing {
    /// A raw level that differs from the debounced one must still differ
    /// this long after it was first seen before it counts as an edge.
    pub settle_ms: u64,
    /// Marquee scroll and glyph blink period.
    pub refresh_ms: u64,
    /// Silence between the end of one song and the start of the next.
    pub song_gap_ms: u64,
    /// Frequency of the beep acknowledging a next/back press.
    pub beep_hz: u16,
    pub beep_ms: u64,
    /// Share of each note's duration the tone actually sounds; the rest is
    /// an articulation gap so repeated pitches don't run together.
    pub sounding_percent: u64,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        settle_ms: 10,
        refresh_ms: 200,
        song_gap_ms: 100,
        beep_hz: 110, // A2
        beep_ms: 75,
        sounding_percent: 90,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const_assert!(Timing::DEFAULT.sounding_percent <= 100);
// The beep has to be over before the next song's first note.
const_assert!(Timing::DEFAULT.beep_ms <= Timing::DEFAULT.song_gap_ms);

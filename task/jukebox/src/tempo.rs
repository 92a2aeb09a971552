// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tempo from the potentiometer.

/// Largest value the tempo sensor reports (10-bit ADC).
pub const SENSOR_MAX: u16 = 1023;

// ms in a minute, times four beats to the whole note.
const WHOLENOTE_BEATS_MS: u64 = 60_000 * 4;

/// Inclusive tempo bounds of a song, in beats per minute.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TempoRange {
    min: u16,
    max: u16,
}

impl TempoRange {
    pub const fn new(min: u16, max: u16) -> Self {
        assert!(min > 0, "tempo must be nonzero");
        assert!(min <= max, "tempo range is backwards");
        Self { min, max }
    }

    pub fn min(self) -> u16 {
        self.min
    }

    pub fn max(self) -> u16 {
        self.max
    }

    pub fn contains(self, bpm: u16) -> bool {
        (self.min..=self.max).contains(&bpm)
    }

    /// Maps a sensor reading linearly onto this range; 0 is the slowest
    /// tempo and [`SENSOR_MAX`] the fastest. Readings past `SENSOR_MAX` are
    /// treated as `SENSOR_MAX`.
    pub fn map(self, reading: u16) -> u16 {
        let reading = u32::from(reading.min(SENSOR_MAX));
        let span = u32::from(self.max - self.min);
        let offset = reading * span / u32::from(SENSOR_MAX);
        // offset <= span, so this stays within u16
        self.min + offset as u16
    }
}

/// The live tempo and the length of a whole note at that tempo.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tempo {
    bpm: u16,
    wholenote_ms: u64,
}

impl Tempo {
    pub fn from_bpm(bpm: u16) -> Self {
        // TempoRange refuses zero, but a bare bpm might not have come
        // through one.
        let bpm = bpm.max(1);
        Self {
            bpm,
            wholenote_ms: WHOLENOTE_BEATS_MS / u64::from(bpm),
        }
    }

    pub fn from_reading(range: TempoRange, reading: u16) -> Self {
        Self::from_bpm(range.map(reading))
    }

    pub fn bpm(&self) -> u16 {
        self.bpm
    }

    pub fn wholenote_ms(&self) -> u64 {
        self.wholenote_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_hits_both_ends() {
        let range = TempoRange::new(150, 350);
        assert_eq!(range.map(0), 150);
        assert_eq!(range.map(SENSOR_MAX), 350);
        assert_eq!(range.map(u16::MAX), 350);
    }

    #[test]
    fn map_is_linear_and_truncates() {
        let range = TempoRange::new(50, 105);
        // 512 * 55 / 1023 = 27.53 -> 27
        assert_eq!(range.map(512), 77);
        let range = TempoRange::new(100, 200);
        // 1 * 100 / 1023 rounds down to nothing
        assert_eq!(range.map(1), 100);
    }

    #[test]
    fn every_reading_stays_in_bounds_with_exact_wholenote() {
        let ranges = [
            TempoRange::new(150, 350),
            TempoRange::new(50, 105),
            TempoRange::new(100, 200),
            TempoRange::new(120, 220),
            TempoRange::new(90, 150),
            TempoRange::new(100, 170),
            TempoRange::new(60, 60),
        ];
        for &range in &ranges {
            let mut last = 0;
            for reading in 0..=SENSOR_MAX {
                let tempo = Tempo::from_reading(range, reading);
                assert!(range.contains(tempo.bpm()), "{:?} {}", range, reading);
                assert_eq!(tempo.wholenote_ms(), 240_000 / u64::from(tempo.bpm()));
                assert!(tempo.bpm() >= last, "map must not decrease");
                last = tempo.bpm();
            }
        }
    }

    #[test]
    fn wholenote_at_common_tempos() {
        assert_eq!(Tempo::from_bpm(120).wholenote_ms(), 2000);
        assert_eq!(Tempo::from_bpm(250).wholenote_ms(), 960);
        assert_eq!(Tempo::from_bpm(0).bpm(), 1);
    }
}

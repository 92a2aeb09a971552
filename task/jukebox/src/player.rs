// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Note-by-note playback of one song.
//!
//! A [`CurrentSong`] never waits; it is handed the time whenever the caller
//! gets around to it and answers with what the piezo should do and when it
//! next needs attention. Each note is held for its whole duration but only
//! sounds for the first `sounding_percent` of it.

use crate::config::Timing;
use crate::songs::Song;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToneCommand {
    On(u16),
    Off,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SongStatus {
    /// Still going; nothing changes before this deadline.
    StillPlaying(u64),
    Done,
}

pub struct CurrentSong {
    song: &'static Song,
    note: usize, // index into `song.notes`
    sounding_percent: u64,
    tone_off_deadline: u64, // we should keep the piezo on the current note freq until this deadline
    note_end_deadline: u64, // the next note starts here; never earlier than the "off" deadline
    sounding: bool,
    frozen_at: Option<u64>,
}

impl CurrentSong {
    /// Starts the first note of `song` at `now`.
    pub fn start(
        song: &'static Song,
        now: u64,
        wholenote_ms: u64,
        timing: &Timing,
    ) -> (Self, Option<ToneCommand>) {
        let mut this = Self {
            song,
            note: 0,
            sounding_percent: timing.sounding_percent,
            tone_off_deadline: now,
            note_end_deadline: now,
            sounding: false,
            frozen_at: None,
        };
        let tone = if song.notes.is_empty() {
            None
        } else {
            let (_, tone) = this.start_current_note(now, wholenote_ms);
            Some(tone)
        };
        (this, tone)
    }

    /// Index of the note being held.
    pub fn note_index(&self) -> usize {
        self.note
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen_at.is_some()
    }

    fn start_current_note(
        &mut self,
        now: u64,
        wholenote_ms: u64,
    ) -> (u64, ToneCommand) {
        let note = &self.song.notes[self.note];

        let duration = note.divider.note_ms(wholenote_ms);
        self.note_end_deadline = now + duration;

        if let Some(freq) = note.freq {
            // Cut the tone short of the note's full length so we can hear a
            // break between subsequent notes of the same pitch without
            // getting off the beat.
            self.tone_off_deadline = now + duration * self.sounding_percent / 100;
            self.sounding = true;
            (self.tone_off_deadline, ToneCommand::On(freq))
        } else {
            // No frequency; this is a rest. The piezo should already be off,
            // but make sure.
            self.tone_off_deadline = now;
            self.sounding = false;
            (self.note_end_deadline, ToneCommand::Off)
        }
    }

    /// Advances playback to `now`. The next note, if one starts, is timed
    /// from `wholenote_ms`, so tempo changes take effect at note boundaries.
    /// It's fine to call `update()` early or often.
    pub fn update(
        &mut self,
        now: u64,
        wholenote_ms: u64,
    ) -> (SongStatus, Option<ToneCommand>) {
        if self.note >= self.song.notes.len() {
            return (SongStatus::Done, None);
        }
        if self.frozen_at.is_some() {
            return (SongStatus::StillPlaying(self.note_end_deadline), None);
        }

        // see if we're still earlier than the "off" or "end" deadlines
        if now < self.tone_off_deadline {
            return (SongStatus::StillPlaying(self.tone_off_deadline), None);
        }
        if now < self.note_end_deadline {
            let tone = self.silence();
            return (SongStatus::StillPlaying(self.note_end_deadline), tone);
        }

        // current note is done; advance to next
        self.note += 1;
        if self.note < self.song.notes.len() {
            let (deadline, tone) = self.start_current_note(now, wholenote_ms);
            (SongStatus::StillPlaying(deadline), Some(tone))
        } else {
            self.sounding = false;
            (SongStatus::Done, Some(ToneCommand::Off))
        }
    }

    fn silence(&mut self) -> Option<ToneCommand> {
        if self.sounding {
            self.sounding = false;
            Some(ToneCommand::Off)
        } else {
            None
        }
    }

    /// Stops the clock on the current note and silences it.
    pub fn freeze(&mut self, now: u64) -> ToneCommand {
        if self.frozen_at.is_none() {
            self.frozen_at = Some(now);
        }
        self.sounding = false;
        ToneCommand::Off
    }

    /// Restarts the clock where `freeze` stopped it: the current note gets
    /// back whatever time it had left, sounding again if it still should be.
    pub fn thaw(&mut self, now: u64) -> Option<ToneCommand> {
        let frozen_at = self.frozen_at.take()?;
        let paused_for = now.saturating_sub(frozen_at);
        self.tone_off_deadline += paused_for;
        self.note_end_deadline += paused_for;

        let freq = self.song.notes.get(self.note)?.freq?;
        if now < self.tone_off_deadline {
            self.sounding = true;
            Some(ToneCommand::On(freq))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::songs::Note;
    use crate::songs::NoteName::*;
    use crate::tempo::TempoRange;

    const SCALE: Song = Song {
        name: "SCALE",
        notes: &[
            Note::new(C, 4, 4),
            Note::new(D, 4, 8),
            Note::rest(8),
            Note::new(E, 4, -4),
        ],
        tempo: TempoRange::new(60, 60),
    };

    const EMPTY: Song = Song {
        name: "EMPTY",
        notes: &[],
        tempo: TempoRange::new(60, 60),
    };

    // 240 bpm: a whole note is a second.
    const WHOLE: u64 = 1000;

    fn c4() -> u16 {
        SCALE.notes[0].freq.unwrap()
    }

    #[test]
    fn first_note_sounds_for_ninety_percent() {
        let (mut song, tone) =
            CurrentSong::start(&SCALE, 0, WHOLE, &Timing::DEFAULT);
        assert_eq!(tone, Some(ToneCommand::On(c4())));
        assert!(song.is_sounding());

        // quarter note: 250ms long, 225ms of tone
        assert_eq!(song.update(0, WHOLE), (SongStatus::StillPlaying(225), None));
        assert_eq!(song.update(224, WHOLE), (SongStatus::StillPlaying(225), None));
        assert_eq!(
            song.update(225, WHOLE),
            (SongStatus::StillPlaying(250), Some(ToneCommand::Off))
        );
        // already silent; don't keep telling the piezo
        assert_eq!(song.update(240, WHOLE), (SongStatus::StillPlaying(250), None));
        assert_eq!(song.note_index(), 0);
    }

    #[test]
    fn notes_advance_rests_stay_silent_and_dotted_notes_stretch() {
        let (mut song, _) =
            CurrentSong::start(&SCALE, 0, WHOLE, &Timing::DEFAULT);

        // eighth note D4 at 250: 125ms long
        let (status, tone) = song.update(250, WHOLE);
        assert_eq!(song.note_index(), 1);
        assert_eq!(status, SongStatus::StillPlaying(250 + 112));
        assert_eq!(tone, Some(ToneCommand::On(SCALE.notes[1].freq.unwrap())));

        // rest at 375: 125ms of nothing
        let (status, tone) = song.update(375, WHOLE);
        assert_eq!(song.note_index(), 2);
        assert_eq!(status, SongStatus::StillPlaying(500));
        assert_eq!(tone, Some(ToneCommand::Off));
        assert!(!song.is_sounding());

        // dotted quarter at 500: 375ms
        let (status, _) = song.update(500, WHOLE);
        assert_eq!(song.note_index(), 3);
        assert_eq!(status, SongStatus::StillPlaying(500 + 337));
        assert_eq!(song.update(875, WHOLE), (SongStatus::Done, Some(ToneCommand::Off)));
        assert_eq!(song.update(2000, WHOLE), (SongStatus::Done, None));
    }

    #[test]
    fn tempo_applies_from_the_next_note() {
        let (mut song, _) =
            CurrentSong::start(&SCALE, 0, WHOLE, &Timing::DEFAULT);
        // Slow down to half speed halfway through the first note; it still
        // ends on time, the second note is twice as long.
        let _ = song.update(100, 2 * WHOLE);
        let (status, _) = song.update(250, 2 * WHOLE);
        assert_eq!(status, SongStatus::StillPlaying(250 + 225));
        let (status, _) = song.update(250 + 225, 2 * WHOLE);
        assert_eq!(status, SongStatus::StillPlaying(500));
    }

    #[test]
    fn freeze_and_thaw_resume_the_same_note() {
        let (mut song, _) =
            CurrentSong::start(&SCALE, 0, WHOLE, &Timing::DEFAULT);
        let _ = song.update(100, WHOLE);

        assert_eq!(song.freeze(100), ToneCommand::Off);
        assert!(song.is_frozen());
        // Time passes without moving the song.
        assert_eq!(song.update(5_000, WHOLE).1, None);
        assert_eq!(song.note_index(), 0);

        // 125ms of tone left, 150ms of note left.
        assert_eq!(song.thaw(10_000), Some(ToneCommand::On(c4())));
        assert!(!song.is_frozen());
        assert_eq!(
            song.update(10_000, WHOLE),
            (SongStatus::StillPlaying(10_125), None)
        );
        let (status, _) = song.update(10_150, WHOLE);
        assert_eq!(song.note_index(), 1);
        assert_eq!(status, SongStatus::StillPlaying(10_150 + 112));
    }

    #[test]
    fn thaw_during_articulation_gap_stays_silent() {
        let (mut song, _) =
            CurrentSong::start(&SCALE, 0, WHOLE, &Timing::DEFAULT);
        let _ = song.update(230, WHOLE);
        song.freeze(230);
        assert_eq!(song.thaw(1_230), None);
        let (status, _) = song.update(1_249, WHOLE);
        assert_eq!(status, SongStatus::StillPlaying(1_250));
        assert_eq!(song.note_index(), 0);
    }

    #[test]
    fn thaw_without_freeze_is_a_no_op() {
        let (mut song, _) =
            CurrentSong::start(&SCALE, 0, WHOLE, &Timing::DEFAULT);
        assert_eq!(song.thaw(50), None);
        assert_eq!(song.update(50, WHOLE), (SongStatus::StillPlaying(225), None));
    }

    #[test]
    fn empty_song_is_done_at_once() {
        let (mut song, tone) =
            CurrentSong::start(&EMPTY, 0, WHOLE, &Timing::DEFAULT);
        assert_eq!(tone, None);
        assert_eq!(song.update(0, WHOLE), (SongStatus::Done, None));
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The menu/playback state machine.
//!
//! ```text
//!            pause                    gap elapsed
//!   Menu ─────────────▶ Starting ───────────────▶ Playing
//!    ▲  ◀──────────────  │  ▲  ◀──────────────────  │  │
//!    │       menu         │  │  next/back, song end  │  │ pause
//!    │                    ▼  │                       │  ▼
//!    └──────────────── Paused ◀──────────────────────┘
//!          menu                 pause (resumes)
//! ```
//!
//! Each [`PlayerState::step`] does its work in a fixed order: debounce the
//! buttons and act on their edges, re-read the tempo, service note deadlines,
//! then refresh the display if it is due. Button edges therefore always win
//! over a deadline that happens to expire in the same step.

use crate::button::{Button, Buttons, Edges, Level, BUTTON_COUNT};
use crate::config::Timing;
use crate::display::{self, GlyphBlink, Marquee, Screen};
use crate::player::{CurrentSong, SongStatus, ToneCommand};
use crate::songs::{Catalog, Song, SongNumber};
use crate::tempo::{Tempo, SENSOR_MAX};
use drv_char_lcd_api::CharLcd;
use drv_piezo_element_api::Piezo;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Choosing a song.
    Menu,
    /// Waiting out the gap before the selected song's first note.
    Starting { since: u64 },
    Playing,
    /// Frozen mid-note, or mid-gap if no song was under way yet.
    Paused,
}

/// One snapshot of everything the player reads from the hardware.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawInputs {
    /// Raw pin levels, indexed by [`Button::index`].
    pub buttons: [Level; BUTTON_COUNT],
    /// Tempo potentiometer, `0..=SENSOR_MAX`.
    pub tempo: u16,
}

impl RawInputs {
    /// Every button released.
    pub fn released(tempo: u16) -> Self {
        Self {
            buttons: [Level::High; BUTTON_COUNT],
            tempo: tempo.min(SENSOR_MAX),
        }
    }

    pub fn with_pressed(mut self, button: Button) -> Self {
        self.buttons[button.index()] = Level::Low;
        self
    }
}

/// The only buttons read while paused. Back and Next are left alone, so one
/// still held when playback resumes counts as a fresh press.
const PAUSED_BUTTONS: [Button; 2] = [Button::Pause, Button::Menu];

/// What one step wants done to the hardware.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Step {
    pub tone: Option<ToneCommand>,
    pub screen: Option<Screen>,
}

pub struct PlayerState {
    timing: Timing,
    catalog: Catalog,
    selected: SongNumber,
    tempo: Tempo,
    buttons: Buttons,
    marquee: Marquee,
    blink: GlyphBlink,
    mode: Mode,
    session: Option<CurrentSong>,
    // When the screen was last drawn.
    last_refresh: u64,
    // The menu prompt needs drawing on the next step.
    menu_pending: bool,
    beep_until: Option<u64>,
}

impl PlayerState {
    /// A player sitting in the menu with the first song selected.
    pub fn new(catalog: Catalog, timing: Timing) -> Self {
        let selected = catalog.first();
        Self {
            timing,
            catalog,
            selected,
            tempo: Tempo::from_bpm(catalog.song(selected).tempo.min()),
            buttons: Buttons::new(),
            marquee: Marquee::new(),
            blink: GlyphBlink::new(),
            mode: Mode::Menu,
            session: None,
            last_refresh: 0,
            menu_pending: true,
            beep_until: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected(&self) -> SongNumber {
        self.selected
    }

    pub fn song(&self) -> &'static Song {
        self.catalog.song(self.selected)
    }

    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    /// Index of the note being played, if a song is under way.
    pub fn note_index(&self) -> Option<usize> {
        self.session.as_ref().map(CurrentSong::note_index)
    }

    /// Advances the whole player to `now`.
    pub fn step(&mut self, now: u64, raw: &RawInputs) -> Step {
        let mut step = Step::default();
        let watched: &[Button] = match self.mode {
            Mode::Paused => &PAUSED_BUTTONS,
            _ => &Button::ALL,
        };
        let edges = self.buttons.poll_only(
            watched,
            &raw.buttons,
            now,
            self.timing.settle_ms,
        );

        match self.mode {
            Mode::Menu => self.menu_step(now, &edges, &mut step),
            Mode::Paused => self.paused_step(now, &edges, &mut step),
            Mode::Starting { .. } | Mode::Playing => {
                self.playing_step(now, &edges, raw.tempo, &mut step)
            }
        }
        step
    }

    fn menu_step(&mut self, now: u64, edges: &Edges, step: &mut Step) {
        for &button in &Button::ALL {
            if !edges.pressed(button) {
                continue;
            }
            match button {
                Button::Back => {
                    self.select(self.catalog.prev(self.selected), now, step);
                }
                Button::Next => {
                    self.select(self.catalog.next(self.selected), now, step);
                }
                Button::Pause => {
                    log::info!("Play {}", self.selected.get());
                    self.start_song(now, step);
                    return;
                }
                // already here
                Button::Menu => {}
            }
        }

        self.expire_beep(now, step);

        if self.menu_pending {
            self.draw_menu(now, step);
        } else if self.refresh_due(now) {
            self.marquee.advance(self.song().name);
            step.screen = Some(self.menu_screen(false));
        }
    }

    fn paused_step(&mut self, now: u64, edges: &Edges, step: &mut Step) {
        if edges.pressed(Button::Pause) {
            log::info!("Resume");
            match self.session.as_mut() {
                Some(session) => {
                    step.tone = session.thaw(now);
                    self.mode = Mode::Playing;
                }
                // Paused during the gap: wait it out again.
                None => self.mode = Mode::Starting { since: now },
            }
            return;
        }
        if edges.pressed(Button::Menu) {
            log::info!("Menu");
            self.enter_menu(now, step);
            return;
        }

        // Keep the title moving; the glyphs hold still while nothing plays.
        if self.refresh_due(now) {
            self.marquee.advance(self.song().name);
            step.screen = Some(self.playing_screen());
        }
    }

    fn playing_step(
        &mut self,
        now: u64,
        edges: &Edges,
        reading: u16,
        step: &mut Step,
    ) {
        for &button in &Button::ALL {
            if !edges.pressed(button) {
                continue;
            }
            match button {
                Button::Back => {
                    log::info!("Back");
                    let n = self.catalog.prev(self.selected);
                    self.switch_song(n, now, step);
                }
                Button::Next => {
                    log::info!("Next");
                    let n = self.catalog.next(self.selected);
                    self.switch_song(n, now, step);
                }
                Button::Pause => {
                    log::info!("Pause");
                    self.pause(now, step);
                    return;
                }
                Button::Menu => {
                    log::info!("Menu");
                    self.enter_menu(now, step);
                    return;
                }
            }
        }

        self.tempo = Tempo::from_reading(self.song().tempo, reading);

        self.expire_beep(now, step);

        match self.mode {
            Mode::Starting { since } => {
                if now.saturating_sub(since) >= self.timing.song_gap_ms {
                    self.begin_first_note(now, step);
                }
            }
            Mode::Playing => self.advance_notes(now, step),
            Mode::Menu | Mode::Paused => {}
        }

        if self.refresh_due(now) {
            self.blink.toggle();
            self.marquee.advance(self.song().name);
            step.screen = Some(self.playing_screen());
        }
    }

    fn begin_first_note(&mut self, now: u64, step: &mut Step) {
        let song = self.song();
        log::debug!("starting {} at {} bpm", song.name, self.tempo.bpm());
        let (session, tone) = CurrentSong::start(
            song,
            now,
            self.tempo.wholenote_ms(),
            &self.timing,
        );
        self.session = Some(session);
        self.mode = Mode::Playing;
        // The song owns the piezo from here on.
        self.beep_until = None;
        if tone.is_some() {
            step.tone = tone;
        }
        // An empty song finishes right away.
        self.advance_notes(now, step);
    }

    fn advance_notes(&mut self, now: u64, step: &mut Step) {
        let wholenote_ms = self.tempo.wholenote_ms();
        let status = match self.session.as_mut() {
            Some(session) => {
                let (status, tone) = session.update(now, wholenote_ms);
                if tone.is_some() {
                    step.tone = tone;
                }
                status
            }
            None => SongStatus::Done,
        };

        if status == SongStatus::Done {
            let next = self.catalog.next(self.selected);
            log::debug!("finished {}, next up {}", self.song().name, next.get());
            self.session = None;
            self.set_selected(next);
            self.mode = Mode::Starting { since: now };
        }
    }

    fn pause(&mut self, now: u64, step: &mut Step) {
        step.tone = Some(match self.session.as_mut() {
            Some(session) => session.freeze(now),
            None => ToneCommand::Off,
        });
        self.beep_until = None;
        self.mode = Mode::Paused;
    }

    fn enter_menu(&mut self, now: u64, step: &mut Step) {
        self.session = None;
        self.beep_until = None;
        self.mode = Mode::Menu;
        self.marquee.reset();
        step.tone = Some(ToneCommand::Off);
        self.draw_menu(now, step);
    }

    /// Abandons whatever is playing in favor of song `n`.
    fn switch_song(&mut self, n: SongNumber, now: u64, step: &mut Step) {
        self.session = None;
        self.select(n, now, step);
        self.mode = Mode::Starting { since: now };
        self.last_refresh = now;
        step.screen = Some(self.playing_screen());
    }

    fn start_song(&mut self, now: u64, step: &mut Step) {
        self.menu_pending = false;
        self.marquee.reset();
        self.mode = Mode::Starting { since: now };
        // Replace the menu right away rather than at the next refresh.
        self.last_refresh = now;
        step.screen = Some(self.playing_screen());
    }

    /// Changes the selection with an acknowledging beep, redrawing the menu
    /// if that's where we are.
    fn select(&mut self, n: SongNumber, now: u64, step: &mut Step) {
        self.set_selected(n);
        step.tone = Some(ToneCommand::On(self.timing.beep_hz));
        self.beep_until = Some(now + self.timing.beep_ms);
        if self.mode == Mode::Menu {
            let full = self.menu_pending;
            self.menu_pending = false;
            self.last_refresh = now;
            step.screen = Some(self.menu_screen(full));
        }
    }

    // Song, name, note table and tempo bounds all hang off the one number,
    // so they switch together.
    fn set_selected(&mut self, n: SongNumber) {
        self.selected = n;
        self.marquee.reset();
    }

    fn draw_menu(&mut self, now: u64, step: &mut Step) {
        self.menu_pending = false;
        self.last_refresh = now;
        step.screen = Some(self.menu_screen(true));
    }

    fn expire_beep(&mut self, now: u64, step: &mut Step) {
        if let Some(until) = self.beep_until {
            if now >= until {
                self.beep_until = None;
                if step.tone.is_none() {
                    step.tone = Some(ToneCommand::Off);
                }
            }
        }
    }

    fn refresh_due(&mut self, now: u64) -> bool {
        if now.saturating_sub(self.last_refresh) > self.timing.refresh_ms {
            self.last_refresh = now;
            true
        } else {
            false
        }
    }

    fn menu_screen(&self, full: bool) -> Screen {
        Screen::Menu {
            full,
            number: self.selected,
            window: self.marquee.window(self.song().name),
        }
    }

    fn playing_screen(&self) -> Screen {
        Screen::NowPlaying {
            glyph_row: self.blink.row(),
            window: self.marquee.window(self.song().name),
        }
    }
}

/// A [`PlayerState`] wired to a piezo and an LCD.
pub struct Jukebox<P, L> {
    piezo: P,
    lcd: L,
    state: PlayerState,
}

impl<P: Piezo, L: CharLcd> Jukebox<P, L> {
    pub fn new(mut piezo: P, mut lcd: L, state: PlayerState) -> Self {
        piezo.piezo_off();
        if let Err(e) = display::init(&mut lcd) {
            log::warn!("lcd init failed: {:?}", e);
        }
        Self { piezo, lcd, state }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn piezo(&self) -> &P {
        &self.piezo
    }

    pub fn lcd(&self) -> &L {
        &self.lcd
    }

    /// Runs one step of the player and carries out its decisions.
    pub fn poll(&mut self, now: u64, raw: &RawInputs) -> Step {
        let step = self.state.step(now, raw);

        match step.tone {
            Some(ToneCommand::On(freq)) => {
                if let Err(e) = self.piezo.piezo_on(freq) {
                    log::warn!("can't play {} Hz: {:?}", freq, e);
                }
            }
            Some(ToneCommand::Off) => self.piezo.piezo_off(),
            None => {}
        }

        if let Some(screen) = step.screen.as_ref() {
            // The music goes on without the display.
            if let Err(e) = display::render(&mut self.lcd, screen) {
                log::warn!("lcd refresh failed: {:?}", e);
            }
        }

        step
    }
}

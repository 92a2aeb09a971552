// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! What goes on the 16x2 LCD.
//!
//! While playing, the screen looks like this (`♪` is the custom note glyph,
//! which blinks between the two rows at the refresh rate):
//!
//! ```text
//!  0123456789012345
//! ♪|NOW PLAYING:|
//!  |ARCADE PACMA|♪
//! ```
//!
//! Row 1 is a marquee: the song name followed by a space, scrolled one
//! character per refresh through a 12-column window and wrapping around.
//!
//! In the menu the top row is a prompt and the bottom row shows the selected
//! song's number next to the same marquee.
//!
//! The player decides *what* to show as a [`Screen`]; [`render`] turns that
//! into LCD traffic.

use crate::songs::SongNumber;
use drv_char_lcd_api::{CharLcd, Glyph, LcdError, COLUMNS, ROWS};
use static_assertions::const_assert;

/// An eighth note, flag to the right.
pub const NOTE_GLYPH: Glyph = [
    0b00001, 0b00011, 0b00101, 0b01001, 0b01001, 0b01011, 0b11011, 0b11000,
];
pub const NOTE_GLYPH_SLOT: u8 = 0;

pub const WINDOW_WIDTH: usize = 12;
const WINDOW_COLUMN: u8 = 2;
const GLYPH_COLUMNS: [u8; 2] = [0, COLUMNS - 1];

const PLAYING_HEADER: &[u8] = b"|NOW PLAYING:|";
const MENU_HEADER: &[u8] = b"CHOOSE SONG:   |";

// The window plus its borders must fit between the two glyph columns.
const_assert!(WINDOW_COLUMN as usize + WINDOW_WIDTH + 1 < COLUMNS as usize);
const_assert!(PLAYING_HEADER.len() == WINDOW_WIDTH + 2);
const_assert!(MENU_HEADER.len() == COLUMNS as usize);

pub type Window = [u8; WINDOW_WIDTH];

/// Scroll position of the song title.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Marquee {
    cursor: usize,
}

impl Marquee {
    pub const fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The window's contents at the current scroll position.
    pub fn window(&self, name: &str) -> Window {
        let name = name.as_bytes();
        let len = scroll_len(name);
        let mut window = [b' '; WINDOW_WIDTH];
        for (i, cell) in window.iter_mut().enumerate() {
            // past the end of the name is the separator space
            let k = (self.cursor + i) % len;
            *cell = name.get(k).copied().unwrap_or(b' ');
        }
        window
    }

    /// Scrolls one character, wrapping after the separator.
    pub fn advance(&mut self, name: &str) {
        self.cursor = (self.cursor + 1) % scroll_len(name.as_bytes());
    }
}

// Name plus one separator space.
fn scroll_len(name: &[u8]) -> usize {
    name.len() + 1
}

/// Which row the note glyphs are on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphBlink {
    row: u8,
}

impl GlyphBlink {
    pub const fn new() -> Self {
        Self { row: 0 }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn toggle(&mut self) -> u8 {
        self.row = (self.row + 1) % ROWS;
        self.row
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Song selection. `full` redraws the prompt too.
    Menu {
        full: bool,
        number: SongNumber,
        window: Window,
    },
    NowPlaying {
        glyph_row: u8,
        window: Window,
    },
}

/// One-time LCD setup: backlight on, note glyph uploaded.
pub fn init<L: CharLcd>(lcd: &mut L) -> Result<(), LcdError> {
    lcd.set_backlight(true)?;
    lcd.create_glyph(NOTE_GLYPH_SLOT, &NOTE_GLYPH)?;
    lcd.clear()
}

pub fn render<L: CharLcd>(lcd: &mut L, screen: &Screen) -> Result<(), LcdError> {
    match *screen {
        Screen::Menu {
            full,
            number,
            ref window,
        } => {
            if full {
                lcd.clear()?;
                lcd.set_cursor(0, 0)?;
                lcd.print(MENU_HEADER)?;
            }
            lcd.set_cursor(0, 1)?;
            lcd.print(&[b'0' + number.get() % 10, b'.'])?;
            lcd.set_cursor(WINDOW_COLUMN, 1)?;
            lcd.print(window)?;
            lcd.print(b".|")
        }
        Screen::NowPlaying {
            glyph_row,
            ref window,
        } => {
            for &column in &GLYPH_COLUMNS {
                for row in 0..ROWS {
                    lcd.set_cursor(column, row)?;
                    if row == glyph_row {
                        lcd.write_glyph(NOTE_GLYPH_SLOT)?;
                    } else {
                        lcd.print(b" ")?;
                    }
                }
            }
            lcd.set_cursor(1, 0)?;
            lcd.print(PLAYING_HEADER)?;
            lcd.set_cursor(1, 1)?;
            lcd.print(b"|")?;
            lcd.print(window)?;
            lcd.print(b"|")
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::songs::Catalog;

    /// A 16x2 framebuffer; glyph slot 0 shows up as `*`.
    pub(crate) struct FakeLcd {
        cells: [[u8; COLUMNS as usize]; ROWS as usize],
        cursor: (usize, usize),
        glyphs: Vec<(u8, Glyph)>,
        pub(crate) backlight: bool,
    }

    impl FakeLcd {
        pub(crate) fn new() -> Self {
            Self {
                cells: [[b'?'; COLUMNS as usize]; ROWS as usize],
                cursor: (0, 0),
                glyphs: vec![],
                backlight: false,
            }
        }

        pub(crate) fn row(&self, row: usize) -> String {
            self.cells[row].iter().map(|&b| b as char).collect()
        }
    }

    impl CharLcd for FakeLcd {
        fn clear(&mut self) -> Result<(), LcdError> {
            self.cells = [[b' '; COLUMNS as usize]; ROWS as usize];
            self.cursor = (0, 0);
            Ok(())
        }

        fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), LcdError> {
            if column >= COLUMNS || row >= ROWS {
                return Err(LcdError::BadPosition);
            }
            self.cursor = (usize::from(column), usize::from(row));
            Ok(())
        }

        fn print(&mut self, text: &[u8]) -> Result<(), LcdError> {
            for &b in text {
                let (c, r) = self.cursor;
                if c < COLUMNS as usize {
                    self.cells[r][c] = if b == 0 { b'*' } else { b };
                }
                self.cursor.0 += 1;
            }
            Ok(())
        }

        fn create_glyph(
            &mut self,
            slot: u8,
            glyph: &Glyph,
        ) -> Result<(), LcdError> {
            self.glyphs.push((slot, *glyph));
            Ok(())
        }

        fn set_backlight(&mut self, on: bool) -> Result<(), LcdError> {
            self.backlight = on;
            Ok(())
        }
    }

    fn text(window: &Window) -> &str {
        core::str::from_utf8(window).unwrap()
    }

    #[test]
    fn window_starts_at_the_beginning_of_the_name() {
        let m = Marquee::new();
        assert_eq!(text(&m.window("ARCADE PACMAN MUSIC")), "ARCADE PACMA");
        assert_eq!(text(&m.window("DOOM")), "DOOM DOOM DO");
    }

    #[test]
    fn window_scrolls_and_wraps_through_the_separator() {
        let name = "TETRIS NES MUSIC";
        let mut m = Marquee::new();
        m.advance(name);
        assert_eq!(text(&m.window(name)), "ETRIS NES MU");
        for _ in 0..9 {
            m.advance(name);
        }
        assert_eq!(m.cursor(), 10);
        assert_eq!(text(&m.window(name)), " MUSIC TETRI");
        m.advance(name);
        assert_eq!(text(&m.window(name)), "MUSIC TETRIS");
    }

    #[test]
    fn full_period_returns_to_the_start() {
        let name = "ARCADE PACMAN MUSIC";
        let mut m = Marquee::new();
        let start = m.window(name);
        let mut seen = vec![start];
        for _ in 0..name.len() + 1 {
            m.advance(name);
            seen.push(m.window(name));
        }
        assert_eq!(m.cursor(), 0);
        assert_eq!(seen[name.len() + 1], start);
        // and no earlier frame repeats the start
        assert!(seen[1..name.len() + 1].iter().all(|w| *w != start));
    }

    #[test]
    fn reset_rewinds() {
        let name = "SUPER MARIO BROS THEME";
        let mut m = Marquee::new();
        m.advance(name);
        m.advance(name);
        m.reset();
        assert_eq!(m.window(name), Marquee::new().window(name));
    }

    #[test]
    fn glyph_blinks_between_rows() {
        let mut b = GlyphBlink::new();
        assert_eq!(b.toggle(), 1);
        assert_eq!(b.toggle(), 0);
        assert_eq!(b.toggle(), 1);
        assert_eq!(b.row(), 1);
    }

    #[test]
    fn init_uploads_note_glyph() {
        let mut lcd = FakeLcd::new();
        init(&mut lcd).unwrap();
        assert!(lcd.backlight);
        assert_eq!(lcd.glyphs, vec![(NOTE_GLYPH_SLOT, NOTE_GLYPH)]);
        assert_eq!(lcd.row(0), " ".repeat(16));
    }

    #[test]
    fn now_playing_layout() {
        let mut lcd = FakeLcd::new();
        let window = Marquee::new().window("ARCADE PACMAN MUSIC");
        render(&mut lcd, &Screen::NowPlaying { glyph_row: 1, window }).unwrap();
        assert_eq!(lcd.row(0), " |NOW PLAYING:| ");
        assert_eq!(lcd.row(1), "*|ARCADE PACMA|*");

        render(&mut lcd, &Screen::NowPlaying { glyph_row: 0, window }).unwrap();
        assert_eq!(lcd.row(0), "*|NOW PLAYING:|*");
        assert_eq!(lcd.row(1), " |ARCADE PACMA| ");
    }

    #[test]
    fn menu_layout() {
        let catalog = Catalog::BUILT_IN;
        let number = catalog.next(catalog.first());
        let window = Marquee::new().window(catalog.song(number).name);

        let mut lcd = FakeLcd::new();
        render(
            &mut lcd,
            &Screen::Menu {
                full: true,
                number,
                window,
            },
        )
        .unwrap();
        assert_eq!(lcd.row(0), "CHOOSE SONG:   |");
        assert_eq!(lcd.row(1), "2.ARCADE PACMA.|");

        // A partial redraw leaves the prompt alone.
        lcd.cells[0] = [b'x'; COLUMNS as usize];
        render(
            &mut lcd,
            &Screen::Menu {
                full: false,
                number: catalog.first(),
                window: Marquee::new().window(catalog.song(catalog.first()).name),
            },
        )
        .unwrap();
        assert_eq!(lcd.row(0), "x".repeat(16));
        assert_eq!(lcd.row(1), "1.DOOM BY JADE.|");
    }
}

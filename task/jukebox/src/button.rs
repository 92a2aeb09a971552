// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Debouncing and edge detection for the four momentary buttons.
//!
//! Buttons are wired to pull-up inputs, so a released button reads
//! [`Level::High`] and a pressed one [`Level::Low`]; a press is a
//! [`Edge::Falling`] and a release a [`Edge::Rising`].
//!
//! A raw read that disagrees with the debounced level is only believed once
//! a later read, at least the settle interval afterwards, still disagrees.
//! Any read in between that agrees again throws the candidate away. This is
//! the classic "read, wait 10ms, read again" debounce with the wait turned
//! inside out so that nobody has to block.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Back,
    Pause,
    Next,
    Menu,
}

pub const BUTTON_COUNT: usize = 4;

impl Button {
    /// All buttons, in the order their edges are acted on within one poll.
    pub const ALL: [Button; BUTTON_COUNT] =
        [Button::Back, Button::Pause, Button::Next, Button::Menu];

    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    NoChange,
    Rising,
    Falling,
}

/// Debounced state of one button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Debouncer {
    level: Level,
    // When we first saw the raw level disagree with `level`.
    pending_since: Option<u64>,
}

impl Debouncer {
    /// A released button with nothing pending.
    pub const fn new() -> Self {
        Self {
            level: Level::High,
            pending_since: None,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn is_pressed(&self) -> bool {
        self.level == Level::Low
    }

    /// Feeds one raw read taken at `now`. The stored level only changes when
    /// an edge is returned.
    pub fn poll(&mut self, raw: Level, now: u64, settle_ms: u64) -> Edge {
        if raw == self.level {
            self.pending_since = None;
            return Edge::NoChange;
        }

        match self.pending_since {
            None => {
                self.pending_since = Some(now);
                Edge::NoChange
            }
            Some(since) if now.saturating_sub(since) >= settle_ms => {
                self.pending_since = None;
                self.level = raw;
                match raw {
                    Level::Low => Edge::Falling,
                    Level::High => Edge::Rising,
                }
            }
            Some(_) => Edge::NoChange,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

/// Edges produced by one poll of every button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edges([Edge; BUTTON_COUNT]);

impl Edges {
    pub const NONE: Self = Self([Edge::NoChange; BUTTON_COUNT]);

    pub fn edge(&self, button: Button) -> Edge {
        self.0[button.index()]
    }

    /// True if `button` went down during this poll.
    pub fn pressed(&self, button: Button) -> bool {
        self.edge(button) == Edge::Falling
    }
}

/// One [`Debouncer`] per physical button.
#[derive(Clone, Debug, Default)]
pub struct Buttons {
    debouncers: [Debouncer; BUTTON_COUNT],
}

impl Buttons {
    pub const fn new() -> Self {
        Self {
            debouncers: [Debouncer::new(); BUTTON_COUNT],
        }
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.debouncers[button.index()].is_pressed()
    }

    /// Debounces a snapshot of every raw level, indexed by
    /// [`Button::index`].
    pub fn poll(
        &mut self,
        raw: &[Level; BUTTON_COUNT],
        now: u64,
        settle_ms: u64,
    ) -> Edges {
        self.poll_only(&Button::ALL, raw, now, settle_ms)
    }

    /// Like [`Buttons::poll`], but only `watched` buttons are read. The rest
    /// keep their debounced level and any pending change, as if the reads
    /// never happened.
    pub fn poll_only(
        &mut self,
        watched: &[Button],
        raw: &[Level; BUTTON_COUNT],
        now: u64,
        settle_ms: u64,
    ) -> Edges {
        let mut edges = Edges::NONE;
        for button in watched.iter().copied() {
            let i = button.index();
            edges.0[i] = self.debouncers[i].poll(raw[i], now, settle_ms);
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTLE: u64 = 10;

    // Feeds `raw(t)` once per millisecond over `range`, collecting edges.
    fn run(
        d: &mut Debouncer,
        range: core::ops::Range<u64>,
        raw: impl Fn(u64) -> Level,
    ) -> Vec<(u64, Edge)> {
        range
            .filter_map(|t| match d.poll(raw(t), t, SETTLE) {
                Edge::NoChange => None,
                e => Some((t, e)),
            })
            .collect()
    }

    #[test]
    fn starts_released() {
        let d = Debouncer::new();
        assert_eq!(d.level(), Level::High);
        assert!(!d.is_pressed());
    }

    #[test]
    fn steady_press_is_one_falling_edge_after_settling() {
        let mut d = Debouncer::new();
        let edges = run(&mut d, 0..100, |t| {
            if t >= 20 {
                Level::Low
            } else {
                Level::High
            }
        });
        assert_eq!(edges, vec![(30, Edge::Falling)]);
        assert!(d.is_pressed());
    }

    #[test]
    fn press_and_release_give_falling_then_rising() {
        let mut d = Debouncer::new();
        let edges = run(&mut d, 0..200, |t| {
            if (20..100).contains(&t) {
                Level::Low
            } else {
                Level::High
            }
        });
        assert_eq!(edges, vec![(30, Edge::Falling), (110, Edge::Rising)]);
        assert!(!d.is_pressed());
    }

    #[test]
    fn glitches_shorter_than_settle_are_ignored() {
        for width in 1..SETTLE {
            for start in 0..5 {
                let mut d = Debouncer::new();
                let edges = run(&mut d, 0..100, |t| {
                    if (start..start + width).contains(&t) {
                        Level::Low
                    } else {
                        Level::High
                    }
                });
                assert!(edges.is_empty(), "width {} start {}", width, start);
                assert_eq!(d.level(), Level::High);
            }
        }
    }

    #[test]
    fn glitch_seen_only_at_first_read_is_ignored() {
        // The glitch ends before the confirming read, even with a sparse
        // polling rate.
        let mut d = Debouncer::new();
        assert_eq!(d.poll(Level::Low, 0, SETTLE), Edge::NoChange);
        assert_eq!(d.poll(Level::High, 12, SETTLE), Edge::NoChange);
        assert_eq!(d.poll(Level::High, 30, SETTLE), Edge::NoChange);
        assert!(!d.is_pressed());
    }

    #[test]
    fn chattering_press_settles_once() {
        let mut d = Debouncer::new();
        // Contact bounce for a few ms, then a solid press.
        let edges = run(&mut d, 0..100, |t| match t {
            10 | 12 | 15 => Level::Low,
            t if t >= 17 => Level::Low,
            _ => Level::High,
        });
        assert_eq!(edges, vec![(27, Edge::Falling)]);
    }

    #[test]
    fn buttons_poll_independently() {
        let mut buttons = Buttons::new();
        let mut raw = [Level::High; BUTTON_COUNT];
        raw[Button::Next.index()] = Level::Low;

        assert_eq!(buttons.poll(&raw, 0, SETTLE), Edges::NONE);
        let edges = buttons.poll(&raw, SETTLE, SETTLE);
        assert!(edges.pressed(Button::Next));
        assert!(!edges.pressed(Button::Back));
        assert_eq!(edges.edge(Button::Menu), Edge::NoChange);
        assert!(buttons.is_pressed(Button::Next));

        // Held down: no further edges.
        assert_eq!(buttons.poll(&raw, 50, SETTLE), Edges::NONE);
    }

    #[test]
    fn unwatched_buttons_are_not_read() {
        let mut buttons = Buttons::new();
        let watched = [Button::Pause, Button::Menu];
        let mut raw = [Level::High; BUTTON_COUNT];
        raw[Button::Next.index()] = Level::Low;

        // Next is held the whole time but nobody is looking.
        for t in 0..100 {
            assert_eq!(buttons.poll_only(&watched, &raw, t, SETTLE), Edges::NONE);
        }
        assert!(!buttons.is_pressed(Button::Next));

        // Once it's watched again it still has to settle, then registers.
        assert_eq!(buttons.poll(&raw, 100, SETTLE), Edges::NONE);
        assert!(buttons.poll(&raw, 110, SETTLE).pressed(Button::Next));
    }
}

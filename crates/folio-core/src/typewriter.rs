//! Typewriter effect for the hero role line.
//!
//! Types a word one character at a time, holds it, deletes it, then moves on to
//! the next word, wrapping around. Time is passed in by the caller so the effect
//! can be driven from the UI tick.

use std::time::{Duration, Instant};

use crate::carousel::next_index;
use crate::config::TypewriterConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
    word: usize,
    /// Characters of the current word currently shown
    shown: usize,
    phase: Phase,
    next_step_at: Option<Instant>,
    typing: Duration,
    deleting: Duration,
    pause: Duration,
}

impl Typewriter {
    pub fn new(words: Vec<String>, config: &TypewriterConfig) -> Self {
        let min = Duration::from_millis(1);
        Self {
            words,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
            next_step_at: None,
            typing: Duration::from_millis(config.typing_ms).max(min),
            deleting: Duration::from_millis(config.deleting_ms).max(min),
            pause: Duration::from_millis(config.pause_ms).max(min),
        }
    }

    /// Visible prefix of the current word
    pub fn text(&self) -> String {
        self.words
            .get(self.word)
            .map(|w| w.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word
    }

    /// Advance to `now`. Returns whether the visible text changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.words.is_empty() {
            return false;
        }

        let Some(mut at) = self.next_step_at else {
            self.next_step_at = Some(now + self.typing);
            return false;
        };

        let before = (self.word, self.shown);
        while at <= now {
            at = self.step(at);
        }
        self.next_step_at = Some(at);

        before != (self.word, self.shown)
    }

    /// Apply one step scheduled for `at`; returns when the next step is due
    fn step(&mut self, at: Instant) -> Instant {
        let len = self.words[self.word].chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                    at + self.pause
                } else {
                    at + self.typing
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                at + self.deleting
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = next_index(self.word, self.words.len());
                    self.phase = Phase::Typing;
                    at + self.typing
                } else {
                    at + self.deleting
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(words: &[&str]) -> Typewriter {
        Typewriter::new(
            words.iter().map(|w| w.to_string()).collect(),
            &TypewriterConfig::default(),
        )
    }

    #[test]
    fn test_types_one_char_per_interval() {
        let start = Instant::now();
        let mut tw = writer(&["Rust"]);
        assert!(!tw.tick(start));
        assert_eq!(tw.text(), "");

        assert!(tw.tick(start + Duration::from_millis(100)));
        assert_eq!(tw.text(), "R");

        tw.tick(start + Duration::from_millis(300));
        assert_eq!(tw.text(), "Rus");
    }

    #[test]
    fn test_holds_then_deletes_then_next_word() {
        let start = Instant::now();
        let mut tw = writer(&["ab", "xyz"]);
        tw.tick(start);

        // typed fully at +200, hold until +2200
        tw.tick(start + Duration::from_millis(200));
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), Phase::Holding);

        tw.tick(start + Duration::from_millis(2100));
        assert_eq!(tw.text(), "ab");

        // deleting starts at +2200, one char each 50ms
        tw.tick(start + Duration::from_millis(2250));
        assert_eq!(tw.text(), "a");
        tw.tick(start + Duration::from_millis(2300));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.word_index(), 1);

        tw.tick(start + Duration::from_millis(2400));
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_wraps_to_first_word() {
        let start = Instant::now();
        let mut tw = writer(&["a", "b"]);
        tw.tick(start);
        // one full cycle per word: 100 type + 2000 hold + 50 delete + 50 delete-step
        tw.tick(start + Duration::from_secs(10));
        assert!(tw.word_index() < 2);
    }

    #[test]
    fn test_empty_words() {
        let mut tw = writer(&[]);
        assert!(!tw.tick(Instant::now()));
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_multibyte_words() {
        let start = Instant::now();
        let mut tw = writer(&["héllo"]);
        tw.tick(start);
        tw.tick(start + Duration::from_millis(200));
        assert_eq!(tw.text(), "hé");
    }
}

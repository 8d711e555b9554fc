//! # Typewriter
//!
//! The hero phrase loop: type a word, hold it, delete it, move on.

pub const HERO_WORDS: [&str; 3] = ["Digital Future", "Own Legacy", "Love For Technology"];

pub const TYPE_MS: u32 = 50;
pub const DELETE_MS: u32 = 20;
pub const PAUSE_MS: u32 = 1500;

/// Text to render and how long to wait before the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: &'static [&'static str],
    word: usize,
    shown: usize,
    deleting: bool,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(&HERO_WORDS)
    }
}

impl Typewriter {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self {
            words,
            word: 0,
            shown: 0,
            deleting: false,
        }
    }

    pub fn current_word(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or_default()
    }

    /// Advance by one character.
    pub fn tick(&mut self) -> Frame {
        let word = self.current_word();
        let len = word.chars().count();

        if self.words.is_empty() || len == 0 {
            self.advance_word();
            return Frame {
                text: String::new(),
                delay_ms: PAUSE_MS,
            };
        }

        let delay_ms = if !self.deleting && self.shown < len {
            self.shown += 1;
            if self.shown == len {
                PAUSE_MS
            } else {
                TYPE_MS
            }
        } else {
            self.deleting = true;
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.advance_word();
                TYPE_MS
            } else {
                DELETE_MS
            }
        };

        Frame {
            text: word.chars().take(self.shown).collect(),
            delay_ms,
        }
    }

    fn advance_word(&mut self) {
        if !self.words.is_empty() {
            self.word = (self.word + 1) % self.words.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_then_pauses() {
        let mut tw = Typewriter::default();

        assert_eq!(
            tw.tick(),
            Frame {
                text: "D".to_string(),
                delay_ms: TYPE_MS
            }
        );
        for _ in 0..12 {
            tw.tick();
        }
        assert_eq!(
            tw.tick(),
            Frame {
                text: "Digital Future".to_string(),
                delay_ms: PAUSE_MS
            }
        );
    }

    #[test]
    fn test_deletes_then_moves_on() {
        let mut tw = Typewriter::default();
        for _ in 0.."Digital Future".len() {
            tw.tick();
        }

        assert_eq!(tw.tick().text, "Digital Futur");
        let mut frame = tw.tick();
        while !frame.text.is_empty() {
            assert_eq!(frame.delay_ms, DELETE_MS);
            frame = tw.tick();
        }

        assert_eq!(frame.delay_ms, TYPE_MS);
        assert_eq!(tw.current_word(), "Own Legacy");
        assert_eq!(tw.tick().text, "O");
    }

    #[test]
    fn test_loops_to_first_word() {
        static WORDS: [&str; 2] = ["ab", "c"];
        let mut tw = Typewriter::new(&WORDS);

        let texts: Vec<String> = (0..8).map(|_| tw.tick().text).collect();
        assert_eq!(texts, vec!["a", "ab", "a", "", "c", "", "a", "ab"]);
    }
}

/// Round state machine: guesses, hints, the timer and win/loss resolution.
/// Pure state, no terminal types; the UI owns the single live instance and
/// replaces it wholesale on "play again" or a category change.
use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use crate::core::alphabet::{letters_equal, normalize_letter, LetterSet, YE, YO};
use crate::core::words::Category;

pub const MAX_MISTAKES: u8 = 6;
pub const ROUND_SECONDS: u64 = 90;

#[derive(Debug, Clone)]
pub struct Round {
    pub category: Category,
    word: &'static str,
    pub guessed: LetterSet,
    pub used: LetterSet,
    pub mistakes: u8,
    pub won: bool,
    pub lost: bool,
    pub eyo_equivalence: bool,
    pub remaining_seconds: u64,
    started_at: Instant,
}

impl Round {
    /// Fresh round with a random word from the category. The equivalence
    /// flag carries over from the previous round when given, otherwise it
    /// defaults to on.
    pub fn new(category: Category, keep_equivalence: Option<bool>, now: Instant) -> Self {
        Self::from_word(category, category.pick_word(), keep_equivalence, now)
    }

    /// Fresh round around a fixed word. `new` goes through here; scenario
    /// tests use it directly to pin the word down.
    pub fn from_word(
        category: Category,
        word: &'static str,
        keep_equivalence: Option<bool>,
        now: Instant,
    ) -> Self {
        info!(
            category = category.label(),
            letters = word.chars().count(),
            "new round"
        );
        Self {
            category,
            word,
            guessed: LetterSet::EMPTY,
            used: LetterSet::EMPTY,
            mistakes: 0,
            won: false,
            lost: false,
            eyo_equivalence: keep_equivalence.unwrap_or(true),
            remaining_seconds: ROUND_SECONDS,
            started_at: now,
        }
    }

    pub fn word(&self) -> &'static str {
        self.word
    }

    pub fn is_over(&self) -> bool {
        self.won || self.lost
    }

    /// Play one letter. Input outside the alphabet, a terminal round and a
    /// repeated letter are all no-ops; otherwise the letter lands in `used`
    /// and either reveals every matching word letter or costs a mistake.
    pub fn guess(&mut self, raw: char) {
        let Some(letter) = normalize_letter(raw) else {
            return;
        };
        if self.is_over() || self.used.contains(letter) {
            return;
        }
        self.used.insert(letter);

        let mut hit = false;
        for wch in self.word.chars() {
            if letters_equal(letter, wch, self.eyo_equivalence) {
                self.guessed.insert(wch);
                hit = true;
            }
        }
        if hit {
            debug!(%letter, "correct guess");
        } else {
            self.mistakes += 1;
            debug!(%letter, mistakes = self.mistakes, "wrong guess");
        }
        self.resolve();
    }

    /// Reveal one hidden letter at random for the price of one mistake.
    /// Returns false without touching anything when the round is over or no
    /// letter is left to reveal. The UI additionally keeps the hint button
    /// inactive once the mistake cap is reached.
    pub fn reveal_hint(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        let hidden: Vec<char> = self.hidden_letters();
        if hidden.is_empty() {
            return false;
        }
        let mut rng = rand::rng();
        let pick = hidden[rng.random_range(0..hidden.len())];
        self.guessed.insert(pick);
        self.mistakes = (self.mistakes + 1).min(MAX_MISTAKES);
        debug!(%pick, mistakes = self.mistakes, "hint revealed");
        self.resolve();
        true
    }

    /// Advance the round clock. Called once per frame by the UI.
    pub fn tick(&mut self, now: Instant) {
        if self.is_over() {
            return;
        }
        let passed = now.duration_since(self.started_at).as_secs();
        self.remaining_seconds = ROUND_SECONDS.saturating_sub(passed);
        self.resolve();
    }

    /// Flip the Е=Ё rule. Allowed any time; never re-resolves the round and
    /// never rewrites mistakes already on the board, but it does change how
    /// subsequent guesses match and which letters count as shown.
    pub fn toggle_equivalence(&mut self) {
        self.eyo_equivalence = !self.eyo_equivalence;
        debug!(eyo = self.eyo_equivalence, "equivalence toggled");
    }

    /// Is this word letter currently visible in the masked word?
    pub fn is_letter_shown(&self, ch: char) -> bool {
        self.guessed.contains(ch)
            || (self.eyo_equivalence
                && (ch == YE || ch == YO)
                && (self.guessed.contains(YE) || self.guessed.contains(YO)))
    }

    pub fn all_letters_shown(&self) -> bool {
        self.distinct_word_letters()
            .iter()
            .all(|ch| self.is_letter_shown(ch))
    }

    /// Used letters that match nothing in the word under the current rule.
    pub fn wrong_letters(&self) -> Vec<char> {
        self.used
            .iter()
            .filter(|&u| !self.word.chars().any(|w| letters_equal(u, w, self.eyo_equivalence)))
            .collect()
    }

    fn distinct_word_letters(&self) -> LetterSet {
        self.word.chars().collect()
    }

    fn hidden_letters(&self) -> Vec<char> {
        self.distinct_word_letters()
            .iter()
            .filter(|&ch| !self.is_letter_shown(ch))
            .collect()
    }

    // Shared terminal-state transition, run after every mutating operation.
    // Fixed priority: timeout, then completion, then the mistake cap; the
    // first match wins and records the single cause. The timeout branch
    // reads the seconds computed by the latest tick.
    fn resolve(&mut self) {
        if self.is_over() {
            return;
        }
        if self.remaining_seconds == 0 {
            self.lost = true;
            info!(word = self.word, "lost on time");
        } else if self.all_letters_shown() {
            self.won = true;
            info!(word = self.word, mistakes = self.mistakes, "won");
        } else if self.mistakes >= MAX_MISTAKES {
            self.lost = true;
            info!(word = self.word, "lost on mistakes");
        }
    }
}

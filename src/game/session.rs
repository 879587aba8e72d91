//! Game session state
//!
//! A `Game` owns one puzzle and its guess history. Guesses are collected one
//! letter-unit at a time, the way an on-screen keyboard produces them.

use super::share::share_text;
use crate::core::{Feedback, KeyboardStatuses, KupuError, Puzzle};
use crate::languages::LanguagePack;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Reasons a guess is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error("not enough letters: {got} of {needed}")]
    NotEnoughLetters { got: usize, needed: usize },

    #[error("too many letters: {got} of {needed}")]
    TooManyLetters { got: usize, needed: usize },

    #[error("'{0}' is not in the word list")]
    NotInWordList(String),

    #[error("solution '{solution}' has {got} letters, the game needs {needed}")]
    InvalidSolution {
        solution: String,
        got: usize,
        needed: usize,
    },

    #[error(transparent)]
    Evaluation(#[from] KupuError),
}

/// A submitted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub units: Vec<String>,
    pub feedback: Feedback,
}

impl Row {
    /// Units joined back into a word
    #[must_use]
    pub fn word(&self) -> String {
        self.units.concat()
    }
}

/// One puzzle being played
pub struct Game<'a> {
    pack: &'a LanguagePack,
    puzzle: Puzzle,
    rows: Vec<Row>,
    current: Vec<String>,
    keyboard: KeyboardStatuses,
    state: GameState,
}

impl<'a> Game<'a> {
    /// Start a game for `solution` using the pack's orthography and rules
    ///
    /// The solution need not be in the word list, but it must split into
    /// exactly `word_length` units.
    ///
    /// # Errors
    /// Returns `GameError::InvalidSolution` if the solution has the wrong
    /// number of letter-units.
    ///
    /// # Examples
    /// ```
    /// use kimikupu::game::{Game, GameState};
    /// use kimikupu::languages::{Language, LanguageConfig, LanguagePack};
    ///
    /// let pack = LanguagePack::new(Language::Maori, LanguageConfig::default()).unwrap();
    /// let mut game = Game::new(&pack, "aroha").unwrap();
    ///
    /// game.submit_word("marae").unwrap();
    /// game.submit_word("aroha").unwrap();
    /// assert_eq!(game.state(), GameState::Won);
    ///
    /// // wh-a-r-e is four letters
    /// assert!(Game::new(&pack, "whare").is_err());
    /// ```
    pub fn new(pack: &'a LanguagePack, solution: &str) -> Result<Self, GameError> {
        let puzzle = pack.puzzle(solution);
        let needed = pack.config().word_length;
        if puzzle.len() != needed {
            return Err(GameError::InvalidSolution {
                solution: puzzle.solution().to_string(),
                got: puzzle.len(),
                needed,
            });
        }

        tracing::debug!(
            language = pack.language().name(),
            units = puzzle.len(),
            "new game"
        );

        Ok(Self {
            pack,
            puzzle,
            rows: Vec::new(),
            current: Vec::new(),
            keyboard: KeyboardStatuses::default(),
            state: GameState::InProgress,
        })
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.state, GameState::InProgress)
    }

    #[must_use]
    pub fn solution(&self) -> &str {
        self.puzzle.solution()
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn pack(&self) -> &'a LanguagePack {
        self.pack
    }

    /// Submitted guesses in order
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Units typed into the row being edited
    #[must_use]
    pub fn current(&self) -> &[String] {
        &self.current
    }

    /// Best-known status of every guessed unit
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatuses {
        &self.keyboard
    }

    #[must_use]
    pub fn remaining_tries(&self) -> usize {
        self.pack.config().tries.saturating_sub(self.rows.len())
    }

    /// Append a unit to the current row
    ///
    /// Returns false (and changes nothing) if the game is over, the row is
    /// full, or `unit` is not a letter-unit of the language.
    pub fn push_unit(&mut self, unit: &str) -> bool {
        if self.is_over()
            || self.current.len() >= self.pack.config().word_length
            || !self.pack.is_valid_unit(unit)
        {
            return false;
        }

        self.current.push(self.pack.normalize(unit));
        true
    }

    /// Remove the last unit of the current row
    pub fn pop_unit(&mut self) -> Option<String> {
        self.current.pop()
    }

    /// Replace the current row with `word` split into units
    ///
    /// Returns the number of units the row now holds. Characters outside
    /// the orthography are dropped.
    pub fn type_word(&mut self, word: &str) -> usize {
        if !self.is_over() {
            self.current = self.pack.split(word);
        }
        self.current.len()
    }

    /// Submit the current row
    ///
    /// # Errors
    /// - `GameOver` once the game is won or lost
    /// - `NotEnoughLetters` / `TooManyLetters` if the row is not `word_length` units
    /// - `NotInWordList` if the word is neither playable nor the solution
    pub fn submit(&mut self) -> Result<&Row, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let needed = self.pack.config().word_length;
        let got = self.current.len();
        if got < needed {
            return Err(GameError::NotEnoughLetters { got, needed });
        }
        if got > needed {
            return Err(GameError::TooManyLetters { got, needed });
        }

        let word = self.current.concat();
        let is_solution = self.puzzle.is_solution(&self.current);
        if !is_solution && !self.pack.is_word_in_word_list(&word) {
            return Err(GameError::NotInWordList(word));
        }

        let feedback = self.puzzle.evaluate(&self.current)?;
        let units = std::mem::take(&mut self.current);
        self.rows.push(Row { units, feedback });

        let history: Vec<&[String]> = self.rows.iter().map(|r| r.units.as_slice()).collect();
        self.keyboard = self.puzzle.keyboard(&history)?;

        if is_solution {
            self.state = GameState::Won;
            tracing::info!(guesses = self.rows.len(), "puzzle solved");
        } else if self.rows.len() >= self.pack.config().tries {
            self.state = GameState::Lost;
            tracing::info!(solution = self.solution(), "out of tries");
        } else {
            tracing::debug!(word = %word, remaining = self.remaining_tries(), "guess recorded");
        }

        self.rows.last().ok_or(GameError::GameOver)
    }

    /// Type `word` into the current row and submit it
    ///
    /// # Errors
    /// As [`Game::submit`].
    pub fn submit_word(&mut self, word: &str) -> Result<&Row, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.type_word(word);
        self.submit()
    }

    /// Share message for the game so far
    ///
    /// Games never enforce hard-mode rules, so the score carries no `*`;
    /// callers that do can use [`share_text`] directly.
    #[must_use]
    pub fn share_text(&self, game_name: &str, game_number: i64) -> String {
        let feedbacks: Vec<Feedback> = self.rows.iter().map(|r| r.feedback.clone()).collect();
        share_text(
            game_name,
            game_number,
            &feedbacks,
            self.state == GameState::Lost,
            self.pack.config().tries,
            false,
        )
    }
}

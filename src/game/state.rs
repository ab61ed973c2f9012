//! Game state for one day's puzzle

use super::persist::SavedGame;
use crate::core::{Dictionary, Grade, LetterKnowledge, LetterVerdict, Verdict, grade, verdicts_to_emoji};
use crate::error::{Error, Result};

/// Number of attempts per puzzle
pub const MAX_GUESSES: usize = 6;

/// Title used in the share summary header
pub const SHARE_TITLE: &str = "lesble.jade.fyi";

/// Marker used in place of a score when the puzzle was not solved
pub const FAILURE_MARKER: &str = "❌";

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: String,
    letters: Vec<LetterVerdict>,
}

impl GuessRecord {
    #[must_use]
    pub fn new(word: impl Into<String>, letters: Vec<LetterVerdict>) -> Self {
        Self {
            word: word.into(),
            letters,
        }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterVerdict] {
        &self.letters
    }
}

/// How a finished game ended, recorded at the moment of the final guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { guesses: usize },
    Lost,
}

/// Session aggregate for a single puzzle
///
/// Holds the secret, the accepted guesses and the letter knowledge derived
/// from them. Only [`GameState::submit_guess`] mutates it.
#[derive(Debug, Clone)]
pub struct GameState {
    day: i64,
    secret: String,
    dictionary: Dictionary,
    guesses: Vec<GuessRecord>,
    knowledge: LetterKnowledge,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Start a fresh game for `day`
    ///
    /// # Errors
    /// Returns `Error::NoPuzzleForDay` if `corrects` has no word for `day`.
    ///
    /// # Examples
    /// ```
    /// use lesble::core::Dictionary;
    /// use lesble::game::GameState;
    ///
    /// let corrects = vec!["crane".to_string()];
    /// let dict: Dictionary = ["crane"].into_iter().collect();
    ///
    /// assert!(GameState::new(0, &corrects, dict.clone()).is_ok());
    /// assert!(GameState::new(1, &corrects, dict).is_err());
    /// ```
    pub fn new(day: i64, corrects: &[String], dictionary: Dictionary) -> Result<Self> {
        let secret = usize::try_from(day)
            .ok()
            .and_then(|i| corrects.get(i))
            .filter(|word| !word.is_empty())
            .ok_or(Error::NoPuzzleForDay { day })?;

        Ok(Self {
            day,
            secret: secret.clone(),
            dictionary,
            guesses: Vec::with_capacity(MAX_GUESSES),
            knowledge: LetterKnowledge::new(),
            outcome: None,
        })
    }

    /// Grade `word` and, if it is a valid guess, record it
    ///
    /// `Invalid` guesses leave the state untouched. The game ends on a
    /// `Correct` verdict or when the last attempt is used.
    ///
    /// # Errors
    /// Returns `Error::SessionComplete` once the game has ended.
    pub fn submit_guess(&mut self, word: &str) -> Result<Grade> {
        if self.outcome.is_some() {
            return Err(Error::SessionComplete);
        }

        let result = grade(word, &self.secret, &self.dictionary);
        if result.verdict == Verdict::Invalid {
            return Ok(result);
        }

        self.knowledge.apply(word, &result.letters);
        self.guesses
            .push(GuessRecord::new(word, result.letters.clone()));

        if result.verdict == Verdict::Correct {
            self.outcome = Some(Outcome::Won {
                guesses: self.guesses.len(),
            });
        } else if self.guesses.len() >= MAX_GUESSES {
            self.outcome = Some(Outcome::Lost);
        }

        if let Some(outcome) = self.outcome {
            log::info!("day {} finished: {outcome:?}", self.day);
        }

        Ok(result)
    }

    /// Re-submit previously saved guesses against the current secret
    ///
    /// Saved verdicts are ignored; every word is graded again. Returns the
    /// number of guesses that were accepted.
    pub fn replay(&mut self, history: &[GuessRecord]) -> usize {
        let mut accepted = 0;
        for record in history {
            match self.submit_guess(record.word()) {
                Ok(result) if result.is_valid() => {
                    if result.letters != record.letters() {
                        log::debug!("saved verdicts for '{}' differ after regrading", record.word());
                    }
                    accepted += 1;
                }
                Ok(_) => log::debug!("skipping saved guess '{}': not in word list", record.word()),
                Err(_) => {
                    log::debug!("ignoring saved guesses past the end of the game");
                    break;
                }
            }
        }
        accepted
    }

    /// Persisted form: the day and the guess history
    #[must_use]
    pub fn serialize(&self) -> SavedGame {
        SavedGame::new(self.day, &self.guesses)
    }

    /// Text for sharing results without spoiling the answer
    ///
    /// The header carries the day and the score (guess count if won, a
    /// failure marker otherwise), followed by one emoji line per guess.
    #[must_use]
    pub fn share_summary(&self) -> String {
        let score = match self.outcome {
            Some(Outcome::Won { guesses }) => guesses.to_string(),
            _ => FAILURE_MARKER.to_string(),
        };

        let mut out = format!("{SHARE_TITLE} {}: {score}/{MAX_GUESSES}", self.day);
        for record in &self.guesses {
            out.push('\n');
            out.push_str(&verdicts_to_emoji(record.letters()));
        }
        out
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> i64 {
        self.day
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Letters per word
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterVerdict::{Absent, Correct, Present};

    const WORDS: &[&str] = &[
        "crane", "trace", "slate", "irate", "audio", "pious", "ghost", "nymph",
    ];

    fn state(secret: &str) -> GameState {
        let corrects = vec![secret.to_string()];
        GameState::new(0, &corrects, WORDS.iter().copied().collect()).unwrap()
    }

    #[test]
    fn new_picks_word_for_day() {
        let corrects: Vec<String> = ["crane", "slate", "ghost"].map(String::from).to_vec();
        let game = GameState::new(2, &corrects, WORDS.iter().copied().collect()).unwrap();

        assert_eq!(game.secret(), "ghost");
        assert_eq!(game.day(), 2);
        assert_eq!(game.word_length(), 5);
        assert!(game.guesses().is_empty());
        assert!(!game.is_complete());
    }

    #[test]
    fn new_without_puzzle_fails() {
        let corrects = vec!["crane".to_string()];

        assert!(matches!(
            GameState::new(1, &corrects, Dictionary::new()),
            Err(Error::NoPuzzleForDay { day: 1 })
        ));
        assert!(matches!(
            GameState::new(-3, &corrects, Dictionary::new()),
            Err(Error::NoPuzzleForDay { day: -3 })
        ));
        assert!(matches!(
            GameState::new(0, &[], Dictionary::new()),
            Err(Error::NoPuzzleForDay { day: 0 })
        ));
    }

    #[test]
    fn end_to_end_crane() {
        let mut game = state("crane");

        let first = game.submit_guess("trace").unwrap();
        assert_eq!(first.verdict, Verdict::NiceTry);
        assert_eq!(first.letters, vec![Absent, Correct, Correct, Present, Correct]);
        assert!(!game.is_complete());

        let second = game.submit_guess("crane").unwrap();
        assert_eq!(second.verdict, Verdict::Correct);
        assert_eq!(second.letters, vec![Correct; 5]);
        assert!(game.is_complete());
        assert_eq!(game.outcome(), Some(Outcome::Won { guesses: 2 }));
    }

    #[test]
    fn invalid_guess_does_not_mutate() {
        let mut game = state("crane");
        let before = game.knowledge;

        let result = game.submit_guess("qwert").unwrap();

        assert_eq!(result.verdict, Verdict::Invalid);
        assert!(game.guesses().is_empty());
        assert_eq!(game.knowledge, before);
        assert!(!game.is_complete());
    }

    #[test]
    fn knowledge_tracks_best_verdict() {
        let mut game = state("crane");
        game.submit_guess("trace").unwrap();
        game.submit_guess("irate").unwrap();

        let k = game.knowledge();
        assert_eq!(k.get('c'), Present);
        assert_eq!(k.get('r'), Correct);
        assert_eq!(k.get('t'), Absent);
        assert_eq!(k.get('i'), Absent);
        assert_eq!(k.get('e'), Correct);
        assert_eq!(k.get('z'), LetterVerdict::Unknown);
    }

    #[test]
    fn six_misses_end_the_game() {
        let mut game = state("crane");
        for word in ["slate", "irate", "audio", "pious", "ghost", "nymph"] {
            assert!(game.submit_guess(word).unwrap().is_valid());
        }

        assert_eq!(game.guesses().len(), MAX_GUESSES);
        assert_eq!(game.outcome(), Some(Outcome::Lost));

        // Valid and invalid words alike are rejected now
        assert!(matches!(
            game.submit_guess("crane"),
            Err(Error::SessionComplete)
        ));
        assert!(matches!(
            game.submit_guess("zzzzz"),
            Err(Error::SessionComplete)
        ));
        assert_eq!(game.guesses().len(), MAX_GUESSES);
    }

    #[test]
    fn win_on_last_guess() {
        let mut game = state("crane");
        for word in ["slate", "irate", "audio", "pious", "ghost"] {
            game.submit_guess(word).unwrap();
        }
        game.submit_guess("crane").unwrap();

        assert_eq!(game.outcome(), Some(Outcome::Won { guesses: 6 }));
    }

    #[test]
    fn serialize_then_restore_same_day() {
        let mut game = state("crane");
        game.submit_guess("trace").unwrap();
        game.submit_guess("slate").unwrap();

        let restored = game.serialize().restore(game.day()).unwrap();
        assert_eq!(restored, game.guesses());
    }

    #[test]
    fn replay_rebuilds_state() {
        let mut game = state("crane");
        game.submit_guess("trace").unwrap();
        game.submit_guess("crane").unwrap();
        let history = game.serialize().restore(0).unwrap();

        let mut fresh = state("crane");
        assert_eq!(fresh.replay(&history), 2);
        assert_eq!(fresh.guesses(), game.guesses());
        assert_eq!(fresh.knowledge(), game.knowledge());
        assert_eq!(fresh.outcome(), game.outcome());
    }

    #[test]
    fn replay_skips_words_no_longer_valid() {
        let history = vec![
            GuessRecord::new("qwert", vec![Absent; 5]),
            GuessRecord::new("slate", vec![Absent; 5]),
        ];

        let mut game = state("crane");
        assert_eq!(game.replay(&history), 1);
        assert_eq!(game.guesses()[0].word(), "slate");
        // Regraded against the secret, not copied from the save
        assert_eq!(
            game.guesses()[0].letters(),
            &[Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn share_summary_win() {
        let mut game = state("crane");
        game.submit_guess("trace").unwrap();
        game.submit_guess("crane").unwrap();

        assert_eq!(
            game.share_summary(),
            "lesble.jade.fyi 0: 2/6\n🖤💚💚💛💚\n💚💚💚💚💚"
        );
    }

    #[test]
    fn share_summary_loss() {
        let mut game = state("crane");
        for word in ["slate", "irate", "audio", "pious", "ghost", "nymph"] {
            game.submit_guess(word).unwrap();
        }

        let summary = game.share_summary();
        assert!(summary.starts_with("lesble.jade.fyi 0: ❌/6\n"));
        assert_eq!(summary.lines().count(), 1 + MAX_GUESSES);
    }

    #[test]
    fn share_summary_without_guesses() {
        let game = state("crane");
        assert_eq!(game.share_summary(), "lesble.jade.fyi 0: ❌/6");
    }
}

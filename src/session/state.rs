//! Game session state machine
//!
//! A session moves from `InProgress` to one of the terminal outcomes `Won`
//! or `Lost`. Every transition returns a new [`GameState`]; the previous
//! value is never modified, so a rejected attempt leaves the caller holding
//! exactly the state it had before.

use crate::core::{
    Attempt, ConfigCandidate, ConfigError, Feedback, Secret, SessionConfig, validate,
};
use crate::provider::{ProviderError, SecretProvider};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// True for `Won` and `Lost`
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted attempt with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    attempt: Attempt,
    feedback: Feedback,
}

impl AttemptRecord {
    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Rejected attempt or out-of-order session call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptError {
    #[error("the game is over; start a new game to keep playing")]
    SessionTerminal,

    #[error("please fill in all characters (slot {} is empty)", .first_empty + 1)]
    IncompleteAttempt { first_empty: usize },

    #[error("attempt has {actual} characters, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("'{ch}' is not allowed in slot {}", .position + 1)]
    InvalidCharacter { position: usize, ch: char },

    #[error("the secret can only be revealed once the game is over")]
    NotTerminalYet,
}

impl AttemptError {
    /// True for errors that indicate a caller bug rather than player input
    ///
    /// A correctly built presentation layer never submits a row of the
    /// wrong length or asks for the secret mid-game.
    #[must_use]
    pub const fn is_programming_error(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. } | Self::NotTerminalYet)
    }
}

/// Failure to start a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Complete state of one play-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: SessionConfig,
    secret: Secret,
    records: Vec<AttemptRecord>,
    outcome: Outcome,
}

impl GameState {
    /// Validate raw options and start a session
    ///
    /// # Errors
    /// - `SessionError::Config` if the options fail validation
    /// - `SessionError::Provider` if the provider can't produce a valid secret
    ///
    /// # Examples
    /// ```
    /// use traffic_light::core::{Attempt, ConfigCandidate};
    /// use traffic_light::provider::FixedSecretProvider;
    /// use traffic_light::session::{GameState, Outcome};
    ///
    /// let mut provider = FixedSecretProvider::new("1234");
    /// let state = GameState::start(&ConfigCandidate::new("Number", "4", "5"), &mut provider)?;
    ///
    /// let state = state.submit_attempt(Attempt::parse("1234"))?;
    /// assert_eq!(state.outcome(), Outcome::Won);
    /// assert_eq!(state.reveal()?.text(), "1234");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn start<P>(candidate: &ConfigCandidate, provider: &mut P) -> Result<Self, SessionError>
    where
        P: SecretProvider + ?Sized,
    {
        let config = validate(candidate)?;
        Self::begin(config, provider)
    }

    /// Start a session from an already validated config
    ///
    /// # Errors
    /// Returns `SessionError::Provider` if the provider fails or hands back a
    /// secret that doesn't fit the config.
    #[instrument(skip(provider), fields(mode = %config.mode(), length = config.secret_length()))]
    pub fn begin<P>(config: SessionConfig, provider: &mut P) -> Result<Self, SessionError>
    where
        P: SecretProvider + ?Sized,
    {
        let mode = config.mode();
        let length = config.secret_length();
        let secret = provider.generate(mode, length)?;

        if !mode.is_valid_secret(&secret.text(), length) {
            warn!("Provider broke the secret contract");
            return Err(ProviderError::ContractViolation {
                mode,
                length,
                secret: secret.text(),
            }
            .into());
        }

        info!(max_attempts = config.max_attempts(), "Session started");

        Ok(Self {
            config,
            secret,
            records: Vec::with_capacity(config.max_attempts()),
            outcome: Outcome::InProgress,
        })
    }

    /// Submit an attempt and return the resulting state
    ///
    /// Checks run in order: terminal session, empty slot, wrong length,
    /// character outside the mode's alphabet. On success the attempt is
    /// classified and recorded; the session is won if the attempt spells the
    /// secret, lost if that was the last attempt, and otherwise continues.
    ///
    /// # Errors
    /// Returns `AttemptError` describing why the attempt was rejected. The
    /// current state is unaffected.
    #[instrument(skip(self), fields(index = self.records.len()))]
    pub fn submit_attempt(&self, attempt: Attempt) -> Result<Self, AttemptError> {
        if let Err(err) = self.check_attempt(&attempt) {
            debug!(%err, "Attempt rejected");
            return Err(err);
        }

        let feedback = Feedback::classify(&attempt, &self.secret);
        let won = attempt.spells(&self.secret.text());
        debug_assert_eq!(won, feedback.is_perfect());

        let mut next = self.clone();
        next.records.push(AttemptRecord { attempt, feedback });
        next.outcome = if won {
            Outcome::Won
        } else if next.records.len() == self.config.max_attempts() {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        if let Some(record) = next.records.last() {
            debug!(feedback = %record.feedback, outcome = ?next.outcome, "Attempt recorded");
        }

        Ok(next)
    }

    fn check_attempt(&self, attempt: &Attempt) -> Result<(), AttemptError> {
        if self.outcome.is_terminal() {
            return Err(AttemptError::SessionTerminal);
        }

        if let Some(first_empty) = attempt.first_empty() {
            return Err(AttemptError::IncompleteAttempt { first_empty });
        }

        let expected = self.config.secret_length();
        if attempt.len() != expected {
            return Err(AttemptError::LengthMismatch {
                expected,
                actual: attempt.len(),
            });
        }

        let mode = self.config.mode();
        if let Some((position, ch)) = attempt.filled().find(|&(_, ch)| !mode.accepts(ch)) {
            return Err(AttemptError::InvalidCharacter { position, ch });
        }

        Ok(())
    }

    /// The secret, once the session is over
    ///
    /// # Errors
    /// Returns `AttemptError::NotTerminalYet` while the session is in progress.
    pub fn reveal(&self) -> Result<&Secret, AttemptError> {
        if self.outcome.is_terminal() {
            Ok(&self.secret)
        } else {
            Err(AttemptError::NotTerminalYet)
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[AttemptRecord] {
        &self.records
    }

    /// Most recent record, if any attempt has been made
    #[must_use]
    pub fn last_record(&self) -> Option<&AttemptRecord> {
        self.records.last()
    }

    /// Index of the row the player is filling in; equals the records made
    #[inline]
    #[must_use]
    pub fn current_attempt_index(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts() - self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification::{Absent, Exact};
    use crate::core::{ConfigField, Mode};
    use crate::provider::FixedSecretProvider;
    use std::sync::{Arc, Mutex};

    fn session(mode: &str, secret: &str, attempts: usize) -> GameState {
        let candidate =
            ConfigCandidate::new(mode, secret.chars().count().to_string(), attempts.to_string());
        GameState::start(&candidate, &mut FixedSecretProvider::new(secret)).unwrap()
    }

    #[test]
    fn new_session_is_in_progress() {
        let state = session("Number", "1234", 5);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.current_attempt_index(), 0);
        assert_eq!(state.attempts_remaining(), 5);
        assert!(state.records().is_empty());
        assert!(state.last_record().is_none());
    }

    #[test]
    fn number_scenario_win_on_second_attempt() {
        let state = session("Number", "1234", 5);

        let state = state.submit_attempt(Attempt::parse("1235")).unwrap();
        assert_eq!(
            state.records()[0].feedback().verdicts(),
            &[Exact, Exact, Exact, Absent]
        );
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.current_attempt_index(), 1);

        let state = state.submit_attempt(Attempt::parse("1234")).unwrap();
        assert!(state.records()[1].feedback().is_perfect());
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.current_attempt_index(), 2);
    }

    #[test]
    fn five_misses_lose_and_reveal_secret() {
        let mut state = session("Word", "CRANE", 5);

        for guess in ["TRACE", "SLATE", "AROMA", "BRINE", "CRATE"] {
            assert!(state.reveal().is_err());
            state = state.submit_attempt(Attempt::parse(guess)).unwrap();
        }

        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.attempts_remaining(), 0);
        assert_eq!(state.reveal().unwrap().text(), "CRANE");
    }

    #[test]
    fn terminal_session_rejects_attempts() {
        let won = session("Number", "123", 5)
            .submit_attempt(Attempt::parse("123"))
            .unwrap();
        assert_eq!(
            won.submit_attempt(Attempt::parse("123")),
            Err(AttemptError::SessionTerminal)
        );

        let mut lost = session("Number", "123", 5);
        for _ in 0..5 {
            lost = lost.submit_attempt(Attempt::parse("456")).unwrap();
        }
        assert_eq!(lost.outcome(), Outcome::Lost);
        assert_eq!(
            lost.submit_attempt(Attempt::parse("123")),
            Err(AttemptError::SessionTerminal)
        );
    }

    #[test]
    fn win_on_last_attempt_is_won_not_lost() {
        let mut state = session("Number", "777", 5);
        for _ in 0..4 {
            state = state.submit_attempt(Attempt::parse("111")).unwrap();
        }
        let state = state.submit_attempt(Attempt::parse("777")).unwrap();
        assert_eq!(state.outcome(), Outcome::Won);
    }

    #[test]
    fn incomplete_attempt_leaves_state_unchanged() {
        let state = session("Number", "1234", 5)
            .submit_attempt(Attempt::parse("5678"))
            .unwrap();
        let before = state.clone();

        let err = state.submit_attempt(Attempt::parse("12_4")).unwrap_err();
        assert_eq!(err, AttemptError::IncompleteAttempt { first_empty: 2 });
        assert_eq!(err.to_string(), "please fill in all characters (slot 3 is empty)");
        assert_eq!(state, before);
        assert_eq!(state.current_attempt_index(), 1);
    }

    #[test]
    fn length_mismatch_is_programming_error() {
        let state = session("Number", "1234", 5);
        let err = state.submit_attempt(Attempt::parse("12345")).unwrap_err();
        assert_eq!(
            err,
            AttemptError::LengthMismatch {
                expected: 4,
                actual: 5
            }
        );
        assert!(err.is_programming_error());
        assert!(!AttemptError::IncompleteAttempt { first_empty: 0 }.is_programming_error());
    }

    #[test]
    fn incomplete_is_checked_before_length() {
        let state = session("Number", "1234", 5);
        assert!(matches!(
            state.submit_attempt(Attempt::parse("1_")),
            Err(AttemptError::IncompleteAttempt { first_empty: 1 })
        ));
    }

    #[test]
    fn characters_outside_alphabet_rejected() {
        let number = session("Number", "1234", 5);
        assert_eq!(
            number.submit_attempt(Attempt::parse("12a4")),
            Err(AttemptError::InvalidCharacter {
                position: 2,
                ch: 'A'
            })
        );

        let word = session("Word", "CRANE", 5);
        assert!(matches!(
            word.submit_attempt(Attempt::parse("CR4NE")),
            Err(AttemptError::InvalidCharacter { position: 2, .. })
        ));
    }

    #[test]
    fn lowercase_word_attempt_is_normalised() {
        let state = session("Word", "CRANE", 5)
            .submit_attempt(Attempt::parse("crane"))
            .unwrap();
        assert_eq!(state.outcome(), Outcome::Won);
    }

    #[test]
    fn reveal_in_progress_is_not_terminal_yet() {
        let state = session("Number", "1234", 5);
        assert_eq!(state.reveal(), Err(AttemptError::NotTerminalYet));
    }

    #[test]
    fn start_rejects_bad_config() {
        let err = GameState::start(
            &ConfigCandidate::new("Number", "9", "5"),
            &mut FixedSecretProvider::new("123456789"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SessionError::Config(ConfigError::OutOfRange {
                field: ConfigField::SecretLength,
                min: 3,
                max: 7
            })
        );
    }

    #[test]
    fn start_rejects_secret_breaking_contract() {
        for (mode, secret) in [("Number", "0123"), ("Number", "12345"), ("Word", "AB1D")] {
            let err = GameState::start(
                &ConfigCandidate::new(mode, "4", "5"),
                &mut FixedSecretProvider::new(secret),
            )
            .unwrap_err();
            assert!(matches!(
                err,
                SessionError::Provider(ProviderError::ContractViolation { .. })
            ));
        }
    }

    #[test]
    fn begin_with_typed_config() {
        let config = SessionConfig::new(Mode::Word, 3, 6).unwrap();
        let state = GameState::begin(config, &mut FixedSecretProvider::new("owl")).unwrap();
        assert_eq!(state.config(), &config);
        assert_eq!(state.attempts_remaining(), 6);
    }

    #[test]
    fn submit_does_not_modify_previous_state() {
        let initial = session("Number", "1234", 5);
        let next = initial.submit_attempt(Attempt::parse("4321")).unwrap();
        assert_eq!(initial.current_attempt_index(), 0);
        assert_eq!(next.current_attempt_index(), 1);
        assert_eq!(next.last_record().unwrap().attempt().to_string(), "4321");
    }

    #[test]
    fn debug_output_hides_secret() {
        let state = session("Word", "CRANE", 5);
        assert!(!format!("{state:?}").contains("CRANE"));
    }

    #[derive(Clone, Default)]
    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn player_mistakes_are_not_warnings() {
        let sink = LogSink::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let state = session("Number", "1234", 5);
            assert!(state.submit_attempt(Attempt::parse("1_34")).is_err());
            assert!(state.submit_attempt(Attempt::parse("12A4")).is_err());
            let state = state.submit_attempt(Attempt::parse("1235")).unwrap();
            assert_eq!(state.current_attempt_index(), 1);
        });

        assert!(sink.0.lock().unwrap().is_empty());
    }
}

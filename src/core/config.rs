//! Session configuration and option validation
//!
//! A session is configured by three values: the mode, the secret length and
//! the number of attempts allowed. The player enters them as text, so
//! validation starts from raw strings and produces a typed [`SessionConfig`].

use super::Mode;
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Allowed secret lengths
pub const SECRET_LENGTH_RANGE: RangeInclusive<usize> = 3..=7;

/// Allowed attempt limits
pub const MAX_ATTEMPTS_RANGE: RangeInclusive<usize> = 5..=10;

/// Secret length offered when a session is first configured
pub const DEFAULT_SECRET_LENGTH: usize = 5;

/// Attempt limit offered when a session is first configured
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// A numeric configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    SecretLength,
    MaxAttempts,
}

impl ConfigField {
    /// Range of values the field accepts
    #[must_use]
    pub const fn range(self) -> RangeInclusive<usize> {
        match self {
            Self::SecretLength => SECRET_LENGTH_RANGE,
            Self::MaxAttempts => MAX_ATTEMPTS_RANGE,
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecretLength => f.write_str("number of characters"),
            Self::MaxAttempts => f.write_str("number of attempts"),
        }
    }
}

/// Rejected session configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("please choose a game mode (Number or Word), got '{0}'")]
    InvalidMode(String),

    #[error("please choose a {field} between {min} and {max}")]
    OutOfRange {
        field: ConfigField,
        min: usize,
        max: usize,
    },
}

impl ConfigError {
    fn out_of_range(field: ConfigField) -> Self {
        let range = field.range();
        Self::OutOfRange {
            field,
            min: *range.start(),
            max: *range.end(),
        }
    }
}

/// Validated, immutable session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionConfig {
    mode: Mode,
    secret_length: usize,
    max_attempts: usize,
}

impl SessionConfig {
    /// Create a configuration from typed values
    ///
    /// # Errors
    /// Returns `ConfigError::OutOfRange` if the secret length or attempt
    /// limit falls outside its allowed range.
    ///
    /// # Examples
    /// ```
    /// use traffic_light::core::{Mode, SessionConfig};
    ///
    /// let config = SessionConfig::new(Mode::Word, 5, 6).unwrap();
    /// assert_eq!(config.secret_length(), 5);
    ///
    /// assert!(SessionConfig::new(Mode::Word, 8, 6).is_err());
    /// ```
    pub fn new(mode: Mode, secret_length: usize, max_attempts: usize) -> Result<Self, ConfigError> {
        check_range(secret_length, ConfigField::SecretLength)?;
        check_range(max_attempts, ConfigField::MaxAttempts)?;

        Ok(Self {
            mode,
            secret_length,
            max_attempts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn secret_length(&self) -> usize {
        self.secret_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            secret_length: DEFAULT_SECRET_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl fmt::Display for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} mode, {} characters, {} attempts",
            self.mode, self.secret_length, self.max_attempts
        )
    }
}

/// Raw configuration values as entered by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigCandidate {
    pub mode: String,
    pub secret_length: String,
    pub max_attempts: String,
}

impl ConfigCandidate {
    #[must_use]
    pub fn new(
        mode: impl Into<String>,
        secret_length: impl Into<String>,
        max_attempts: impl Into<String>,
    ) -> Self {
        Self {
            mode: mode.into(),
            secret_length: secret_length.into(),
            max_attempts: max_attempts.into(),
        }
    }
}

impl Default for ConfigCandidate {
    fn default() -> Self {
        Self::new(
            Mode::default().name(),
            DEFAULT_SECRET_LENGTH.to_string(),
            DEFAULT_MAX_ATTEMPTS.to_string(),
        )
    }
}

impl From<SessionConfig> for ConfigCandidate {
    fn from(config: SessionConfig) -> Self {
        Self::new(
            config.mode.name(),
            config.secret_length.to_string(),
            config.max_attempts.to_string(),
        )
    }
}

/// Validate raw configuration values
///
/// Fields are checked in order (mode, secret length, attempts) and the
/// first failure is returned. A numeric field that isn't an integer is
/// reported as out of range, same as a number outside the range.
///
/// # Errors
/// - `ConfigError::InvalidMode` if the mode is neither Number nor Word
/// - `ConfigError::OutOfRange` if a numeric field is not an integer in range
///
/// # Examples
/// ```
/// use traffic_light::core::{ConfigCandidate, ConfigError, Mode, validate};
///
/// let config = validate(&ConfigCandidate::new("Word", "5", "6")).unwrap();
/// assert_eq!(config.mode(), Mode::Word);
///
/// let err = validate(&ConfigCandidate::new("Word", "five", "6")).unwrap_err();
/// assert!(matches!(err, ConfigError::OutOfRange { min: 3, max: 7, .. }));
/// ```
pub fn validate(candidate: &ConfigCandidate) -> Result<SessionConfig, ConfigError> {
    let mode: Mode = candidate.mode.parse()?;
    let secret_length = parse_field(&candidate.secret_length, ConfigField::SecretLength)?;
    let max_attempts = parse_field(&candidate.max_attempts, ConfigField::MaxAttempts)?;

    SessionConfig::new(mode, secret_length, max_attempts)
}

fn parse_field(raw: &str, field: ConfigField) -> Result<usize, ConfigError> {
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::out_of_range(field))?;
    check_range(value, field)?;
    Ok(value)
}

fn check_range(value: usize, field: ConfigField) -> Result<(), ConfigError> {
    if field.range().contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_defaults() {
        let config = validate(&ConfigCandidate::default()).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.mode(), Mode::Number);
        assert_eq!(config.secret_length(), 5);
        assert_eq!(config.max_attempts(), 5);
    }

    #[test]
    fn validate_accepts_range_bounds() {
        for (len, attempts) in [(3, 5), (7, 10), (3, 10), (7, 5)] {
            let candidate = ConfigCandidate::new("Word", len.to_string(), attempts.to_string());
            let config = validate(&candidate).unwrap();
            assert_eq!(config.secret_length(), len);
            assert_eq!(config.max_attempts(), attempts);
        }
    }

    #[test]
    fn validate_rejects_unknown_mode() {
        let err = validate(&ConfigCandidate::new("Phrase", "5", "5")).unwrap_err();
        assert_eq!(err, ConfigError::InvalidMode("Phrase".to_string()));
    }

    #[test]
    fn validate_rejects_length_out_of_range() {
        for len in ["2", "8", "0", "-1"] {
            let err = validate(&ConfigCandidate::new("Number", len, "5")).unwrap_err();
            assert_eq!(
                err,
                ConfigError::OutOfRange {
                    field: ConfigField::SecretLength,
                    min: 3,
                    max: 7
                }
            );
        }
    }

    #[test]
    fn validate_rejects_attempts_out_of_range() {
        for attempts in ["4", "11", "ten", ""] {
            let err = validate(&ConfigCandidate::new("Number", "5", attempts)).unwrap_err();
            assert_eq!(
                err,
                ConfigError::OutOfRange {
                    field: ConfigField::MaxAttempts,
                    min: 5,
                    max: 10
                }
            );
        }
    }

    #[test]
    fn validate_reports_mode_before_numbers() {
        let err = validate(&ConfigCandidate::new("?", "99", "99")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMode(_)));
    }

    #[test]
    fn validate_does_not_mutate_candidate() {
        let candidate = ConfigCandidate::new(" word ", " 6 ", "7");
        let before = candidate.clone();
        let config = validate(&candidate).unwrap();
        assert_eq!(candidate, before);
        assert_eq!(config.secret_length(), 6);
    }

    #[test]
    fn candidate_from_config_validates_back() {
        let config = SessionConfig::new(Mode::Word, 4, 9).unwrap();
        let candidate = ConfigCandidate::from(config);
        assert_eq!(validate(&candidate).unwrap(), config);
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = validate(&ConfigCandidate::new("Word", "9", "5")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "please choose a number of characters between 3 and 7"
        );
    }
}

//! Game modes and their alphabets
//!
//! The mode decides which characters a secret and an attempt may contain.

use super::config::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Place-value column headings for Number mode, most significant first
///
/// Millions down to ones. A secret of length `n` uses the rightmost `n` labels.
const PLACE_VALUES: [&str; 7] = ["M", "HTh", "TTh", "Th", "H", "T", "O"];

/// What kind of secret the player is guessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Digits `0`-`9`, never starting with `0`
    #[default]
    Number,
    /// Uppercase letters `A`-`Z`
    Word,
}

impl Mode {
    /// Both modes, in menu order
    pub const ALL: [Self; 2] = [Self::Number, Self::Word];

    /// Display name of the mode
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Word => "Word",
        }
    }

    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Number => Self::Word,
            Self::Word => Self::Number,
        }
    }

    /// Check whether a typed character belongs to this mode's alphabet
    ///
    /// Letters are accepted in either case; see [`Mode::normalize`].
    ///
    /// # Examples
    /// ```
    /// use traffic_light::core::Mode;
    ///
    /// assert!(Mode::Number.accepts('7'));
    /// assert!(!Mode::Number.accepts('x'));
    /// assert!(Mode::Word.accepts('x'));
    /// ```
    #[must_use]
    pub const fn accepts(self, ch: char) -> bool {
        match self {
            Self::Number => ch.is_ascii_digit(),
            Self::Word => ch.is_ascii_alphabetic(),
        }
    }

    /// Normalize a typed character to its canonical form (uppercase)
    #[inline]
    #[must_use]
    pub const fn normalize(self, ch: char) -> char {
        ch.to_ascii_uppercase()
    }

    /// Check a generated secret against this mode's contract
    ///
    /// Number secrets are `length` digits with a non-zero first digit.
    /// Word secrets are `length` uppercase ASCII letters.
    #[must_use]
    pub fn is_valid_secret(self, text: &str, length: usize) -> bool {
        if text.chars().count() != length {
            return false;
        }

        match self {
            Self::Number => {
                text.chars().all(|c| c.is_ascii_digit()) && !text.starts_with('0')
            }
            Self::Word => text.chars().all(|c| c.is_ascii_uppercase()),
        }
    }

    /// Column headings for a row of `length` slots
    ///
    /// Number mode labels each column with its place value (`O` for ones,
    /// `T` for tens, and so on). Word mode has no headings.
    ///
    /// # Examples
    /// ```
    /// use traffic_light::core::Mode;
    ///
    /// assert_eq!(Mode::Number.place_labels(3), &["H", "T", "O"]);
    /// assert!(Mode::Word.place_labels(3).is_empty());
    /// ```
    #[must_use]
    pub fn place_labels(self, length: usize) -> &'static [&'static str] {
        match self {
            Self::Number => &PLACE_VALUES[PLACE_VALUES.len().saturating_sub(length)..],
            Self::Word => &[],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "number" => Ok(Self::Number),
            "word" => Ok(Self::Word),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parse_case_insensitive() {
        assert_eq!("Number".parse::<Mode>().unwrap(), Mode::Number);
        assert_eq!("WORD".parse::<Mode>().unwrap(), Mode::Word);
        assert_eq!(" word ".parse::<Mode>().unwrap(), Mode::Word);
    }

    #[test]
    fn mode_parse_unknown_is_invalid_mode() {
        assert_eq!(
            "Phrase".parse::<Mode>(),
            Err(ConfigError::InvalidMode("Phrase".to_string()))
        );
        assert!(matches!(
            "".parse::<Mode>(),
            Err(ConfigError::InvalidMode(_))
        ));
    }

    #[test]
    fn mode_display_round_trips() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn number_secret_rejects_leading_zero() {
        assert!(Mode::Number.is_valid_secret("1034", 4));
        assert!(!Mode::Number.is_valid_secret("0134", 4));
        assert!(!Mode::Number.is_valid_secret("12a4", 4));
        assert!(!Mode::Number.is_valid_secret("123", 4));
    }

    #[test]
    fn word_secret_requires_uppercase_letters() {
        assert!(Mode::Word.is_valid_secret("CRANE", 5));
        assert!(!Mode::Word.is_valid_secret("crane", 5));
        assert!(!Mode::Word.is_valid_secret("CRAN3", 5));
        assert!(!Mode::Word.is_valid_secret("CRANES", 5));
    }

    #[test]
    fn place_labels_take_rightmost_columns() {
        assert_eq!(Mode::Number.place_labels(7), &PLACE_VALUES);
        assert_eq!(Mode::Number.place_labels(4), &["Th", "H", "T", "O"]);
        assert_eq!(Mode::Number.place_labels(9), &PLACE_VALUES);
    }

    #[test]
    fn toggled_flips_mode() {
        assert_eq!(Mode::Number.toggled(), Mode::Word);
        assert_eq!(Mode::Word.toggled(), Mode::Number);
    }
}

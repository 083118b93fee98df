//! The hidden target string

use std::fmt;

/// The string the player is trying to guess
///
/// Generated once per session and never changed. `Debug` output hides the
/// characters so a logged game state doesn't give the answer away.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Secret {
    chars: Vec<char>,
}

impl Secret {
    /// Create a secret, upper-casing any letters
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().map(|c| c.to_ascii_uppercase()).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at a position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the secret contains a character anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// The secret as a string
    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(<{} hidden>)", self.chars.len())
    }
}

//! Per-character feedback for a submitted attempt
//!
//! Each slot of an attempt gets one of three verdicts, shown to the player
//! as a traffic light:
//! - Green: the character is in the right position (`Exact`)
//! - Amber: the character is in the secret, somewhere else (`Present`)
//! - Red: the character is not in the secret (`Absent`)

use super::{Attempt, Secret};
use std::fmt;

/// Verdict for a single slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Same character as the secret at this position
    Exact,
    /// Character occurs in the secret at some other position
    Present,
    /// Character does not occur in the secret
    Absent,
}

impl Classification {
    /// Single-letter code: `G`, `Y` or `R`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => 'R',
        }
    }

    /// Traffic-light emoji for the verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟢',
            Self::Present => '🟡',
            Self::Absent => '🔴',
        }
    }
}

/// Ordered verdicts for one attempt, one per secret position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Classification>);

impl Feedback {
    /// Classify an attempt against the secret
    ///
    /// For each position: `Exact` if the characters match, otherwise
    /// `Present` if the attempted character occurs anywhere in the secret,
    /// otherwise `Absent`.
    ///
    /// Presence is a membership test. A character that occurs once in the
    /// secret marks every misplaced copy of it in the attempt as `Present`.
    /// An empty slot is `Absent`. The result always has one verdict per
    /// secret position.
    ///
    /// # Examples
    /// ```
    /// use traffic_light::core::{Attempt, Classification::*, Feedback, Secret};
    ///
    /// let secret = Secret::new("CRANE");
    ///
    /// let feedback = Feedback::classify(&Attempt::parse("TRACE"), &secret);
    /// assert_eq!(feedback.verdicts(), &[Absent, Exact, Exact, Present, Exact]);
    ///
    /// // Both A's are amber even though the secret has only one
    /// let feedback = Feedback::classify(&Attempt::parse("AROMA"), &secret);
    /// assert_eq!(feedback.verdicts(), &[Present, Exact, Absent, Absent, Present]);
    /// ```
    #[must_use]
    pub fn classify(attempt: &Attempt, secret: &Secret) -> Self {
        let verdicts = secret
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &target)| match attempt.slot(i) {
                Some(ch) if ch == target => Classification::Exact,
                Some(ch) if secret.contains(ch) => Classification::Present,
                _ => Classification::Absent,
            })
            .collect();

        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Classification] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every verdict is `Exact`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&c| c == Classification::Exact)
    }

    /// Render as a row of traffic-light emoji
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c.code())?;
        }
        Ok(())
    }
}

//! Player attempts
//!
//! An attempt is a row of character slots. Slots may be empty while the
//! player is still typing; only a fully filled row can be submitted.

use std::fmt;

/// Placeholder shown for an empty slot
pub const EMPTY_SLOT: char = '_';

/// One row of guessed characters, possibly with empty slots
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attempt {
    slots: Vec<Option<char>>,
}

impl Attempt {
    /// Build an attempt from per-slot fill state
    ///
    /// `None` marks an empty slot. Characters are upper-cased.
    #[must_use]
    pub fn from_slots(slots: &[Option<char>]) -> Self {
        Self {
            slots: slots
                .iter()
                .map(|slot| slot.map(|c| c.to_ascii_uppercase()))
                .collect(),
        }
    }

    /// Build an attempt from typed text
    ///
    /// A space or `_` is an empty slot.
    ///
    /// # Examples
    /// ```
    /// use traffic_light::core::Attempt;
    ///
    /// let attempt = Attempt::parse("tr_ce");
    /// assert_eq!(attempt.len(), 5);
    /// assert!(!attempt.is_complete());
    /// assert_eq!(attempt.first_empty(), Some(2));
    /// assert_eq!(attempt.to_string(), "TR_CE");
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            slots: text
                .chars()
                .map(|c| match c {
                    ' ' | EMPTY_SLOT => None,
                    other => Some(other.to_ascii_uppercase()),
                })
                .collect(),
        }
    }

    /// Number of slots in the row
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Character in a slot, `None` if the slot is empty or out of range
    #[inline]
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<char> {
        self.slots.get(position).copied().flatten()
    }

    /// True when every slot holds a character
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Index of the first empty slot
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Filled characters with their positions
    pub fn filled(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|c| (i, c)))
    }

    /// Check whether the row spells exactly `text`
    #[must_use]
    pub fn spells(&self, text: &str) -> bool {
        self.is_complete()
            && self.slots.len() == text.chars().count()
            && self.slots.iter().zip(text.chars()).all(|(slot, c)| *slot == Some(c))
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(EMPTY_SLOT))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uppercases_letters() {
        let attempt = Attempt::parse("crane");
        assert_eq!(attempt.to_string(), "CRANE");
        assert!(attempt.is_complete());
    }

    #[test]
    fn parse_marks_blanks_as_empty() {
        let attempt = Attempt::parse("1 3_");
        assert_eq!(attempt.slots(), &[Some('1'), None, Some('3'), None]);
        assert_eq!(attempt.first_empty(), Some(1));
    }

    #[test]
    fn from_slots_matches_parse() {
        let from_slots = Attempt::from_slots(&[Some('t'), None, Some('a')]);
        assert_eq!(from_slots, Attempt::parse("t a"));
    }

    #[test]
    fn slot_out_of_range_is_none() {
        let attempt = Attempt::parse("123");
        assert_eq!(attempt.slot(0), Some('1'));
        assert_eq!(attempt.slot(3), None);
    }

    #[test]
    fn filled_skips_empty_slots() {
        let attempt = Attempt::parse("a_c");
        let filled: Vec<_> = attempt.filled().collect();
        assert_eq!(filled, vec![(0, 'A'), (2, 'C')]);
    }

    #[test]
    fn spells_requires_full_match() {
        let attempt = Attempt::parse("1234");
        assert!(attempt.spells("1234"));
        assert!(!attempt.spells("1235"));
        assert!(!attempt.spells("12345"));
        assert!(!Attempt::parse("12_4").spells("12_4"));
    }

    #[test]
    fn empty_attempt() {
        let attempt = Attempt::parse("");
        assert!(attempt.is_empty());
        assert!(attempt.is_complete());
        assert_eq!(attempt.first_empty(), None);
    }
}

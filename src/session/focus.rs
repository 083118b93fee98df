//! Input focus sequencing
//!
//! The board is a grid of `max_attempts` rows by `secret_length` slots.
//! While a row is being typed the focus moves forward after each character
//! and back on delete, never leaving the row. Nothing here touches the game
//! state; the presentation layer combines it with the session's current
//! attempt index.

use crate::core::{Attempt, Mode};

/// One input cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub row: usize,
    pub column: usize,
}

impl Slot {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Moves focus between the slots of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusSequencer {
    secret_length: usize,
}

impl FocusSequencer {
    #[must_use]
    pub const fn new(secret_length: usize) -> Self {
        Self { secret_length }
    }

    /// First slot of a row
    #[must_use]
    pub const fn first(&self, row: usize) -> Slot {
        Slot::new(row, 0)
    }

    /// Slot after `current`, or `None` at the end of the row
    ///
    /// # Examples
    /// ```
    /// use traffic_light::session::{FocusSequencer, Slot};
    ///
    /// let focus = FocusSequencer::new(3);
    /// assert_eq!(focus.advance(Slot::new(1, 0)), Some(Slot::new(1, 1)));
    /// assert_eq!(focus.advance(Slot::new(1, 2)), None);
    /// ```
    #[must_use]
    pub const fn advance(&self, current: Slot) -> Option<Slot> {
        if current.column + 1 < self.secret_length {
            Some(Slot::new(current.row, current.column + 1))
        } else {
            None
        }
    }

    /// Slot before `current`, or `None` at the start of the row
    #[must_use]
    pub const fn retreat(&self, current: Slot) -> Option<Slot> {
        if current.column > 0 {
            Some(Slot::new(current.row, current.column - 1))
        } else {
            None
        }
    }
}

/// Character-by-character editor for the active row
///
/// Typing fills the focused slot and moves focus forward. Backspace clears
/// the focused slot, or steps back and clears the previous one when the
/// focused slot is already empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEditor {
    mode: Mode,
    sequencer: FocusSequencer,
    cells: Vec<Option<char>>,
    focus: Slot,
}

impl RowEditor {
    #[must_use]
    pub fn new(mode: Mode, secret_length: usize, row: usize) -> Self {
        let sequencer = FocusSequencer::new(secret_length);
        Self {
            mode,
            sequencer,
            cells: vec![None; secret_length],
            focus: sequencer.first(row),
        }
    }

    #[inline]
    #[must_use]
    pub const fn focus(&self) -> Slot {
        self.focus
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Type a character into the focused slot
    ///
    /// Returns `false` and changes nothing if the character isn't in the
    /// mode's alphabet.
    pub fn type_char(&mut self, ch: char) -> bool {
        if !self.mode.accepts(ch) {
            return false;
        }

        self.cells[self.focus.column] = Some(self.mode.normalize(ch));
        if let Some(next) = self.sequencer.advance(self.focus) {
            self.focus = next;
        }
        true
    }

    /// Delete backwards from the focused slot
    pub fn backspace(&mut self) {
        if self.cells[self.focus.column].is_none()
            && let Some(previous) = self.sequencer.retreat(self.focus)
        {
            self.focus = previous;
        }
        self.cells[self.focus.column] = None;
    }

    pub fn move_left(&mut self) {
        if let Some(previous) = self.sequencer.retreat(self.focus) {
            self.focus = previous;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.sequencer.advance(self.focus) {
            self.focus = next;
        }
    }

    /// Current contents as an attempt
    #[must_use]
    pub fn attempt(&self) -> Attempt {
        Attempt::from_slots(&self.cells)
    }

    /// Clear the editor and move it to a new row
    pub fn start_row(&mut self, row: usize) {
        self.cells.fill(None);
        self.focus = self.sequencer.first(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stops_at_row_end() {
        let focus = FocusSequencer::new(4);
        let mut slot = focus.first(2);
        let mut visited = vec![slot];
        while let Some(next) = focus.advance(slot) {
            visited.push(next);
            slot = next;
        }
        assert_eq!(visited.len(), 4);
        assert!(visited.iter().all(|s| s.row == 2));
        assert_eq!(slot, Slot::new(2, 3));
    }

    #[test]
    fn retreat_stops_at_row_start() {
        let focus = FocusSequencer::new(4);
        assert_eq!(focus.retreat(Slot::new(0, 2)), Some(Slot::new(0, 1)));
        assert_eq!(focus.retreat(Slot::new(3, 0)), None);
    }

    #[test]
    fn typing_auto_advances_and_stays_on_last_slot() {
        let mut editor = RowEditor::new(Mode::Number, 3, 0);
        for ch in ['1', '2', '3', '4'] {
            assert!(editor.type_char(ch));
        }
        // The fourth digit overwrote the last slot
        assert_eq!(editor.cells(), &[Some('1'), Some('2'), Some('4')]);
        assert_eq!(editor.focus(), Slot::new(0, 2));
        assert_eq!(editor.attempt().to_string(), "124");
    }

    #[test]
    fn typing_rejects_characters_outside_mode() {
        let mut editor = RowEditor::new(Mode::Number, 3, 0);
        assert!(!editor.type_char('a'));
        assert_eq!(editor.focus(), Slot::new(0, 0));

        let mut editor = RowEditor::new(Mode::Word, 3, 0);
        assert!(!editor.type_char('1'));
        assert!(editor.type_char('q'));
        assert_eq!(editor.cells()[0], Some('Q'));
    }

    #[test]
    fn backspace_clears_then_retreats() {
        let mut editor = RowEditor::new(Mode::Word, 3, 1);
        editor.type_char('c');
        editor.type_char('a');
        assert_eq!(editor.focus(), Slot::new(1, 2));

        // Focused slot is empty: step back and clear 'A'
        editor.backspace();
        assert_eq!(editor.focus(), Slot::new(1, 1));
        assert_eq!(editor.cells(), &[Some('C'), None, None]);

        editor.backspace();
        editor.backspace();
        assert_eq!(editor.focus(), Slot::new(1, 0));
        assert!(editor.cells().iter().all(Option::is_none));
    }

    #[test]
    fn backspace_on_filled_last_slot_clears_in_place() {
        let mut editor = RowEditor::new(Mode::Word, 3, 0);
        for ch in "cat".chars() {
            editor.type_char(ch);
        }
        editor.backspace();
        assert_eq!(editor.focus(), Slot::new(0, 2));
        assert_eq!(editor.attempt().to_string(), "CA_");
    }

    #[test]
    fn start_row_resets() {
        let mut editor = RowEditor::new(Mode::Word, 3, 0);
        editor.type_char('c');
        editor.start_row(1);
        assert_eq!(editor.focus(), Slot::new(1, 0));
        assert!(!editor.attempt().is_complete());
    }

    #[test]
    fn arrow_moves_stay_in_row() {
        let mut editor = RowEditor::new(Mode::Word, 3, 0);
        editor.move_left();
        assert_eq!(editor.focus(), Slot::new(0, 0));
        editor.move_right();
        editor.move_right();
        editor.move_right();
        assert_eq!(editor.focus(), Slot::new(0, 2));
    }
}

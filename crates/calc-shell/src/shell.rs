//! The calculator session: display editing wired to the evaluator engine.

use crate::display::DisplayBuffer;
use crate::error::ShellError;
use calc_engine::CalcEngine;

/// A headless calculator session.
///
/// Owns the engine and the display state. Operator and constant entry
/// complete an in-progress number before touching the engine. When the
/// engine yields no value the display shows `0` and the history line
/// stays blank.
pub struct CalcShell {
    engine: CalcEngine,
    display: DisplayBuffer,
    history: String,
}

impl CalcShell {
    pub fn new() -> Self {
        CalcShell {
            engine: CalcEngine::new(),
            display: DisplayBuffer::new(),
            history: " ".to_string(),
        }
    }

    /// The current display line.
    pub fn display_text(&self) -> &str {
        self.display.text()
    }

    /// The current history line.
    pub fn history(&self) -> &str {
        &self.history
    }

    /// The underlying engine.
    pub fn engine(&self) -> &CalcEngine {
        &self.engine
    }

    /// Feeds one digit (or the decimal point) into the display.
    pub fn digit(&mut self, digit: char) {
        self.display.append_digit(digit);
    }

    /// Deletes the most recently typed character.
    pub fn backspace(&mut self) {
        self.display.backspace();
    }

    /// Pushes the display value onto the engine stack.
    pub fn enter(&mut self) -> Result<(), ShellError> {
        let value = self.display.value()?;
        let result = self.engine.push_operand(value).unwrap_or(0.0);
        self.display.set_value(result);
        self.refresh_history();
        Ok(())
    }

    /// Applies an operator, entering the in-progress number first.
    pub fn operate(&mut self, symbol: &str) -> Result<(), ShellError> {
        if self.display.is_typing() {
            self.enter()?;
        }
        let result = self.engine.perform_operation(symbol).unwrap_or(0.0);
        self.display.set_value(result);
        self.refresh_history();
        Ok(())
    }

    /// Pushes a named constant, entering the in-progress number first.
    pub fn constant(&mut self, symbol: &str) -> Result<(), ShellError> {
        if self.display.is_typing() {
            self.enter()?;
        }
        let result = self.engine.push_constant(symbol).unwrap_or(0.0);
        self.display.set_value(result);
        self.refresh_history();
        Ok(())
    }

    /// Clears the engine and resets both display lines.
    pub fn clear(&mut self) {
        self.engine.clear();
        self.display = DisplayBuffer::new();
        self.history = " ".to_string();
    }

    fn refresh_history(&mut self) {
        self.history = self
            .engine
            .render_history()
            .unwrap_or_else(|| " ".to_string());
    }
}

impl Default for CalcShell {
    fn default() -> Self {
        Self::new()
    }
}

//! The display buffer: digit entry and the current display value.

use crate::error::ShellError;

/// Digit-entry state for the display line.
///
/// The buffer starts at `"0"`. The first appended digit replaces it and
/// starts a typing run; further digits append. A second decimal point in
/// the same run is ignored.
#[derive(Debug, Clone)]
pub struct DisplayBuffer {
    text: String,
    typing: bool,
    entered_decimal: bool,
}

impl DisplayBuffer {
    pub fn new() -> Self {
        DisplayBuffer {
            text: "0".to_string(),
            typing: false,
            entered_decimal: false,
        }
    }

    /// The current display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True while the user is mid-number.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Appends a digit (or the decimal point) to the display.
    pub fn append_digit(&mut self, digit: char) {
        if self.typing {
            if !(digit == '.' && self.entered_decimal) {
                self.text.push(digit);
            }
        } else {
            self.text.clear();
            self.text.push(digit);
            self.typing = true;
        }
        if digit == '.' {
            self.entered_decimal = true;
        }
    }

    /// Removes the most recently typed character.
    ///
    /// Outside a typing run this is a no-op; deleting the final character
    /// resets the display to `"0"`.
    pub fn backspace(&mut self) {
        if !self.typing || self.text.is_empty() {
            return;
        }
        self.text.pop();
        if self.text.is_empty() {
            self.reset();
        }
    }

    /// Parses the display text as a number.
    pub fn value(&self) -> Result<f64, ShellError> {
        self.text
            .parse()
            .map_err(|_| ShellError::NotANumber(self.text.clone()))
    }

    /// Replaces the display with a computed value and ends the typing run.
    pub fn set_value(&mut self, value: f64) {
        self.text = value.to_string();
        self.typing = false;
        self.entered_decimal = false;
    }

    fn reset(&mut self) {
        self.text = "0".to_string();
        self.typing = false;
        self.entered_decimal = false;
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

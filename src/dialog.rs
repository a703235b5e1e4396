//! Point entry dialog.
//!
//! The dialog only keeps the text of its two fields. It never owns the chart:
//! [`PointDialog::confirm`] borrows the controller's chart for the duration
//! of the call.

use crate::chart::ChartState;

/// Field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// The x value.
    #[default]
    X,
    /// The y value.
    Y,
}

impl Field {
    /// The other field.
    pub fn other(self) -> Self {
        match self {
            Field::X => Field::Y,
            Field::Y => Field::X,
        }
    }
}

/// Result of closing the dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogOutcome {
    /// The point was appended.
    Appended {
        /// Parsed x value.
        x: f64,
        /// Parsed y value.
        y: f64,
    },
    /// Confirmed, but there was no series to append to.
    Skipped,
    /// Cancelled, nothing changed.
    Cancelled,
}

/// Parse a field the lenient way: surrounding whitespace is ignored and
/// anything that is not a number reads as `0.0`.
pub fn parse_number(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("'{}' is not a number, using 0", text);
            0.0
        },
    }
}

/// State of the open dialog.
#[derive(Debug, Clone, Default)]
pub struct PointDialog {
    x_text: String,
    y_text: String,
    focus: Field,
}

impl PointDialog {
    /// Create an empty dialog with focus on x.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of a field.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::X => &self.x_text,
            Field::Y => &self.y_text,
        }
    }

    /// Replace the text of a field.
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        *self.text_mut(field) = text.into();
    }

    fn text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::X => &mut self.x_text,
            Field::Y => &mut self.y_text,
        }
    }

    /// Field with focus.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Move focus to a field.
    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    /// Switch focus to the other field.
    pub fn next_field(&mut self) {
        self.focus = self.focus.other();
    }

    /// Type a character into the focused field.
    pub fn input(&mut self, c: char) {
        if !c.is_control() {
            let field = self.focus;
            self.text_mut(field).push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        let field = self.focus;
        self.text_mut(field).pop();
    }

    /// Parsed `(x, y)` pair.
    pub fn values(&self) -> (f64, f64) {
        (parse_number(&self.x_text), parse_number(&self.y_text))
    }

    /// OK: append the entered point to the series of `chart`, if any.
    pub fn confirm(self, chart: &mut ChartState) -> DialogOutcome {
        let (x, y) = self.values();
        if chart.append_point(x, y) {
            DialogOutcome::Appended { x, y }
        } else {
            DialogOutcome::Skipped
        }
    }

    /// Cancel: drop the input.
    pub fn cancel(self) -> DialogOutcome {
        DialogOutcome::Cancelled
    }
}

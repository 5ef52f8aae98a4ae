//! Ticket text builder
//!
//! Provides a fluent API for building fixed-width plain-text tickets.

use crate::text::text_width;

/// Fixed-width ticket builder
///
/// Accumulates a UTF-8 string; every layout helper works against the
/// configured column width.
pub struct TicketBuilder {
    buf: String,
    width: usize,
}

impl TicketBuilder {
    /// Create a new builder with the specified ticket width in characters
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    /// Get the configured ticket width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write raw text
    pub fn write(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write text followed by newline
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    // === Separators ===

    /// Write a line of '=' characters
    pub fn eq_sep(&mut self) -> &mut Self {
        self.write_line(&"=".repeat(self.width))
    }

    /// Write a line of '-' characters
    pub fn dash_sep(&mut self) -> &mut Self {
        self.write_line(&"-".repeat(self.width))
    }

    // === Layout Helpers ===

    /// Write text centered within the ticket width
    ///
    /// Text wider than the ticket is written unchanged.
    pub fn center(&mut self, s: &str) -> &mut Self {
        let w = text_width(s);
        if w >= self.width {
            return self.write_line(s);
        }
        let left = (self.width - w) / 2;
        self.write(&" ".repeat(left));
        self.write_line(s)
    }

    /// Write left and right text on the same line
    ///
    /// Left text is left-aligned, right text is right-aligned, with spaces
    /// filling the gap. If both sides together exceed the width they are
    /// joined with a single space instead.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = text_width(left);
        let rw = text_width(right);

        if lw + rw >= self.width {
            self.write_line(&format!("{} {}", left, right));
        } else {
            let spaces = self.width - lw - rw;
            self.write(left);
            self.write(&" ".repeat(spaces));
            self.write_line(right);
        }
        self
    }

    /// Write a key-value pair (alias for line_lr)
    pub fn pair(&mut self, key: &str, value: &str) -> &mut Self {
        self.line_lr(key, value)
    }

    // === Build ===

    /// Finalize and return the accumulated string
    pub fn finalize(self) -> String {
        self.buf
    }

    /// Get the current buffer as a string reference
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl Default for TicketBuilder {
    fn default() -> Self {
        Self::new(48)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_appends_newline() {
        let mut b = TicketBuilder::new(20);
        b.write_line("hello");
        assert_eq!(b.as_str(), "hello\n");
    }

    #[test]
    fn test_separators_match_width() {
        let mut b = TicketBuilder::new(10);
        b.eq_sep().dash_sep();
        assert_eq!(b.as_str(), "==========\n----------\n");
    }

    #[test]
    fn test_center_pads_left_half() {
        let mut b = TicketBuilder::new(11);
        b.center("abc");
        assert_eq!(b.as_str(), "    abc\n");
    }

    #[test]
    fn test_center_leaves_wide_text_unchanged() {
        let mut b = TicketBuilder::new(4);
        b.center("abcdef");
        assert_eq!(b.as_str(), "abcdef\n");
    }

    #[test]
    fn test_line_lr_fills_gap() {
        let mut b = TicketBuilder::new(20);
        b.line_lr("TOTAL", "Rp117000.00");
        assert_eq!(b.as_str(), "TOTAL    Rp117000.00\n");
    }

    #[test]
    fn test_line_lr_overflow_joins_with_space() {
        let mut b = TicketBuilder::new(10);
        b.line_lr("Service Fee", "Rp20000.00");
        assert_eq!(b.as_str(), "Service Fee Rp20000.00\n");
    }

    #[test]
    fn test_finalize_returns_buffer() {
        let mut b = TicketBuilder::new(10);
        b.write("x");
        assert_eq!(b.finalize(), "x");
    }
}

//! Renders calculator frames as plain text lines.

use std::io::{self, Write};

use calc_core::{DisplaySink, Operator};
use tracing::error;

/// Lays out one frame: the history line, then the active operator marker
/// and the current value, both right-aligned to `width` columns.
///
/// # Examples
///
/// ```
/// use calc_core::Operator;
/// use calc_term::terminal::format_frame;
///
/// let frame = format_frame("8", "5 + 3 = 8", Some(Operator::Add), 12);
///
/// assert_eq!(frame, "   5 + 3 = 8\n+          8\n");
/// ```
pub fn format_frame(
    current: &str,
    history: &str,
    active: Option<Operator>,
    width: usize,
) -> String {
    let marker = active.map_or(' ', |op| op.symbol());
    let value_width = width.saturating_sub(1);
    format!("{history:>width$}\n{marker}{current:>value_width$}\n")
}

/// A [`DisplaySink`] writing frames to any [`Write`] target.
///
/// The sink interface cannot fail, so the first write error is kept and
/// later frames are dropped; [`TerminalDisplay::finish`] reports it.
#[derive(Debug)]
pub struct TerminalDisplay<W: Write> {
    out: W,
    width: usize,
    active: Option<Operator>,
    write_error: Option<io::Error>,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(
        out: W,
        width: usize,
    ) -> Self {
        Self {
            out,
            width,
            active: None,
            write_error: None,
        }
    }

    pub fn active_operator(&self) -> Option<Operator> {
        self.active
    }

    /// Flushes the output and returns it, or the first write error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.write_error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_frame(
        &mut self,
        frame: &str,
    ) -> io::Result<()> {
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn render(
        &mut self,
        current: &str,
        history: &str,
    ) {
        if self.write_error.is_some() {
            return;
        }
        let frame = format_frame(current, history, self.active, self.width);
        if let Err(err) = self.write_frame(&frame) {
            error!(error = %err, "failed to write frame");
            self.write_error = Some(err);
        }
    }

    fn set_active_operator(
        &mut self,
        operator: Option<Operator>,
    ) {
        self.active = operator;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Accepts a fixed number of bytes, then fails every write.
    #[derive(Debug)]
    struct FailingWriter {
        budget: usize,
    }

    impl Write for FailingWriter {
        fn write(
            &mut self,
            buf: &[u8],
        ) -> io::Result<usize> {
            if buf.len() > self.budget {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.budget -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output(display: TerminalDisplay<Vec<u8>>) -> String {
        String::from_utf8(display.finish().expect("no write error")).expect("utf-8 output")
    }

    #[test]
    fn frame_without_operator_leaves_marker_blank() {
        assert_eq!(format_frame("0", "", None, 12), "            \n           0\n");
    }

    #[test]
    fn frame_shows_operator_symbol() {
        assert_eq!(
            format_frame("12", "", Some(Operator::Divide), 12),
            "            \n÷         12\n"
        );
    }

    #[test]
    fn long_history_is_not_truncated() {
        let frame = format_frame("1.00e+18", "999999999 × 999999999 = 1.00e+18", None, 12);

        assert!(frame.starts_with("999999999 × 999999999 = 1.00e+18\n"));
    }

    #[test]
    fn render_uses_latest_indicator() {
        let mut display = TerminalDisplay::new(Vec::new(), 12);

        display.set_active_operator(Some(Operator::Multiply));
        display.render("6", "");
        display.set_active_operator(None);
        display.render("42", "6 × 7 = 42");

        assert_eq!(
            output(display),
            "            \n×          6\n  6 × 7 = 42\n          42\n"
        );
    }

    #[test]
    fn first_write_error_is_kept_and_reported() {
        let mut display = TerminalDisplay::new(FailingWriter { budget: 0 }, 12);

        display.render("1", "");
        display.render("2", "");

        let error = display.finish().expect_err("write failed");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}

//! Human-readable diagnostic lines.
//!
//! These are the runtime's informational output, separate from `tracing` logs.
//! The format is not versioned.

use std::fmt;
use std::io::Write;

use mold_api::{KeyCode, Point, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic<'a> {
    /// Result of a window size query.
    WindowSize(Size),
    /// Pointer moved inside the window.
    PointerInside(Point),
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    /// A pending move edge was consumed.
    Moving,
    /// A pending resize edge was consumed.
    Resizing,
    /// The loop observed the close flag.
    Closing,
    /// The quit shortcut was pressed.
    QuitShortcut,
    /// A notification the lifecycle tracker does not handle.
    UnknownNotification(&'a str),
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::WindowSize(size) => write!(f, "w: {:.6}, h: {:.6}", size.width, size.height),
            Diagnostic::PointerInside(p) => write!(f, "(in:true)({:.6},{:.6})", p.x, p.y),
            Diagnostic::KeyDown(key) => write!(f, "DOWN({})", key.0),
            Diagnostic::KeyUp(key) => write!(f, "UP({})", key.0),
            Diagnostic::Moving => f.write_str("Moving!"),
            Diagnostic::Resizing => f.write_str("Resizing!"),
            Diagnostic::Closing => f.write_str("got closed?"),
            Diagnostic::QuitShortcut => f.write_str("by key code!"),
            Diagnostic::UnknownNotification(name) => write!(f, "SEL: {name}"),
        }
    }
}

pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic<'_>);
}

/// Writes one line per diagnostic to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&mut self, diagnostic: Diagnostic<'_>) {
        let mut out = std::io::stdout().lock();
        // Diagnostics are informational; a closed stdout is not worth stopping for.
        let _ = writeln!(out, "{diagnostic}");
    }
}

/// Collects rendered lines. Used by tests and tooling.
impl DiagnosticSink for Vec<String> {
    fn emit(&mut self, diagnostic: Diagnostic<'_>) {
        self.push(diagnostic.to_string());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic<'_>) {
        (**self).emit(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_formats() {
        let mut lines = Vec::new();
        lines.emit(Diagnostic::WindowSize(Size::new(800.0, 600.0)));
        lines.emit(Diagnostic::PointerInside(Point::new(400.0, 300.5)));
        lines.emit(Diagnostic::KeyDown(KeyCode(12)));
        lines.emit(Diagnostic::KeyUp(KeyCode(0)));
        lines.emit(Diagnostic::UnknownNotification("NSWindowDidBecomeKeyNotification"));

        assert_eq!(
            lines,
            vec![
                "w: 800.000000, h: 600.000000",
                "(in:true)(400.000000,300.500000)",
                "DOWN(12)",
                "UP(0)",
                "SEL: NSWindowDidBecomeKeyNotification",
            ]
        );
    }

    #[test]
    fn test_sink_by_reference() {
        let mut lines: Vec<String> = Vec::new();
        {
            let mut sink = &mut lines;
            sink.emit(Diagnostic::Moving);
            sink.emit(Diagnostic::Resizing);
        }
        assert_eq!(lines, vec!["Moving!", "Resizing!"]);
    }
}

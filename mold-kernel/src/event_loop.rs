//! The run-loop.
//!
//! Single-threaded and cooperative. Each iteration runs inside a host memory scope,
//! checks the close flag, blocks for one event, classifies it and either handles it
//! locally or forwards it to the host. Notifications may arrive while the host is
//! inside `next_event` or `forward`; their effects are observed on the next check.

use std::sync::Arc;
use std::time::Duration;

use mold_api::{Event, KeyChord, Point};

use crate::config::LoopConfig;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::host::{Host, classify};
use crate::lifecycle::LifecycleState;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The window's close notification was observed.
    WindowClosed,
    /// The quit shortcut was pressed.
    QuitShortcut,
}

pub struct EventLoop<H: Host, S: DiagnosticSink> {
    host: H,
    lifecycle: Arc<LifecycleState>,
    sink: S,
    quit: KeyChord,
    idle_delay: Duration,
    /// Last known pointer position relative to the window.
    pointer_inside: bool,
    iterations: u64,
}

impl<H: Host, S: DiagnosticSink> EventLoop<H, S> {
    pub fn new(host: H, lifecycle: Arc<LifecycleState>, sink: S, config: &LoopConfig) -> Self {
        Self {
            host,
            lifecycle,
            sink,
            quit: config.quit,
            idle_delay: config.idle_delay(),
            pointer_inside: false,
            iterations: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Run until the window closes or the quit shortcut is pressed, then shut the
    /// host down. The sink is handed back for inspection.
    pub fn run(mut self) -> (ExitReason, S) {
        tracing::info!("Entering event loop");

        let reason = loop {
            if let Some(reason) = self.step() {
                break reason;
            }
            if !self.idle_delay.is_zero() {
                std::thread::sleep(self.idle_delay);
            }
        };

        tracing::info!(?reason, iterations = self.iterations, "Event loop finished");
        (reason, self.shutdown())
    }

    /// Run a single iteration inside its own host scope. `Some` means the loop must
    /// stop; no further events should be pulled.
    pub fn step(&mut self) -> Option<ExitReason> {
        let _scope = self.host.enter_scope();
        self.iterations += 1;
        self.iterate()
    }

    /// Release the window and hand back the sink.
    pub fn shutdown(self) -> S {
        self.host.shutdown();
        self.sink
    }

    /// One iteration inside an open scope. `Some` stops the loop.
    fn iterate(&mut self) -> Option<ExitReason> {
        if self.lifecycle.will_close() {
            self.sink.emit(Diagnostic::Closing);
            return Some(ExitReason::WindowClosed);
        }

        let raw = self.host.next_event()?;
        let event = classify(&self.host, &raw);

        if self.lifecycle.is_miniaturized() {
            tracing::trace!(?event, "Forwarding while miniaturized");
            self.forward(raw);
            return None;
        }

        match event {
            Event::MouseMoved { location } => self.track_pointer(location),
            Event::KeyDown { key_code, modifiers } => {
                self.sink.emit(Diagnostic::KeyDown(key_code));
                if self.quit.matches(key_code, modifiers) {
                    self.sink.emit(Diagnostic::QuitShortcut);
                    return Some(ExitReason::QuitShortcut);
                }
            }
            Event::KeyUp { key_code } => self.sink.emit(Diagnostic::KeyUp(key_code)),
            Event::Other { kind, code } => {
                if self.lifecycle.take_move() {
                    self.sink.emit(Diagnostic::Moving);
                }
                if self.lifecycle.take_resize() {
                    self.sink.emit(Diagnostic::Resizing);
                }
                tracing::trace!(?kind, code, "Forwarding event");
                self.forward(raw);
            }
        }

        None
    }

    fn track_pointer(&mut self, location: Point) {
        let frame = self.host.window_frame();
        // Leaving the window only updates state; it has no diagnostic of its own.
        self.pointer_inside = frame.contains_local(location);
        if self.pointer_inside {
            self.sink.emit(Diagnostic::PointerInside(location));
        }
    }

    fn forward(&mut self, raw: H::RawEvent) {
        self.host.forward(raw);
        self.host.update_windows();
    }
}

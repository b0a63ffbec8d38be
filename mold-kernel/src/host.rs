//! The seam between the run-loop and the host window system.
//!
//! A backend owns the application object, the window and any per-iteration host
//! resources. The loop only ever sees raw events as opaque `Host::RawEvent` values
//! and turns them into [`Event`]s through [`classify`].

use mold_api::{Event, EventKind, KeyCode, ModifierFlags, Point, Rect};

pub trait Host {
    /// Host-owned event object.
    type RawEvent;

    /// Per-iteration memory scope. Dropping it releases everything the host
    /// allocated during the iteration.
    type Scope;

    fn enter_scope(&mut self) -> Self::Scope;

    /// Block until the host has an event and dequeue it. `None` when the host woke
    /// up without one.
    fn next_event(&mut self) -> Option<Self::RawEvent>;

    /// Native event-type code of `event`.
    fn event_type(&self, event: &Self::RawEvent) -> u64;

    /// Location of `event` relative to the window. Only meaningful for pointer events.
    fn location_in_window(&self, event: &Self::RawEvent) -> Point;

    /// Only meaningful for key events.
    fn key_code(&self, event: &Self::RawEvent) -> u16;

    fn modifier_flags(&self, event: &Self::RawEvent) -> u64;

    /// Current frame of the window.
    fn window_frame(&self) -> Rect;

    /// Hand `event` to the host's default handling.
    fn forward(&mut self, event: Self::RawEvent);

    /// Ask the host to refresh its window list after a forwarded event.
    fn update_windows(&mut self);

    /// Release the window. Consumes the host so it can only happen once.
    fn shutdown(self);
}

/// Classify a raw host event into the loop's tagged [`Event`].
///
/// Accessors beyond the type code are only called for the kinds that need them.
pub fn classify<H: Host + ?Sized>(host: &H, raw: &H::RawEvent) -> Event {
    let code = host.event_type(raw);
    match EventKind::from_code(code) {
        Some(EventKind::MouseMoved) => Event::MouseMoved {
            location: host.location_in_window(raw),
        },
        Some(EventKind::KeyDown) => Event::KeyDown {
            key_code: KeyCode(host.key_code(raw)),
            modifiers: ModifierFlags(host.modifier_flags(raw)),
        },
        Some(EventKind::KeyUp) => Event::KeyUp {
            key_code: KeyCode(host.key_code(raw)),
        },
        kind => Event::Other { kind, code },
    }
}

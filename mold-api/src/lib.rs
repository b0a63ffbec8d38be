//! Mold API - Shared value types for the Mold window runtime.
//!
//! Everything here is platform-neutral plain data: geometry laid out exactly like
//! the host's `CG*` structs, the window decoration bit-set, the event taxonomy
//! produced at the loop's ingress, and the window lifecycle notifications.

mod event;
mod geometry;
mod notification;
mod style;

pub use event::*;
pub use geometry::*;
pub use notification::*;
pub use style::*;

//! Mold Cocoa - AppKit backend driven purely through the Objective-C runtime.
//!
//! No compiler-generated messaging glue is used. Every class and selector is
//! resolved by name into a typed entry point ([`dispatch`]), collected once into the
//! [`HostApi`] table, and the notification callback is a block literal built by
//! hand ([`block`]). This is the ONLY crate that talks to the host window system.

#![cfg(target_os = "macos")]

mod api;
mod app;
pub mod block;
pub mod dispatch;
mod error;
mod host;
mod observer;
mod string;
mod window;

pub use api::HostApi;
pub use app::launch;
pub use error::{DispatchError, Error};
pub use host::{AutoreleaseScope, CocoaHost, EventRef};
pub use string::NativeString;
pub use window::Window;

//! Mold Kernel - The single-window run-loop core.
//!
//! This crate contains everything that does not touch the host runtime directly:
//! - Lifecycle tracking (sticky and edge-triggered window flags)
//! - The `Host` seam a platform backend implements
//! - Ingress classification of raw host events
//! - The event loop itself
//! - Diagnostic output and configuration

pub mod config;
pub mod diagnostic;
pub mod event_loop;
pub mod host;

mod lifecycle;

pub use config::{AppConfig, ConfigError, LoopConfig, WindowConfig};
pub use diagnostic::{Diagnostic, DiagnosticSink, StdoutSink};
pub use event_loop::{EventLoop, ExitReason};
pub use host::{Host, classify};
pub use lifecycle::LifecycleState;

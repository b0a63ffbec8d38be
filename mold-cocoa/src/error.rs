//! Backend error types.

use thiserror::Error;

/// A name that could not be resolved through the runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("class not found: {0}")]
    UnknownClass(String),

    #[error("{class} does not respond to {selector}")]
    UnknownSelector { class: String, selector: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A host call that must produce an object returned nil.
    #[error("{0} returned nil")]
    Nil(&'static str),

    #[error("window creation failed")]
    WindowCreation,
}

//! Custom error types for the page widgets.
//!
//! Every failure degrades a single widget and never the page:
//!
//! - [`WidgetError`] - a widget could not bind to its markup
//! - [`MapError`] - Google Maps API interop failures
//! - [`SubmitError`] - contact form submission failures

use thiserror::Error;

/// Errors raised while binding a widget to the DOM.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// Browser window or document not available.
    #[error("browser document not available")]
    NoDocument,
    /// A required element is not present in the page.
    #[error("required element not found: {0}")]
    MissingElement(&'static str),
    /// The widget markup is present but has nothing to drive.
    #[error("nothing to drive: {0}")]
    Empty(&'static str),
    /// Registering an event listener or observer failed.
    #[error("failed to attach listener for `{0}`")]
    ListenerFailed(&'static str),
}

/// Errors raised while talking to the Google Maps JavaScript API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// `google.maps` is not loaded.
    #[error("Google Maps API not loaded")]
    ApiUnavailable,
    /// Static attraction data failed to parse.
    #[error("invalid attraction data: {0}")]
    InvalidData(String),
    /// Converting options into JavaScript values failed.
    #[error("failed to build map options: {0}")]
    Options(String),
}

/// Errors raised by a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The form could not be encoded or the request could not be built.
    #[error("failed to build request: {0}")]
    Request(String),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(u16),
}

//! Utility modules for DOM access and logging.
//!
//! Provides:
//! - [`dom`] - Queries, class toggling, geometry and event listeners
//! - [`log`] - Browser console logging
//! - [`maps`] - Google Maps JavaScript API interop

pub mod dom;
pub mod log;
pub mod maps;

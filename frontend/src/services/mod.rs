//! External-effect services.
//!
//! This module holds the code that talks to the outside world:
//!
//! # Services
//!
//! - [`analyze`] - Document + goal submission to the analysis endpoint
//! - [`export`] - Clipboard, file downloads, and the print dialog
//!
//! Parsing and document construction inside these modules are pure;
//! browser APIs are only touched at the final hand-off.

pub mod analyze;
pub mod export;

pub use analyze::*;
pub use export::*;

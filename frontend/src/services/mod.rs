//! Browser implementations of the widget's capabilities.
//!
//! # Services
//!
//! - [`transport`] - Multipart upload over `XMLHttpRequest` with progress
//! - [`probe`] - Image dimension probing through an `<img>` element
//! - [`host`] - Alerts, change callback and object URL cleanup

pub mod transport;
pub mod probe;
pub mod host;

pub use transport::*;
pub use probe::*;
pub use host::*;

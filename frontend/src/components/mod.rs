//! UI components for the Dropzone page.
//!
//! # Layout
//! - [`GlobalStyle`] - Page-wide style layer
//!
//! # Widget
//! - [`UploadFile`] - Logo upload with drag & drop and progress
//! - [`ProgressRing`] - Circular progress meter around the logo
//! - [`PlaceholderIcon`] - Graphic shown until a logo is uploaded

mod style;
mod icon;
mod meter;
mod upload;

pub use style::*;
pub use icon::*;
pub use meter::*;
pub use upload::*;

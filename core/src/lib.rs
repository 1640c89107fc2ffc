//! # Dropzone - logo upload widget logic
//!
//! Platform-free core of a drag & drop / click-to-browse image upload
//! control. The browser side (DOM events, XHR, image decoding) lives in the
//! frontend crate and plugs in through the traits in [`capability`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Drop/Select │────▶│ ImageProbe  │────▶│  ImageRule  │────▶│  Transport  │
//! │  (events)   │     │ (dimensions)│     │  (100×100)  │     │ (multipart) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!                                                                    │
//!                         UploadState ◀──── UploadEvent ◀────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - User-facing error type
//! - [`config`] - Defaults and per-widget configuration
//! - [`state`] - Upload state, labels, render snapshot
//! - [`validation`] - Dimension check
//! - [`meter`] - Progress ring geometry
//! - [`capability`] - Traits implemented by the host platform
//! - [`widget`] - The state machine

pub mod error;
pub mod config;
pub mod state;
pub mod validation;
pub mod meter;
pub mod capability;
pub mod widget;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{UploadError, UploadResult};

pub use config::{
    WidgetConfig,
    DEFAULT_UPLOAD_ENDPOINT,
    LOGO_SIZE,
    ACCEPTED_EXTENSIONS,
    UPLOAD_FIELD,
};

pub use state::{UploadState, LinkAction, WidgetView};

pub use validation::{ImageRule, Preview};

pub use capability::{
    FileLike,
    ImageProbe,
    UploadTransport,
    UploadHandle,
    UploadId,
    UploadEvent,
    Host,
};

pub use widget::{UploadWidget, Selection, SelectionId};

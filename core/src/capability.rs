//! Browser capabilities the widget depends on.
//!
//! The widget never touches the DOM or the network itself. The frontend
//! implements these traits on top of `web-sys`; tests use in-memory fakes.

use crate::{Preview, UploadResult};

/// A user-chosen file.
pub trait FileLike {
    /// Original file name, sent as the multipart filename.
    fn name(&self) -> String;
}

/// Decodes a file as an image to learn its dimensions.
#[allow(async_fn_in_trait)]
pub trait ImageProbe<F> {
    /// Creates a preview URL for the file and waits for the image to load.
    async fn probe(&self, file: &F) -> UploadResult<Preview>;
}

/// Identifies one upload request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UploadId(pub u64);

impl std::fmt::Display for UploadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notification delivered by a transport for a request.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadEvent {
    /// Bytes sent so far. `total` is `None` when the length is unknown.
    Progress { loaded: u64, total: Option<u64> },
    /// The request completed. `url` is the response URL if any.
    Load { url: Option<String> },
    /// The request failed.
    Error(String),
    /// The request is over, whatever the outcome.
    LoadEnd,
}

/// Sends files to the upload endpoint.
///
/// Events for a request are fed back through
/// [`crate::UploadWidget::handle_event`] with the id passed to `send`.
pub trait UploadTransport<F> {
    type Handle: UploadHandle;

    /// Starts a multipart POST of `file`.
    fn send(&self, id: UploadId, file: &F) -> UploadResult<Self::Handle>;
}

/// An in-flight request.
pub trait UploadHandle {
    /// Aborts the request. No-op once it has finished.
    fn abort(self);
}

/// Services of the page hosting the widget.
pub trait Host {
    /// Blocking user notice.
    fn alert(&self, message: &str);

    /// Called with the URL of a completed upload.
    fn changed(&self, url: &str);

    /// Frees a preview URL created by the probe.
    fn revoke_preview(&self, url: &str);
}

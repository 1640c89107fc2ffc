//! Upload state and the labels derived from it.

use serde::{Deserialize, Serialize};

/// Where the widget is in its upload lifecycle.
///
/// A percentage only exists while a request is in flight, so `Init` with a
/// non-zero percentage cannot be represented.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum UploadState {
    /// Nothing uploaded yet, or the last attempt was cancelled or failed.
    #[default]
    Init,
    /// A request is in flight.
    Pending {
        /// Bytes sent over bytes total, 0 to 100.
        percent: f64,
    },
    /// The last upload completed.
    Uploaded {
        /// URL of the uploaded file.
        url: String,
    },
}

impl UploadState {
    /// Percent complete; 0 outside of `Pending` except 100 once uploaded.
    pub fn percent(&self) -> f64 {
        match self {
            UploadState::Init => 0.0,
            UploadState::Pending { percent } => *percent,
            UploadState::Uploaded { .. } => 100.0,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, UploadState::Pending { .. })
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            UploadState::Init => "init",
            UploadState::Pending { .. } => "pending",
            UploadState::Uploaded { .. } => "uploaded",
        }
    }

    /// Text under the icon.
    pub fn drop_label(&self) -> &'static str {
        match self {
            UploadState::Init => "Drag & drop here",
            UploadState::Pending { .. } => "Uploading",
            UploadState::Uploaded { .. } => "Drag & drop here to replace",
        }
    }

    /// Text of the clickable link.
    pub fn action_label(&self) -> &'static str {
        match self {
            UploadState::Init => "Select file to upload",
            UploadState::Pending { .. } => "Cancel",
            UploadState::Uploaded { .. } => "Select file to replace",
        }
    }

    /// What clicking the link does.
    pub fn action(&self) -> LinkAction {
        if self.is_pending() {
            LinkAction::Cancel
        } else {
            LinkAction::Browse
        }
    }
}

/// Behaviour of the select/cancel link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkAction {
    /// Open the native file dialog.
    Browse,
    /// Abort the in-flight upload.
    Cancel,
}

/// Everything the view needs to render the widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetView {
    pub state: UploadState,
    /// Drop zone is being hovered by a drag.
    pub highlight: bool,
    /// Local object URL of the last validated file.
    pub preview: Option<String>,
}

impl WidgetView {
    /// Image shown inside the ring once uploaded.
    ///
    /// The local preview wins over the remote URL so the image shows up
    /// without a second network fetch.
    pub fn logo_href(&self) -> Option<String> {
        match &self.state {
            UploadState::Uploaded { url } => Some(self.preview.clone().unwrap_or_else(|| url.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_per_state() {
        let pending = UploadState::Pending { percent: 40.0 };
        let uploaded = UploadState::Uploaded { url: "u".into() };

        assert_eq!(UploadState::Init.drop_label(), "Drag & drop here");
        assert_eq!(UploadState::Init.action_label(), "Select file to upload");
        assert_eq!(pending.drop_label(), "Uploading");
        assert_eq!(pending.action_label(), "Cancel");
        assert_eq!(uploaded.drop_label(), "Drag & drop here to replace");
        assert_eq!(uploaded.action_label(), "Select file to replace");
    }

    #[test]
    fn test_link_action() {
        assert_eq!(UploadState::Init.action(), LinkAction::Browse);
        assert_eq!(UploadState::Pending { percent: 0.0 }.action(), LinkAction::Cancel);
        assert_eq!(UploadState::Uploaded { url: "u".into() }.action(), LinkAction::Browse);
    }

    #[test]
    fn test_percent() {
        assert_eq!(UploadState::Init.percent(), 0.0);
        assert_eq!(UploadState::Pending { percent: 12.5 }.percent(), 12.5);
        assert_eq!(UploadState::Uploaded { url: "u".into() }.percent(), 100.0);
    }

    #[test]
    fn test_logo_href_prefers_preview() {
        let mut view = WidgetView {
            state: UploadState::Uploaded { url: "https://cdn/logo.png".into() },
            highlight: false,
            preview: Some("blob:local".into()),
        };
        assert_eq!(view.logo_href().as_deref(), Some("blob:local"));

        view.preview = None;
        assert_eq!(view.logo_href().as_deref(), Some("https://cdn/logo.png"));

        view.state = UploadState::Init;
        assert_eq!(view.logo_href(), None);
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_value(UploadState::Pending { percent: 50.0 }).unwrap();
        assert_eq!(json["state"], "pending");
        assert_eq!(json["percent"], 50.0);
    }
}

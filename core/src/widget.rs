//! The upload widget's state machine.
//!
//! [`UploadWidget`] reacts to the discrete events the page feeds it (drag,
//! drop, file selection, probe result, network notifications, cancel) and
//! calls out through the capability traits. It owns at most one request:
//! starting another one aborts the previous request first, and events for
//! any request other than the active one are dropped.
//!
//! ```text
//!            drop / select ──▶ probe ──▶ check size
//!                                            │ ok
//!                                            ▼
//!   Init ──────────── send ─────────────▶ Pending { percent }
//!    ▲                                       │      │
//!    └──── cancel / error ───────────────────┘      │ load
//!                                                   ▼
//!                                          Uploaded { url }
//! ```

use std::marker::PhantomData;

use crate::{
    FileLike, Host, ImageRule, LinkAction, Preview, UploadError, UploadEvent, UploadHandle,
    UploadId, UploadResult, UploadState, UploadTransport, WidgetConfig, WidgetView,
};

/// Generation stamp of a drop or dialog pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionId(u64);

/// A file taken from a drop or the file dialog, waiting to be measured.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<F> {
    pub id: SelectionId,
    pub file: F,
}

struct ActiveUpload<H> {
    id: UploadId,
    handle: H,
}

/// Upload widget logic, independent of any rendering.
pub struct UploadWidget<F, T, H>
where
    T: UploadTransport<F>,
    H: Host,
{
    config: WidgetConfig,
    rule: ImageRule,
    transport: T,
    host: H,
    state: UploadState,
    highlight: bool,
    preview: Option<String>,
    active: Option<ActiveUpload<T::Handle>>,
    next_id: u64,
    latest_selection: u64,
    _file: PhantomData<fn(F)>,
}

impl<F, T, H> UploadWidget<F, T, H>
where
    F: FileLike,
    T: UploadTransport<F>,
    H: Host,
{
    pub fn new(config: WidgetConfig, transport: T, host: H) -> Self {
        let rule = ImageRule::from_config(&config);
        Self {
            config,
            rule,
            transport,
            host,
            state: UploadState::Init,
            highlight: false,
            preview: None,
            active: None,
            next_id: 0,
            latest_selection: 0,
            _file: PhantomData,
        }
    }

    /// Starts from an already uploaded file.
    pub fn with_value(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|url| !url.is_empty()) {
            self.state = UploadState::Uploaded { url };
        }
        self
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn highlighted(&self) -> bool {
        self.highlight
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Id of the request currently owned by the widget.
    pub fn active_id(&self) -> Option<UploadId> {
        self.active.as_ref().map(|a| a.id)
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> WidgetView {
        WidgetView {
            state: self.state.clone(),
            highlight: self.highlight,
            preview: self.preview.clone(),
        }
    }

    /// What the link under the meter does right now.
    pub fn link_action(&self) -> LinkAction {
        self.state.action()
    }

    // -------------------------------------------------------------------------
    // Drag & drop
    // -------------------------------------------------------------------------

    pub fn drag_over(&mut self) {
        self.highlight = true;
    }

    pub fn drag_leave(&mut self) {
        self.highlight = false;
    }

    /// Takes the first dropped file.
    ///
    /// Returns `None` and alerts when the drop carried nothing.
    pub fn take_dropped(&mut self, files: Vec<F>) -> Option<Selection<F>> {
        self.highlight = false;
        match files.into_iter().next() {
            Some(file) => {
                log::debug!("File dropped: {}", file.name());
                Some(self.select(file))
            }
            None => {
                self.fail(UploadError::MissingFile);
                None
            }
        }
    }

    /// Takes the first file chosen in the file dialog.
    pub fn take_selected(&mut self, files: Option<Vec<F>>) -> Option<Selection<F>> {
        let Some(files) = files else {
            self.fail(UploadError::NoFileList);
            return None;
        };
        let Some(file) = files.into_iter().next() else {
            self.fail(UploadError::MissingFile);
            return None;
        };

        let name = file.name();
        if !self.config.accepts_name(&name) {
            self.fail(UploadError::UnsupportedType { name });
            return None;
        }

        log::debug!("File selected: {}", name);
        Some(self.select(file))
    }

    /// Stamps `file` as the newest pick; older picks still being measured
    /// are discarded when they settle.
    fn select(&mut self, file: F) -> Selection<F> {
        self.latest_selection += 1;
        Selection {
            id: SelectionId(self.latest_selection),
            file,
        }
    }

    /// Whether `id` belongs to the most recent drop or pick.
    pub fn is_current(&self, id: SelectionId) -> bool {
        id == SelectionId(self.latest_selection)
    }

    // -------------------------------------------------------------------------
    // Validation & upload
    // -------------------------------------------------------------------------

    /// Finishes validation of a probed file and uploads it if it passes.
    ///
    /// Results for a pick that has since been superseded are dropped and
    /// their preview released. Returns whether a request was started.
    pub fn settle(&mut self, selection: Selection<F>, probed: UploadResult<Preview>) -> bool {
        let Selection { id, file } = selection;
        if !self.is_current(id) {
            log::debug!("Discarding {}: a newer file was picked", file.name());
            if let Ok(preview) = probed {
                self.host.revoke_preview(&preview.url);
            }
            return false;
        }

        let preview = match probed {
            Ok(preview) => preview,
            Err(e) => {
                self.fail(e);
                return false;
            }
        };

        if let Err(e) = self.rule.check_preview(&preview) {
            log::debug!(
                "Rejected {} ({}x{})",
                file.name(),
                preview.width,
                preview.height
            );
            self.host.revoke_preview(&preview.url);
            self.fail(e);
            return false;
        }

        if let Some(previous) = self.preview.replace(preview.url) {
            self.host.revoke_preview(&previous);
        }

        self.start(&file)
    }

    /// Sends `file`, aborting whatever request was in flight.
    pub fn start(&mut self, file: &F) -> bool {
        self.abort_active();

        self.next_id += 1;
        let id = UploadId(self.next_id);

        match self.transport.send(id, file) {
            Ok(handle) => {
                log::info!("📤 Uploading {} ({})", file.name(), id);
                self.active = Some(ActiveUpload { id, handle });
                self.transition(UploadState::Pending { percent: 0.0 });
                true
            }
            Err(e) => {
                self.transition(UploadState::Init);
                self.fail(e);
                false
            }
        }
    }

    /// Applies a transport notification.
    pub fn handle_event(&mut self, id: UploadId, event: UploadEvent) {
        if self.active_id() != Some(id) {
            log::debug!("Ignoring {:?} for stale upload {}", event, id);
            return;
        }

        match event {
            UploadEvent::Progress { loaded, total } => self.progress(loaded, total),
            UploadEvent::Load { url } => {
                let url = url
                    .filter(|url| !url.is_empty())
                    .unwrap_or_else(|| self.config.endpoint.clone());
                log::info!("✅ Upload {} complete: {}", id, url);
                self.transition(UploadState::Uploaded { url: url.clone() });
                self.host.changed(&url);
            }
            UploadEvent::Error(message) => {
                self.transition(UploadState::Init);
                self.fail(UploadError::Transport(message));
            }
            UploadEvent::LoadEnd => {
                self.active = None;
            }
        }
    }

    fn progress(&mut self, loaded: u64, total: Option<u64>) {
        let Some(total) = total.filter(|t| *t > 0) else {
            return;
        };
        let current = match self.state {
            UploadState::Pending { percent } => percent,
            _ => return,
        };

        let percent = (loaded as f64 / total as f64 * 100.0).min(100.0);
        if percent > current {
            self.state = UploadState::Pending { percent };
        }
    }

    /// Aborts the in-flight upload. Only meaningful while pending.
    pub fn cancel(&mut self) -> bool {
        if !self.state.is_pending() {
            return false;
        }
        self.abort_active();
        self.transition(UploadState::Init);
        true
    }

    fn abort_active(&mut self) {
        if let Some(active) = self.active.take() {
            log::info!("Aborting upload {}", active.id);
            active.handle.abort();
        }
    }

    fn transition(&mut self, next: UploadState) {
        if self.state.name() != next.name() {
            log::debug!("Upload state {} -> {}", self.state.name(), next.name());
        }
        self.state = next;
    }

    fn fail(&self, err: UploadError) {
        log::warn!("{}", err);
        self.host.alert(&err.to_string());
    }
}

impl<F, T, H> Drop for UploadWidget<F, T, H>
where
    T: UploadTransport<F>,
    H: Host,
{
    fn drop(&mut self) {
        if let Some(active) = self.active.take() {
            active.handle.abort();
        }
        if let Some(url) = self.preview.take() {
            self.host.revoke_preview(&url);
        }
    }
}

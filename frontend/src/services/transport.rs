//! Multipart upload over `XMLHttpRequest`.
//!
//! `fetch` reports no upload progress, so the request goes through XHR and
//! its `upload.progress` events drive the meter.

use std::rc::Rc;

use dropzone::{
    FileLike, UploadError, UploadEvent, UploadHandle, UploadId, UploadResult, UploadTransport,
    UPLOAD_FIELD,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, FormData, ProgressEvent, XmlHttpRequest};

use crate::PickedFile;

/// Receives the notifications of every request.
///
/// Implementations must not handle the event synchronously: `abort()`
/// fires `loadend` while the widget is still borrowed.
pub type EventSink = Rc<dyn Fn(UploadId, UploadEvent)>;

fn transport_err(e: JsValue) -> UploadError {
    UploadError::Transport(format!("{:?}", e))
}

fn listen(
    target: &EventTarget,
    name: &str,
    handler: impl FnMut(Event) + 'static,
) -> UploadResult<Closure<dyn FnMut(Event)>> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .map_err(transport_err)?;
    Ok(closure)
}

/// Sends files to a fixed endpoint.
pub struct XhrTransport {
    endpoint: String,
    sink: EventSink,
}

impl XhrTransport {
    pub fn new(endpoint: impl Into<String>, sink: EventSink) -> Self {
        Self {
            endpoint: endpoint.into(),
            sink,
        }
    }
}

/// An in-flight XHR and the listeners attached to it.
///
/// Listeners are dropped with the handle, which the widget only does after
/// `loadend` or an abort.
pub struct XhrHandle {
    request: XmlHttpRequest,
    _progress: Closure<dyn FnMut(ProgressEvent)>,
    _listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl UploadHandle for XhrHandle {
    fn abort(self) {
        if let Err(e) = self.request.abort() {
            log::warn!("Failed to abort upload: {:?}", e);
        }
    }
}

impl UploadTransport<PickedFile> for XhrTransport {
    type Handle = XhrHandle;

    fn send(&self, id: UploadId, file: &PickedFile) -> UploadResult<XhrHandle> {
        let request = XmlHttpRequest::new().map_err(transport_err)?;
        let upload = request.upload().map_err(transport_err)?;

        let sink = self.sink.clone();
        let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |ev: ProgressEvent| {
            let total = ev.length_computable().then(|| ev.total() as u64);
            sink(
                id,
                UploadEvent::Progress {
                    loaded: ev.loaded() as u64,
                    total,
                },
            );
        });
        upload
            .add_event_listener_with_callback("progress", progress.as_ref().unchecked_ref())
            .map_err(transport_err)?;

        let mut listeners = Vec::with_capacity(4);

        let sink = self.sink.clone();
        let finished = request.clone();
        listeners.push(listen(&request, "load", move |_| {
            let url = Some(finished.response_url()).filter(|url| !url.is_empty());
            sink(id, UploadEvent::Load { url });
        })?);

        let sink = self.sink.clone();
        listeners.push(listen(&request, "error", move |_| {
            sink(id, UploadEvent::Error("network error".to_string()));
        })?);

        let sink = self.sink.clone();
        listeners.push(listen(&request, "timeout", move |_| {
            sink(id, UploadEvent::Error("request timed out".to_string()));
        })?);

        let sink = self.sink.clone();
        listeners.push(listen(&request, "loadend", move |_| {
            sink(id, UploadEvent::LoadEnd);
        })?);

        let form = FormData::new().map_err(transport_err)?;
        form.append_with_blob_and_filename(UPLOAD_FIELD, file.as_file(), &file.name())
            .map_err(transport_err)?;

        request.open("POST", &self.endpoint).map_err(transport_err)?;
        request
            .send_with_opt_form_data(Some(&form))
            .map_err(transport_err)?;

        Ok(XhrHandle {
            request,
            _progress: progress,
            _listeners: listeners,
        })
    }
}

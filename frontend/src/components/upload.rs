//! Logo upload widget with drag & drop support.
//!
//! Bridges DOM events into [`dropzone::UploadWidget`] and renders its
//! [`WidgetView`] snapshot. The widget lives in a `StoredValue`; every
//! mutation goes through [`dispatch`], which republishes the snapshot.

use std::rc::Rc;

use dropzone::{
    FileLike, Host, ImageProbe, LinkAction, Preview, Selection, UploadEvent, UploadId,
    UploadResult, UploadTransport, UploadWidget, WidgetConfig, WidgetView,
};
use leptos::*;
use leptos_meta::Style;
use web_sys::{DragEvent, Event, HtmlInputElement};

use super::style::{widget_css, ScopedClass};
use super::ProgressRing;
use crate::services::{DeferredHost, EventSink, HtmlImageProbe, PageHost, XhrTransport};
use crate::{PickedFile, HEADER_DESCRIPTION, HEADER_TITLE, UPLOAD_ENDPOINT};

type WidgetSlot<F, T, H> = StoredValue<Option<UploadWidget<F, T, H>>>;

/// Runs `f` against the widget and publishes the resulting snapshot.
///
/// Notifications for the parent are delivered once the slot is released, so
/// the parent is free to unmount the widget from them. Returns `None` once
/// the component has been unmounted.
fn dispatch<F, T, H, R>(
    slot: WidgetSlot<F, T, H>,
    view: RwSignal<WidgetView>,
    host: H,
    f: impl FnOnce(&mut UploadWidget<F, T, H>) -> R,
) -> Option<R>
where
    F: FileLike + 'static,
    T: UploadTransport<F> + 'static,
    H: DeferredHost,
{
    let outcome = slot
        .try_update_value(|widget| {
            widget.as_mut().map(|w| {
                let result = f(w);
                (result, w.view())
            })
        })
        .flatten()
        .map(|(result, snapshot)| {
            view.set(snapshot);
            result
        });

    host.flush();
    outcome
}

/// Hands a measured pick to the widget, or releases its preview when the
/// widget is already gone.
fn settle_or_release<F, T, H>(
    slot: WidgetSlot<F, T, H>,
    view: RwSignal<WidgetView>,
    host: H,
    selection: Selection<F>,
    measured: UploadResult<Preview>,
) where
    F: FileLike + 'static,
    T: UploadTransport<F> + 'static,
    H: DeferredHost,
{
    let leftover = measured.as_ref().ok().map(|preview| preview.url.clone());
    let settled = dispatch(slot, view, host, move |w| w.settle(selection, measured));

    if settled.is_none() {
        if let Some(url) = leftover {
            log::debug!("Widget unmounted, releasing {}", url);
            host.revoke_preview(&url);
        }
    }
}

/// Reads the image off the event handler, then lets the widget decide.
fn measure_and_upload(
    slot: WidgetSlot<PickedFile, XhrTransport, PageHost>,
    view: RwSignal<WidgetView>,
    host: PageHost,
    selection: Selection<PickedFile>,
) {
    spawn_local(async move {
        let measured = HtmlImageProbe.probe(&selection.file).await;
        settle_or_release(slot, view, host, selection, measured);
    });
}

#[component]
pub fn UploadFile(
    /// URL of an already uploaded logo.
    #[prop(optional, into)]
    value: Option<String>,
    /// Called with the URL of each completed upload.
    #[prop(optional, into)]
    on_change: Option<Callback<String>>,
    /// Extra class on the root element.
    #[prop(optional, into)]
    class: Option<String>,
    /// Overrides the upload endpoint.
    #[prop(optional, into)]
    endpoint: Option<String>,
) -> impl IntoView {
    let config = WidgetConfig::with_endpoint(
        endpoint.unwrap_or_else(|| UPLOAD_ENDPOINT.to_string()),
    );
    let accept = config.accept_attr();
    let transport_endpoint = config.endpoint.clone();

    let view_state = create_rw_signal(WidgetView::default());
    let slot: WidgetSlot<PickedFile, XhrTransport, PageHost> = store_value(None);
    let host = PageHost::new(on_change);

    // XHR callbacks are re-dispatched so they never run inside a borrow.
    let sink: EventSink = Rc::new(move |id: UploadId, event: UploadEvent| {
        spawn_local(async move {
            dispatch(slot, view_state, host, |w| w.handle_event(id, event));
        });
    });

    let widget = UploadWidget::new(
        config,
        XhrTransport::new(transport_endpoint, sink),
        host,
    )
    .with_value(value);
    view_state.set(widget.view());
    slot.set_value(Some(widget));

    on_cleanup(move || {
        // Dropped after the slot is released.
        let widget = slot.try_update_value(Option::take).flatten();
        drop(widget);
    });

    let file_input = create_node_ref::<html::Input>();

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !view_state.with_untracked(|v| v.highlight) {
            dispatch(slot, view_state, host, |w| w.drag_over());
        }
    };

    let on_drag_leave = move |_: DragEvent| {
        dispatch(slot, view_state, host, |w| w.drag_leave());
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let files = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .map(PickedFile::from_list)
            .unwrap_or_default();

        let picked = dispatch(slot, view_state, host, |w| w.take_dropped(files)).flatten();
        if let Some(selection) = picked {
            measure_and_upload(slot, view_state, host, selection);
        }
    };

    let on_selected = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input.files().map(PickedFile::from_list);
        // Lets the same file be picked again.
        input.set_value("");

        let picked = dispatch(slot, view_state, host, |w| w.take_selected(files)).flatten();
        if let Some(selection) = picked {
            measure_and_upload(slot, view_state, host, selection);
        }
    };

    let on_link_click = move |_| {
        let action = slot
            .try_with_value(|widget| widget.as_ref().map(|w| w.link_action()))
            .flatten();
        match action {
            Some(LinkAction::Cancel) => {
                dispatch(slot, view_state, host, |w| w.cancel());
            }
            Some(LinkAction::Browse) => {
                if let Some(input) = file_input.get_untracked() {
                    input.click();
                }
            }
            None => {}
        }
    };

    let scope = ScopedClass::new();
    let css = widget_css(&scope);
    let here_class = format!("{} content-text", scope.name("here"));
    let or_class = format!("{} content-text", scope.name("or"));
    let select_class = format!("{} content-text", scope.name("select"));
    let root_class = match class {
        Some(extra) => format!("upload-file {}", extra),
        None => "upload-file".to_string(),
    };

    let dropzone_class = move || {
        if view_state.with(|v| v.highlight) {
            "content-dropzone content-highlight"
        } else {
            "content-dropzone"
        }
    };

    view! {
        <Style>{css}</Style>
        <div class=root_class>
            <div class="upload-header">
                <div class="header-title header-text">{HEADER_TITLE}</div>
                <div class="header-description header-text">{HEADER_DESCRIPTION}</div>
            </div>
            <div class="upload-content">
                <div
                    class=dropzone_class
                    on:dragenter=on_drag_over
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <input
                        node_ref=file_input
                        class="content-fileinput"
                        type="file"
                        accept=accept
                        on:change=on_selected
                    />
                    <ProgressRing widget=view_state.into()/>
                    <div class=here_class>
                        <span>{move || view_state.with(|v| v.state.drop_label())}</span>
                    </div>
                    <div class=or_class>"- or -"</div>
                    <div class=select_class on:click=on_link_click>
                        <span>{move || view_state.with(|v| v.state.action_label())}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropzone::{UploadHandle, UploadState};

    #[derive(Clone, Debug, PartialEq)]
    struct TestFile(&'static str);

    impl FileLike for TestFile {
        fn name(&self) -> String {
            self.0.to_string()
        }
    }

    struct TestTransport;

    struct TestHandle;

    impl UploadHandle for TestHandle {
        fn abort(self) {}
    }

    impl UploadTransport<TestFile> for TestTransport {
        type Handle = TestHandle;

        fn send(&self, _: UploadId, _: &TestFile) -> UploadResult<TestHandle> {
            Ok(TestHandle)
        }
    }

    #[derive(Clone, Copy)]
    struct TestHost {
        revoked: StoredValue<Vec<String>>,
    }

    impl Host for TestHost {
        fn alert(&self, _: &str) {}

        fn changed(&self, _: &str) {}

        fn revoke_preview(&self, url: &str) {
            let _ = self.revoked.try_update_value(|r| r.push(url.to_string()));
        }
    }

    impl DeferredHost for TestHost {
        fn flush(&self) {}
    }

    fn square(url: &str) -> UploadResult<Preview> {
        Ok(Preview {
            url: url.to_string(),
            width: 100,
            height: 100,
        })
    }

    #[test]
    fn test_parent_may_unmount_from_change_handler() {
        let runtime = create_runtime();
        let slot: WidgetSlot<TestFile, TestTransport, PageHost> = store_value(None);
        let view = create_rw_signal(WidgetView::default());
        let seen = store_value(Vec::<String>::new());
        let host = PageHost::new(Some(Callback::new(move |url: String| {
            let unmounted = slot.try_update_value(Option::take).flatten();
            assert!(unmounted.is_some());
            seen.update_value(|s| s.push(url));
        })));

        let mut widget = UploadWidget::new(
            WidgetConfig::with_endpoint("https://upload.test/logo"),
            TestTransport,
            host,
        );
        assert!(widget.start(&TestFile("logo.png")));
        let id = widget.active_id().unwrap();
        slot.set_value(Some(widget));

        dispatch(slot, view, host, |w| {
            w.handle_event(id, UploadEvent::Load { url: None })
        });

        assert!(slot.with_value(|w| w.is_none()));
        assert_eq!(seen.get_value(), vec!["https://upload.test/logo".to_string()]);
        assert_eq!(view.with_untracked(|v| v.state.name()), "uploaded");
        runtime.dispose();
    }

    #[test]
    fn test_measured_pick_released_after_unmount() {
        let runtime = create_runtime();
        let host = TestHost {
            revoked: store_value(Vec::new()),
        };
        let slot: WidgetSlot<TestFile, TestTransport, TestHost> = store_value(Some(
            UploadWidget::new(WidgetConfig::default(), TestTransport, host),
        ));
        let view = create_rw_signal(WidgetView::default());

        let selection = dispatch(slot, view, host, |w| {
            w.take_dropped(vec![TestFile("logo.png")])
        })
        .flatten()
        .unwrap();
        drop(slot.try_update_value(Option::take).flatten());

        settle_or_release(slot, view, host, selection, square("blob:logo.png"));
        assert_eq!(host.revoked.get_value(), vec!["blob:logo.png".to_string()]);
        runtime.dispose();
    }

    #[test]
    fn test_measured_pick_kept_while_mounted() {
        let runtime = create_runtime();
        let host = TestHost {
            revoked: store_value(Vec::new()),
        };
        let slot: WidgetSlot<TestFile, TestTransport, TestHost> = store_value(Some(
            UploadWidget::new(WidgetConfig::default(), TestTransport, host),
        ));
        let view = create_rw_signal(WidgetView::default());

        let selection = dispatch(slot, view, host, |w| {
            w.take_dropped(vec![TestFile("logo.png")])
        })
        .flatten()
        .unwrap();

        settle_or_release(slot, view, host, selection, square("blob:logo.png"));
        assert!(host.revoked.with_value(|r| r.is_empty()));
        assert_eq!(
            view.get_untracked().state,
            UploadState::Pending { percent: 0.0 }
        );
        assert_eq!(
            view.with_untracked(|v| v.preview.clone()).as_deref(),
            Some("blob:logo.png")
        );

        drop(slot.try_update_value(Option::take).flatten());
        assert_eq!(host.revoked.get_value(), vec!["blob:logo.png".to_string()]);
        runtime.dispose();
    }
}

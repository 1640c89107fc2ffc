//! Page services used by the widget.

use dropzone::Host;
use leptos::{store_value, Callable, Callback, StoredValue};
use web_sys::Url;

/// A [`Host`] whose parent notifications wait until the widget is no longer
/// borrowed.
///
/// The parent may unmount the widget from its `on_change` handler, so the
/// handler must never run while the widget's slot is being updated.
pub trait DeferredHost: Host + Copy + 'static {
    /// Delivers the notifications queued since the last flush.
    fn flush(&self);
}

/// Alerts through `window.alert` and reports uploads to the parent.
#[derive(Clone, Copy)]
pub struct PageHost {
    on_change: Option<Callback<String>>,
    completed: StoredValue<Vec<String>>,
}

impl PageHost {
    pub fn new(on_change: Option<Callback<String>>) -> Self {
        Self {
            on_change,
            completed: store_value(Vec::new()),
        }
    }
}

impl Host for PageHost {
    fn alert(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            log::error!("Failed to show alert '{}': {:?}", message, e);
        }
    }

    fn changed(&self, url: &str) {
        if self.on_change.is_some() {
            let _ = self
                .completed
                .try_update_value(|queue| queue.push(url.to_string()));
        }
    }

    fn revoke_preview(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Failed to revoke {}: {:?}", url, e);
        }
    }
}

impl DeferredHost for PageHost {
    fn flush(&self) {
        let Some(on_change) = self.on_change else {
            return;
        };
        let urls = self
            .completed
            .try_update_value(std::mem::take)
            .unwrap_or_default();
        for url in urls {
            on_change.call(url);
        }
    }
}

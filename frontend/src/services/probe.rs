//! Reads image dimensions by loading the file into a detached `<img>`.

use dropzone::{ImageProbe, Preview, UploadError, UploadResult};
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlImageElement, Url};

use crate::PickedFile;

fn image_err(e: JsValue) -> UploadError {
    let message = e
        .as_string()
        .unwrap_or_else(|| "file is not a readable image".to_string());
    UploadError::ImageLoad(message)
}

/// Probes files through the browser's image decoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlImageProbe;

impl ImageProbe<PickedFile> for HtmlImageProbe {
    async fn probe(&self, file: &PickedFile) -> UploadResult<Preview> {
        let url = Url::create_object_url_with_blob(file.as_file()).map_err(image_err)?;

        match load_dimensions(&url).await {
            Ok((width, height)) => {
                log::debug!("Probed {}x{} image at {}", width, height, url);
                Ok(Preview { url, width, height })
            }
            Err(e) => {
                if let Err(e) = Url::revoke_object_url(&url) {
                    log::warn!("Failed to revoke {}: {:?}", url, e);
                }
                Err(image_err(e))
            }
        }
    }
}

async fn load_dimensions(url: &str) -> Result<(u32, u32), JsValue> {
    let img = HtmlImageElement::new()?;

    let target = img.clone();
    let loaded = Promise::new(&mut |resolve, reject| {
        target.set_onload(Some(&resolve));
        target.set_onerror(Some(&reject));
    });

    img.set_src(url);
    let result = JsFuture::from(loaded).await;

    img.set_onload(None);
    img.set_onerror(None);
    result?;

    Ok((img.natural_width(), img.natural_height()))
}

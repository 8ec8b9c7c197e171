//! Reading recipient files in the browser.
//!
//! A read never fails from the caller's point of view: an unreadable or
//! oversized file yields an empty string, which the recipients step then
//! treats like an emptied textarea.

use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::MAX_FILE_SIZE;

/// Read `file` as text.
///
/// Returns an empty string when the browser cannot read the file or the
/// file is larger than [`MAX_FILE_SIZE`].
pub async fn read_file_text(file: &File) -> String {
    let name = file.name();

    if file.size() > MAX_FILE_SIZE {
        log::warn!("📄 {} is {} bytes, over the {} byte limit", name, file.size(), MAX_FILE_SIZE);
        return String::new();
    }

    match JsFuture::from(file.text()).await {
        Ok(value) => value.as_string().unwrap_or_default(),
        Err(e) => {
            log::warn!("📄 Could not read {}: {:?}", name, e);
            String::new()
        }
    }
}

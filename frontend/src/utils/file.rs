use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::api::PhotoUpload;

pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

/// Reads a photograph picked in a file input into memory for the multipart
/// upload.
pub async fn read_photo(file: File) -> Result<PhotoUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Failed to read photograph".to_string())?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(PhotoUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes,
    })
}

use wasm_bindgen::JsCast;

/// Starts the browser's save flow for an in-memory payload. The temporary
/// object URL is revoked before returning.
pub fn trigger_blob_download(filename: &str, bytes: &[u8]) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
        .map_err(|_| "Failed to create blob".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let result = click_download_anchor(&url, filename);
    let _ = web_sys::Url::revoke_object_url(&url);
    result
}

fn click_download_anchor(url: &str, filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let element = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    a.set_href(url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&a)
        .map_err(|_| "Append failed".to_string())?;
    a.click();
    a.remove();
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn download_removes_its_anchor_from_the_document() {
        trigger_blob_download("leaves_export.csv", b"id,employee,days\n1,alice,3\n").unwrap();
        let document = web_sys::window().unwrap().document().unwrap();
        assert!(document.query_selector("a[download]").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn download_accepts_an_empty_payload() {
        trigger_blob_download("attendance_export.csv", b"").unwrap();
    }
}

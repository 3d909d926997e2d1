//! Plain-text download of generated artifacts
use contracts::enums::ContentKind;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// File name for a downloaded artifact, e.g. `summary-notes.pdf.txt`
pub fn artifact_file_name(kind: ContentKind, source_file_name: &str) -> String {
    format!("{}-{}.txt", kind.as_str(), source_file_name)
}

/// Build a text/plain Blob from the content and trigger a browser download
pub fn download_text_file(content: &str, filename: &str) -> Result<(), String> {
    let blob = create_text_blob(content)?;
    download_blob(&blob, filename)
}

fn create_text_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/plain;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Download a Blob by clicking a transient anchor
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_file_name_keeps_source_name() {
        assert_eq!(
            artifact_file_name(ContentKind::Summary, "notes.pdf"),
            "summary-notes.pdf.txt"
        );
        assert_eq!(
            artifact_file_name(ContentKind::MindMap, "lecture 3.docx"),
            "mindmap-lecture 3.docx.txt"
        );
    }
}

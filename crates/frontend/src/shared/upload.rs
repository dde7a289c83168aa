//! Multipart file upload for the import endpoints.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{FormData, Headers, Request, RequestInit, RequestMode, Response};

use crate::shared::api_utils::{api_url, auth_header};

/// POST `file` as the `file` field of a multipart form and parse the JSON reply.
pub async fn upload_file<T: DeserializeOwned>(path: &str, file: web_sys::File) -> Result<T, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let headers = Headers::new().map_err(|e| format!("{e:?}"))?;
    if let Some(auth) = auth_header() {
        headers
            .set("Authorization", &auth)
            .map_err(|e| format!("{e:?}"))?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_headers(&headers);
    opts.set_body(&form_data);

    let url = api_url(path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Upload failed: {e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {e}"))
}

/// First file selected in an `<input type="file">` change event.
pub fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    let input = ev
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

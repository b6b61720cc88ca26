//! Keyword generation against the hosted generative API.
//!
//! The API is a black box that turns a theme into search keywords; any
//! failure (missing key, network error, malformed response) falls back to a
//! small static keyword set so the sphere always has something to show.

use std::cell::RefCell;
use std::rc::Rc;

use gallery_core::{keywords, Gallery, GalleryItem, INITIAL_IMAGE_COUNT};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Run a full search pass: keywords for the theme, padded to a full sphere,
/// then replace the gallery's item set (which also clears the selection).
pub async fn run_search(gallery: Rc<RefCell<Gallery>>, theme: String) {
    log::info!("[search] generating keywords for theme: {theme}");
    let generated = generate_keywords(&theme).await;
    let padded = keywords::pad_keywords(generated, INITIAL_IMAGE_COUNT);
    let now = js_sys::Date::now() as u64;
    let items = padded
        .iter()
        .enumerate()
        .map(|(i, k)| GalleryItem::generated(k, i, now))
        .collect();
    gallery.borrow_mut().replace_all(items);
}

pub async fn generate_keywords(theme: &str) -> Vec<String> {
    match try_generate(theme).await {
        Ok(keywords) => keywords,
        Err(e) => {
            log::warn!("[search] keyword generation failed, using fallback: {e:#}");
            keywords::fallback_keywords()
        }
    }
}

// The key is injected by the hosting page; keeping it off the wasm binary.
fn api_key() -> Option<String> {
    let window = web::window()?;
    js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("GALLERY_API_KEY"))
        .ok()?
        .as_string()
}

async fn try_generate(theme: &str) -> anyhow::Result<Vec<String>> {
    let key = api_key().ok_or_else(|| anyhow::anyhow!("no GALLERY_API_KEY configured"))?;
    let prompt = keywords::keyword_prompt(theme);
    let body = serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": { "responseMimeType": "application/json" }
    })
    .to_string();

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let headers = web::Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    init.set_headers(headers.as_ref());

    let url = format!("{API_URL}?key={key}");
    let request = web::Request::new_with_str_and_init(&url, &init).map_err(js_err)?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("keyword request failed: HTTP {}", resp.status());
    }
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("response body was not text"))?;

    // The generated keywords ride inside the first candidate's text part.
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let payload = value["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("response carried no text part"))?;
    Ok(keywords::parse_keywords(payload)?)
}

fn js_err(e: impl std::fmt::Debug) -> anyhow::Error {
    anyhow::anyhow!(format!("{e:?}"))
}

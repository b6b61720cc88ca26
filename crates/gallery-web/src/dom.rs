use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn input_value(document: &web::Document, element_id: &str) -> Option<String> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[inline]
pub fn clear_input(document: &web::Document, element_id: &str) {
    if let Some(input) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        input.set_value("");
    }
}

/// Mark the search control busy while a keyword request is in flight.
pub fn set_busy(document: &web::Document, busy: bool) {
    if let Some(el) = document.get_element_by_id("search-button") {
        let cl = el.class_list();
        if busy {
            _ = cl.add_1("busy");
        } else {
            _ = cl.remove_1("busy");
        }
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Attach a submit handler to a form, with the default page reload
/// suppressed.
pub fn add_submit_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            handler();
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach an `input` handler to a slider/text control; the handler receives
/// the control's current value.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            if let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            {
                handler(input.value());
            }
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach a `change` handler to the file input.
pub fn add_change_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::HtmlInputElement) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            if let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            {
                handler(input);
            }
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

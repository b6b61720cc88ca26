//! DOM event wiring: pointer picking on the canvas and the sidebar controls
//! (theme search, zoom slider, URL add, file upload).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gallery_core::{keywords, Gallery, GalleryItem};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::frame::SceneShared;
use crate::input::{self, MouseState};
use crate::{dom, service};

pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub gallery: Rc<RefCell<Gallery>>,
    pub mouse: Rc<RefCell<MouseState>>,
    pub hover_index: Rc<RefCell<Option<usize>>>,
    pub scene: Rc<RefCell<SceneShared>>,
}

pub fn wire_pointer_handlers(w: &PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };

    // Move on the window so parallax keeps tracking outside the canvas.
    {
        let canvas = w.canvas.clone();
        let mouse = w.mouse.clone();
        let hover_index = w.hover_index.clone();
        let scene = w.scene.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let px = input::pointer_canvas_px(&ev, &canvas);
            {
                let mut m = mouse.borrow_mut();
                m.x = px.x;
                m.y = px.y;
                m.moved = true;
            }
            let scene = scene.borrow();
            let (ro, rd) = input::screen_to_world_ray(
                canvas.width() as f32,
                canvas.height() as f32,
                px.x,
                px.y,
                scene.camera_distance,
            );
            *hover_index.borrow_mut() =
                input::pick_image(ro, rd, scene.rotation, &scene.positions);
        }) as Box<dyn FnMut(_)>);
        _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let mouse = w.mouse.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            ev.prevent_default();
            mouse.borrow_mut().down = true;
        }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Release on the window so a drag that leaves the canvas still ends.
    {
        let gallery = w.gallery.clone();
        let mouse = w.mouse.clone();
        let hover_index = w.hover_index.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            let was_down = mouse.borrow().down;
            mouse.borrow_mut().down = false;
            if !was_down {
                return;
            }
            if let Some(i) = *hover_index.borrow() {
                let mut g = gallery.borrow_mut();
                if i < g.len() {
                    let id = g.items()[i].id.clone();
                    log::info!("[click] toggling selection on {id}");
                    g.toggle_select(&id);
                }
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub struct ControlWiring {
    pub document: web::Document,
    pub gallery: Rc<RefCell<Gallery>>,
    pub zoom: Rc<Cell<f32>>,
}

pub fn wire_controls(w: &ControlWiring) {
    {
        let zoom = w.zoom.clone();
        dom::add_input_listener(&w.document, "zoom-slider", move |value| {
            if let Ok(v) = value.parse::<f32>() {
                zoom.set(v.clamp(0.0, 1.0));
            }
        });
    }

    {
        let document = w.document.clone();
        let gallery = w.gallery.clone();
        dom::add_submit_listener(&w.document, "search-form", move || {
            let theme = dom::input_value(&document, "theme-input")
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| keywords::DEFAULT_THEME.to_string());
            dom::set_busy(&document, true);
            let document = document.clone();
            let gallery = gallery.clone();
            spawn_local(async move {
                service::run_search(gallery, theme).await;
                dom::set_busy(&document, false);
            });
        });
    }

    {
        let document = w.document.clone();
        let gallery = w.gallery.clone();
        dom::add_submit_listener(&w.document, "url-form", move || {
            let Some(url) = dom::input_value(&document, "url-input") else {
                return;
            };
            let url = url.trim().to_string();
            if url.is_empty() {
                return;
            }
            let now = js_sys::Date::now() as u64;
            gallery
                .borrow_mut()
                .prepend(vec![GalleryItem::from_url(&url, now)]);
            dom::clear_input(&document, "url-input");
        });
    }

    {
        let gallery = w.gallery.clone();
        dom::add_change_listener(&w.document, "file-input", move |file_input| {
            let Some(files) = file_input.files() else {
                return;
            };
            for n in 0..files.length() {
                let Some(file) = files.get(n) else { continue };
                let Ok(reader) = web::FileReader::new() else {
                    continue;
                };
                let name = file.name();
                let gallery = gallery.clone();
                let reader_for_closure = reader.clone();
                let onload = Closure::wrap(Box::new(move |_ev: web::ProgressEvent| {
                    let Some(data_url) = reader_for_closure
                        .result()
                        .ok()
                        .and_then(|v| v.as_string())
                    else {
                        log::warn!("[upload] could not read {name} as a data URL");
                        return;
                    };
                    let now = js_sys::Date::now() as u64;
                    gallery.borrow_mut().prepend(vec![GalleryItem::uploaded(
                        &name,
                        data_url,
                        now,
                        n as usize,
                    )]);
                }) as Box<dyn FnMut(_)>);
                reader.set_onload(Some(onload.as_ref().unchecked_ref()));
                onload.forget();
                if reader.read_as_data_url(&file).is_err() {
                    log::warn!("[upload] failed to start reading file {n}");
                }
            }
            file_input.set_value("");
        });
    }
}

#![cfg(target_arch = "wasm32")]

mod dom;
mod events;
mod frame;
mod input;
mod render;
mod service;
mod textures;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gallery_core::{keywords, Gallery, ViewportState, DEFAULT_ZOOM, SPHERE_RADIUS};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use frame::{FrameContext, GpuParts, SceneShared};
use input::MouseState;
use textures::TextureCache;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("gallery-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #gallery-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    frame::wire_canvas_resize(&canvas);

    let gallery = Rc::new(RefCell::new(Gallery::new()));
    let zoom = Rc::new(Cell::new(DEFAULT_ZOOM));
    let mouse = Rc::new(RefCell::new(MouseState::default()));
    let hover_index = Rc::new(RefCell::new(None::<usize>));
    let scene = Rc::new(RefCell::new(SceneShared::new(SPHERE_RADIUS)));

    // Rendering is optional: without WebGPU the controls and state still
    // work, there is just nothing on screen.
    let gpu = match frame::init_gpu(&canvas).await {
        Some(state) => {
            let textures = TextureCache::new(
                state.device(),
                state.queue(),
                state.texture_layout(),
                state.sampler(),
            );
            Some(GpuParts {
                state,
                textures: Rc::new(RefCell::new(textures)),
            })
        }
        None => None,
    };

    events::wire_pointer_handlers(&events::PointerWiring {
        canvas: canvas.clone(),
        gallery: gallery.clone(),
        mouse: mouse.clone(),
        hover_index: hover_index.clone(),
        scene: scene.clone(),
    });
    events::wire_controls(&events::ControlWiring {
        document,
        gallery: gallery.clone(),
        zoom: zoom.clone(),
    });

    // Populate the sphere with the default theme straight away.
    spawn_local(service::run_search(
        gallery.clone(),
        keywords::DEFAULT_THEME.to_string(),
    ));

    let now = Instant::now();
    let ctx = Rc::new(RefCell::new(FrameContext {
        gallery,
        viewport: ViewportState::new(SPHERE_RADIUS),
        scene,
        mouse,
        zoom,
        canvas,
        gpu,
        layout_revision: None,
        started_at: now,
        last_instant: now,
    }));
    frame::start_loop(ctx);

    Ok(())
}

//! Async image loading for the gallery cards.
//!
//! Each item's image is fetched (http(s) or data URL), decoded with the
//! `image` crate, and uploaded as an RGBA8 texture. Cards render with a flat
//! placeholder until their texture lands; a failed load keeps the
//! placeholder and never touches layout or interpolation state.

use std::cell::RefCell;
use std::rc::Rc;

use fnv::{FnvHashMap, FnvHashSet};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct TextureCache {
    device: wgpu::Device,
    queue: wgpu::Queue,
    layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    placeholder: Rc<wgpu::BindGroup>,
    ready: FnvHashMap<String, Rc<wgpu::BindGroup>>,
    pending: FnvHashSet<String>,
}

impl TextureCache {
    pub fn new(
        device: wgpu::Device,
        queue: wgpu::Queue,
        layout: wgpu::BindGroupLayout,
        sampler: wgpu::Sampler,
    ) -> Self {
        // Neutral light-gray card shown until an image arrives.
        let placeholder = Rc::new(upload_rgba(
            &device,
            &queue,
            &layout,
            &sampler,
            1,
            1,
            &[0xe4, 0xe4, 0xe7, 0xff],
        ));
        Self {
            device,
            queue,
            layout,
            sampler,
            placeholder,
            ready: FnvHashMap::default(),
            pending: FnvHashSet::default(),
        }
    }

    /// Bind group for an item id: its texture when loaded, the placeholder
    /// otherwise.
    pub fn bind_group_for(&self, id: &str) -> Rc<wgpu::BindGroup> {
        self.ready
            .get(id)
            .cloned()
            .unwrap_or_else(|| self.placeholder.clone())
    }

    /// Kick off a load for an item unless it is already loaded or in
    /// flight. Cheap to call every frame.
    pub fn request(cache: &Rc<RefCell<TextureCache>>, id: &str, url: &str) {
        {
            let c = cache.borrow();
            if c.ready.contains_key(id) || c.pending.contains(id) {
                return;
            }
        }
        cache.borrow_mut().pending.insert(id.to_string());
        spawn_local(load_into(cache.clone(), id.to_string(), url.to_string()));
    }

    fn upload_rgba(&self, width: u32, height: u32, pixels: &[u8]) -> wgpu::BindGroup {
        upload_rgba(
            &self.device,
            &self.queue,
            &self.layout,
            &self.sampler,
            width,
            height,
            pixels,
        )
    }
}

fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> wgpu::BindGroup {
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("gallery image"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("gallery image bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

async fn load_into(cache: Rc<RefCell<TextureCache>>, id: String, url: String) {
    match fetch_and_decode(&url).await {
        Ok((width, height, rgba)) => {
            let bind_group = cache.borrow().upload_rgba(width, height, &rgba);
            cache.borrow_mut().ready.insert(id, Rc::new(bind_group));
        }
        Err(e) => {
            log::warn!("[textures] image load failed for {id}: {e:#}");
        }
    }
    cache.borrow_mut().pending.remove(&id);
}

async fn fetch_and_decode(url: &str) -> anyhow::Result<(u32, u32, Vec<u8>)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("image request failed: HTTP {}", resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();

    let decoded = image::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("decoded image has zero dimensions");
    }
    Ok((width, height, decoded.into_raw()))
}

fn js_err(e: impl std::fmt::Debug) -> anyhow::Error {
    anyhow::anyhow!(format!("{e:?}"))
}

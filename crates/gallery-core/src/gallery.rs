//! Gallery item set and selection state.
//!
//! The item list is owned here and only read by the layout engine and the
//! viewer. A new search replaces the set wholesale; manual adds are
//! prepended. `revision` bumps on every set change so the frontend knows to
//! recompute the sphere layout.

use crate::keywords;

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: String,
    /// Image locator: an http(s) URL or a data URL for uploads.
    pub source: String,
    pub label: String,
}

impl GalleryItem {
    /// Item produced by a keyword search/generate pass.
    pub fn generated(keyword: &str, index: usize, timestamp_ms: u64) -> Self {
        Self {
            id: format!("gen-{keyword}-{index}-{timestamp_ms}"),
            source: keywords::image_url(keyword, index),
            label: keyword.to_string(),
        }
    }

    /// Item added by pasting a remote URL.
    pub fn from_url(url: &str, timestamp_ms: u64) -> Self {
        Self {
            id: format!("url-{timestamp_ms}"),
            source: url.to_string(),
            label: "Remote Image".to_string(),
        }
    }

    /// Item added from a local file, already read as a data URL.
    pub fn uploaded(name: &str, data_url: String, timestamp_ms: u64, n: usize) -> Self {
        Self {
            id: format!("upload-{timestamp_ms}-{n}"),
            source: data_url,
            label: name.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    selected_id: Option<String>,
    revision: u64,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped on every item-set change; the layout engine recomputes when it
    /// sees a new value.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole set (new search result). Clears any selection.
    pub fn replace_all(&mut self, items: Vec<GalleryItem>) {
        log::info!("[gallery] replacing set: {} items", items.len());
        self.items = items;
        self.clear_selection();
        self.revision += 1;
    }

    /// Prepend manually added items, keeping the existing set and selection.
    pub fn prepend(&mut self, items: Vec<GalleryItem>) {
        if items.is_empty() {
            return;
        }
        log::info!("[gallery] adding {} items", items.len());
        self.items.splice(0..0, items);
        self.revision += 1;
    }

    /// Toggle semantics: selecting the selected id clears it, any other id
    /// replaces the selection.
    pub fn toggle_select(&mut self, id: &str) {
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        } else {
            self.selected_id = Some(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Index of the selected item in the current ordering, `None` when
    /// nothing is selected or the id is no longer present.
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_id.as_deref()?;
        self.items.iter().position(|item| item.id == id)
    }
}

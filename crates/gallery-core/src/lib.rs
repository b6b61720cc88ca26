pub mod constants;
pub mod gallery;
pub mod keywords;
pub mod layout;
pub mod state;
pub mod viewport;

pub static GALLERY_WGSL: &str = include_str!("../shaders/gallery.wgsl");

pub use constants::*;
pub use gallery::*;
pub use layout::*;
pub use state::*;
pub use viewport::*;

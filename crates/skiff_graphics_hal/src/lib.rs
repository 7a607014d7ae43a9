use skiff_core::ImageSize;

pub mod texture;

use texture::{PixelFormat, Texture};

/// Rendering backend abstraction. The sprite engine only needs the ability
/// to turn raw pixel data into an owned, GPU-resident texture; everything
/// else (draw calls, shaders, frame buffers) lives in the backend crates.
pub trait Graphics
where
    Self: Sized + Clone + 'static,
{
    type PixelFormat: From<PixelFormat>;
    type Texture: Texture<Self, PixelFormat = Self::PixelFormat>;

    fn new_texture(
        &self,
        format: PixelFormat,
        size: ImageSize<u32>,
        bytes: Option<&[u8]>,
    ) -> Self::Texture {
        Self::Texture::new(self.clone(), format.into(), size, bytes)
    }
}

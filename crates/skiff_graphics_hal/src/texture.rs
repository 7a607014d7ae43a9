use skiff_core::ImageSize;

use crate::Graphics;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Alpha,
    Rgb,
    Rgba,
}

/// An owned texture living on the rendering device. Dropping the value
/// releases the device resource.
pub trait Texture<G: Graphics> {
    type PixelFormat: From<PixelFormat>;

    fn new(graphics: G, format: G::PixelFormat, size: ImageSize<u32>, bytes: Option<&[u8]>)
        -> Self;

    fn size(&self) -> ImageSize<u32>;
}

use anyhow::Result;
use rgb::ComponentBytes;
use skiff_core::ImageSize;

/// Decodes a PNG into tightly packed RGBA8 bytes.
pub fn decode_png(png: &[u8]) -> Result<(Vec<u8>, ImageSize<u32>)> {
    let image = lodepng::decode32(png)?;
    let size = ImageSize::new(image.width as u32, image.height as u32);
    let bytes = image.buffer.as_bytes().to_owned();

    Ok((bytes, size))
}

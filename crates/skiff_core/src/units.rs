use crate::ImageSize;

/// Side length of one logical tile in pixels. All world geometry
/// (collision, bounding boxes, level layout) is expressed in tiles.
pub const TILE_SIZE: u32 = 8;

#[inline]
pub fn pixels_to_tiles(pixels: u32) -> i32 {
    (pixels / TILE_SIZE) as i32
}

#[inline]
pub fn tiles_to_pixels(tiles: i32) -> i32 {
    tiles * TILE_SIZE as i32
}

/// Converts a frame image's pixel extents into logical tile extents.
/// Frame images are authored on the tile grid.
pub fn pixel_extents_to_tile_extents(size: ImageSize<u32>) -> ImageSize<i32> {
    ImageSize::new(pixels_to_tiles(size.w), pixels_to_tiles(size.h))
}

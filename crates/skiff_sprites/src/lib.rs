use std::rc::Rc;

use nalgebra::Vector2;
use skiff_assets::FrameData;
use skiff_graphics_hal::texture::PixelFormat;
use skiff_graphics_hal::Graphics;

pub mod draw_order;
pub mod factory;
pub mod orientation;
pub mod part_list;
pub mod render_slots;
pub mod tweaks;

pub use factory::SpriteFactory;
pub use render_slots::RenderSlot;

/// One renderable frame: an owned texture plus the draw offset in pixels
/// relative to the actor's anchor point.
pub struct SpriteFrame<G: Graphics> {
    pub texture: G::Texture,
    pub draw_offset: Vector2<i32>,
}

/// The fully composed draw data for one actor id. Built once, cached by the
/// [`SpriteFactory`], and never mutated afterwards.
pub struct SpriteDrawData<G: Graphics> {
    /// All constituent parts' frames, concatenated. The position in this
    /// table is the real frame index.
    pub frames: Vec<SpriteFrame<G>>,
    /// Real frame index at which each part's frames begin, in part order.
    /// Lets game logic address a part's frames by a part-relative index.
    pub part_frame_offsets: Vec<usize>,
    /// Block size for actors whose table is laid out as equally-sized
    /// per-orientation blocks.
    pub orientation_offset: Option<usize>,
    /// Explicit virtual-to-real translation for actors whose authored frame
    /// order is too irregular for a uniform block stride.
    pub frame_map: Option<&'static [usize]>,
    /// Final sort key for render layering.
    pub draw_order: i32,
}

/// A per-instance sprite handle. Cheap to clone; all handles for the same
/// actor id alias the same composed draw data. `frames_to_render` is owned
/// by the instance and rewritten freely by game logic to animate.
#[derive(Clone)]
pub struct Sprite<G: Graphics> {
    pub draw_data: Rc<SpriteDrawData<G>>,
    pub frames_to_render: Vec<RenderSlot>,
}

impl<G: Graphics> std::fmt::Debug for Sprite<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sprite")
            .field("frames_to_render", &self.frames_to_render)
            .finish_non_exhaustive()
    }
}

/// Translates a virtual frame index (what game logic asks for) into a real
/// index in the concatenated frame table.
///
/// An explicit frame map is the ground truth and always wins; the
/// orientation offset is a coarser fallback that shifts the index by whole
/// orientation blocks.
pub fn virtual_to_real_frame<G: Graphics>(
    virtual_frame: usize,
    draw_data: &SpriteDrawData<G>,
    orientation: Option<usize>,
) -> usize {
    if let Some(map) = draw_data.frame_map {
        return map[virtual_frame];
    }

    match (draw_data.orientation_offset, orientation) {
        (Some(offset), Some(orientation)) => orientation * offset + virtual_frame,
        _ => virtual_frame,
    }
}

pub(crate) fn create_frame<G: Graphics>(graphics: &G, frame: &FrameData) -> SpriteFrame<G> {
    let texture = graphics.new_texture(PixelFormat::Rgba, frame.image.size, Some(&frame.image.bytes));
    SpriteFrame {
        texture,
        draw_offset: frame.draw_offset,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use nalgebra::vector;
    use skiff_assets::{ActorData, FrameData, RawImage};
    use skiff_core::ImageSize;
    use skiff_graphics_hal::texture::{PixelFormat, Texture};
    use skiff_graphics_hal::Graphics;

    #[derive(Clone)]
    pub struct NullGraphics;

    pub struct NullTexture(ImageSize<u32>);

    impl Texture<NullGraphics> for NullTexture {
        type PixelFormat = PixelFormat;

        fn new(
            _graphics: NullGraphics,
            _format: PixelFormat,
            size: ImageSize<u32>,
            _bytes: Option<&[u8]>,
        ) -> Self {
            Self(size)
        }

        fn size(&self) -> ImageSize<u32> {
            self.0
        }
    }

    impl Graphics for NullGraphics {
        type PixelFormat = PixelFormat;
        type Texture = NullTexture;
    }

    /// An actor part of `frame_count` 8x8 frames whose offsets encode their
    /// origin: part `part` frame `i` gets offset (100 * part + i, 0).
    pub fn actor_data(part: usize, frame_count: usize, draw_index: i32) -> ActorData {
        let frames = (0..frame_count)
            .map(|i| FrameData {
                image: RawImage {
                    bytes: vec![0; 8 * 8 * 4],
                    size: ImageSize::new(8, 8),
                },
                draw_offset: vector![(100 * part + i) as i32, 0],
            })
            .collect();

        ActorData {
            frames,
            draw_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    fn draw_data(
        orientation_offset: Option<usize>,
        frame_map: Option<&'static [usize]>,
    ) -> SpriteDrawData<NullGraphics> {
        SpriteDrawData {
            frames: Vec::new(),
            part_frame_offsets: Vec::new(),
            orientation_offset,
            frame_map,
            draw_order: 0,
        }
    }

    #[test]
    fn test_identity_translation_without_mapping_data() {
        let data = draw_data(None, None);
        assert_eq!(virtual_to_real_frame(7, &data, None), 7);
        assert_eq!(virtual_to_real_frame(7, &data, Some(1)), 7);
    }

    #[test]
    fn test_orientation_offset_shifts_by_whole_blocks() {
        let data = draw_data(Some(9), None);
        assert_eq!(virtual_to_real_frame(2, &data, None), 2);
        assert_eq!(virtual_to_real_frame(2, &data, Some(1)), 11);
    }

    #[test]
    fn test_explicit_frame_map_wins_over_orientation_offset() {
        static MAP: [usize; 4] = [3, 2, 1, 0];
        let data = draw_data(Some(2), Some(&MAP));

        assert_eq!(virtual_to_real_frame(1, &data, None), 2);
        // The orientation selector must not feed into the modular formula
        // when a map is present.
        assert_eq!(virtual_to_real_frame(1, &data, Some(1)), 2);
    }
}

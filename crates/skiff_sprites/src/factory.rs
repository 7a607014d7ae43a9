use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{ensure, Result};
use skiff_assets::ActorImageSource;
use skiff_core::{units, ActorId, Rect};
use skiff_graphics_hal::texture::Texture;
use skiff_graphics_hal::Graphics;
use tracing::debug;

use crate::draw_order::adjusted_draw_order;
use crate::orientation::{frame_map, orientation_offset};
use crate::part_list::actor_parts;
use crate::render_slots::initial_frames_to_render;
use crate::tweaks::apply_tweaks;
use crate::{create_frame, virtual_to_real_frame, Sprite, SpriteDrawData};

/// Builds sprites, composing and caching the draw data per actor id.
///
/// The cache lives as long as the factory, typically one level or session;
/// every sprite handle for the same actor id aliases the same composition.
/// Single-threaded by design, like the rest of the engine's load path.
pub struct SpriteFactory<P, G: Graphics> {
    graphics: G,
    pack: P,
    cache: HashMap<ActorId, Rc<SpriteDrawData<G>>>,
}

impl<P: ActorImageSource, G: Graphics> SpriteFactory<P, G> {
    pub fn new(graphics: G, pack: P) -> Self {
        Self {
            graphics,
            pack,
            cache: HashMap::new(),
        }
    }

    /// Returns a fresh sprite handle for `id`, composing its draw data on
    /// first use. Failure means a part's image data is missing; callers
    /// should abort the load operation in progress rather than render a
    /// placeholder.
    pub fn create_sprite(&mut self, id: ActorId) -> Result<Sprite<G>> {
        let draw_data = self.create_or_find(id)?;

        Ok(Sprite {
            draw_data,
            frames_to_render: initial_frames_to_render(id),
        })
    }

    /// Draw offset and tile extents of one of the actor's frames, looked up
    /// orientation-agnostically. Used for bounds and collision purposes,
    /// independent of rendering.
    pub fn actor_frame_rect(&mut self, id: ActorId, virtual_frame: usize) -> Result<Rect<i32>> {
        let draw_data = self.create_or_find(id)?;
        let real_frame = virtual_to_real_frame(virtual_frame, &draw_data, None);
        let frame = &draw_data.frames[real_frame];

        let extents = units::pixel_extents_to_tile_extents(frame.texture.size());
        Ok(Rect::new(
            frame.draw_offset.x,
            frame.draw_offset.y,
            extents.w,
            extents.h,
        ))
    }

    /// The composed draw data for `id`. At most one composition exists per
    /// id for the factory's lifetime; nothing is cached if the build fails.
    pub fn create_or_find(&mut self, id: ActorId) -> Result<Rc<SpriteDrawData<G>>> {
        if let Some(draw_data) = self.cache.get(&id) {
            return Ok(draw_data.clone());
        }

        let draw_data = Rc::new(self.compose(id)?);
        self.cache.insert(id, draw_data.clone());
        Ok(draw_data)
    }

    fn compose(&self, id: ActorId) -> Result<SpriteDrawData<G>> {
        let part_ids = actor_parts(id);
        let mut parts = Vec::with_capacity(part_ids.len());
        for part_id in &part_ids {
            parts.push(self.pack.load_actor(*part_id)?);
        }

        let mut frames = Vec::new();
        let mut part_frame_offsets = Vec::with_capacity(parts.len());
        let mut last_draw_index = 0;
        for part in &parts {
            part_frame_offsets.push(frames.len());
            last_draw_index = part.draw_index;

            for frame in &part.frames {
                frames.push(create_frame(&self.graphics, frame));
            }
        }

        apply_tweaks(&mut frames, id, &parts, &self.graphics);
        ensure!(!frames.is_empty(), "actor {id:?} composed an empty frame table");

        debug!(
            ?id,
            parts = parts.len(),
            frames = frames.len(),
            "composed sprite draw data"
        );

        Ok(SpriteDrawData {
            frames,
            part_frame_offsets,
            orientation_offset: orientation_offset(id),
            frame_map: frame_map(id),
            draw_order: adjusted_draw_order(id, last_draw_index),
        })
    }
}

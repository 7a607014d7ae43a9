use anyhow::Result;
use nalgebra::Vector2;
use skiff_core::{ActorId, ImageSize};
use thiserror::Error;

/// Owned RGBA8 pixel data, tightly packed row by row.
#[derive(Debug, Clone)]
pub struct RawImage {
    pub bytes: Vec<u8>,
    pub size: ImageSize<u32>,
}

/// One authored frame: its pixels and the draw offset in pixels relative
/// to the actor's anchor point. Offsets are signed; art is frequently
/// anchored off-center.
#[derive(Debug, Clone)]
pub struct FrameData {
    pub image: RawImage,
    pub draw_offset: Vector2<i32>,
}

/// The raw data of one actor part as authored: an ordered frame sequence
/// plus the base draw-order value declared by the asset.
#[derive(Debug, Clone)]
pub struct ActorData {
    pub frames: Vec<FrameData>,
    pub draw_index: i32,
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no image data for actor {0:?}")]
    ActorNotFound(ActorId),

    #[error("frame rect at ({x}, {y}) sized {w}x{h} lies outside the sheet")]
    FrameOutOfBounds { x: u32, y: u32, w: u32, h: u32 },
}

/// Source of per-actor frame sets. Loading is synchronous and never
/// retried; a missing or undecodable part is a content-integrity error
/// that aborts whatever load operation requested it.
pub trait ActorImageSource {
    fn load_actor(&self, id: ActorId) -> Result<ActorData>;
}

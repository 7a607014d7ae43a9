use std::collections::HashMap;

use anyhow::{Context, Result};
use nalgebra::vector;
use serde::Deserialize;
use skiff_core::{ActorId, ImageSize};
use tracing::debug;

use crate::actors::{ActorData, ActorImageSource, AssetError, FrameData, RawImage};
use crate::png::decode_png;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetFrame {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub offset_x: i32,
    pub offset_y: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetActor {
    pub id: u16,
    pub draw_index: i32,
    pub frames: Vec<SheetFrame>,
}

/// Metadata half of an actor sheet: which rectangles of the packed sheet
/// image belong to which actor, in frame order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorSheetFile {
    pub actors: Vec<SheetActor>,
}

impl ActorSheetFile {
    pub fn decode(json: &str) -> Result<ActorSheetFile> {
        Ok(serde_json::from_str(json)?)
    }
}

/// All actor art of an episode, sliced out of one packed sheet PNG into
/// owned per-frame buffers at load time.
pub struct ActorImagePack {
    actors: HashMap<ActorId, ActorData>,
}

impl ActorImagePack {
    pub fn new(sheet_json: &str, sheet_png: &[u8]) -> Result<Self> {
        let file = ActorSheetFile::decode(sheet_json).context("decoding actor sheet metadata")?;
        let (pixels, size) = decode_png(sheet_png).context("decoding actor sheet image")?;

        let mut actors = HashMap::with_capacity(file.actors.len());
        for actor in &file.actors {
            let id = ActorId::try_from(actor.id)
                .with_context(|| format!("unknown actor id {} in sheet", actor.id))?;

            let frames = actor
                .frames
                .iter()
                .map(|frame| cut_frame(&pixels, size, frame))
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("slicing frames for actor {id:?}"))?;

            actors.insert(
                id,
                ActorData {
                    frames,
                    draw_index: actor.draw_index,
                },
            );
        }

        debug!(actors = actors.len(), "actor sheet loaded");
        Ok(Self { actors })
    }
}

impl ActorImageSource for ActorImagePack {
    fn load_actor(&self, id: ActorId) -> Result<ActorData> {
        self.actors
            .get(&id)
            .cloned()
            .ok_or_else(|| AssetError::ActorNotFound(id).into())
    }
}

fn cut_frame(pixels: &[u8], sheet: ImageSize<u32>, frame: &SheetFrame) -> Result<FrameData> {
    if frame.x + frame.w > sheet.w || frame.y + frame.h > sheet.h {
        return Err(AssetError::FrameOutOfBounds {
            x: frame.x,
            y: frame.y,
            w: frame.w,
            h: frame.h,
        }
        .into());
    }

    let mut bytes = Vec::with_capacity((frame.w * frame.h * 4) as usize);
    for row in frame.y..frame.y + frame.h {
        let start = ((row * sheet.w + frame.x) * 4) as usize;
        bytes.extend_from_slice(&pixels[start..start + (frame.w * 4) as usize]);
    }

    Ok(FrameData {
        image: RawImage {
            bytes,
            size: ImageSize::new(frame.w, frame.h),
        },
        draw_offset: vector![frame.offset_x, frame.offset_y],
    })
}

use nalgebra::vector;
use skiff_assets::ActorData;
use skiff_core::ActorId;
use skiff_graphics_hal::Graphics;

use crate::{create_frame, SpriteFrame};

/// Entity-specific corrections applied once per composition, right after
/// the parts' frames have been concatenated.
///
/// Some actors' authored offsets would need extra adjustment logic at draw
/// time; fixing the offsets once at load time keeps the run-time draw path
/// uniform. A rule that indexes past the end of the table means the art
/// assets and this table were shipped out of sync, and panics.
pub fn apply_tweaks<G: Graphics>(
    frames: &mut Vec<SpriteFrame<G>>,
    id: ActorId,
    parts: &[ActorData],
    graphics: &G,
) {
    use ActorId::*;

    // Player sprite
    if id == PilotLeft || id == PilotRight {
        for i in 0..39 {
            if i != 35 && i != 36 {
                frames[i].draw_offset.x -= 1;
            }
        }
    }

    // Destroyed reactor fire
    if id == ReactorFireLeft || id == ReactorFireRight {
        frames[0].draw_offset.x = 0;
    }

    // Radar terminal
    if id == RadarComputerTerminal {
        for frame in frames.iter_mut().skip(8) {
            frame.draw_offset.x -= 1;
        }
    }

    // Player ship
    if matches!(id, ShipLeft | ShipRight | ShipAfterExitLeft | ShipAfterExitRight) {
        // The incoming table is the left hull, right hull and exhaust flame
        // parts concatenated:
        //
        //   0, 1: hull, facing right
        //   2, 3: hull, facing left
        //   4, 5: exhaust flames, facing down
        //   6, 7: exhaust flames, facing left
        //   8, 9: exhaust flames, facing right
        //
        // Showing the left-facing hull next to the down-facing flames needs
        // the hull moved one pixel to the right, and the renderer cannot
        // apply an offset temporarily at draw time. So frames 2 and 3 are
        // duplicated behind index 8 with the shift baked in:
        //
        //    0,  1: hull, facing right
        //    2,  3: hull, facing left
        //    4,  5: exhaust flames, facing down
        //    6,  7: exhaust flames, facing left
        //    8,  9: hull, facing left, shifted right by one pixel
        //   10, 11: exhaust flames, facing right
        frames.insert(8, create_frame(graphics, &parts[1].frames[0]));
        frames.insert(9, create_frame(graphics, &parts[1].frames[1]));

        frames[8].draw_offset.x += 1;
        frames[9].draw_offset.x += 1;
    }

    // The plane's art includes structurally linked bomb frames it never
    // shows; the bomb itself keeps only its first frame.
    if id == BomberPlane {
        frames[3].draw_offset += vector![2, 0];
        frames.truncate(4);
    }

    if id == ContainerCarrier {
        frames[2].draw_offset += vector![0, -2];
        frames.truncate(3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{actor_data, NullGraphics};

    fn concatenated(parts: &[ActorData]) -> Vec<SpriteFrame<NullGraphics>> {
        parts
            .iter()
            .flat_map(|part| part.frames.iter())
            .map(|frame| create_frame(&NullGraphics, frame))
            .collect()
    }

    #[test]
    fn test_ship_duplicates_left_hull_frames_behind_the_flames() {
        let parts = [actor_data(0, 2, 1), actor_data(1, 2, 1), actor_data(2, 6, 1)];
        let mut frames = concatenated(&parts);
        assert_eq!(frames.len(), 10);

        apply_tweaks(&mut frames, ActorId::ShipLeft, &parts, &NullGraphics);

        assert_eq!(frames.len(), 12);
        // Copies of pre-tweak frames 2 and 3, shifted one pixel right.
        assert_eq!(frames[8].draw_offset, vector![101, 0]);
        assert_eq!(frames[9].draw_offset, vector![102, 0]);
        // The former frames 8 and 9 moved to 10 and 11 unchanged.
        assert_eq!(frames[10].draw_offset, vector![204, 0]);
        assert_eq!(frames[11].draw_offset, vector![205, 0]);
    }

    #[test]
    fn test_bomber_plane_keeps_only_the_first_four_frames() {
        let parts = [actor_data(0, 4, 2), actor_data(1, 2, 1)];
        let mut frames = concatenated(&parts);

        apply_tweaks(&mut frames, ActorId::BomberPlane, &parts, &NullGraphics);

        assert_eq!(frames.len(), 4);
        assert_eq!(frames[3].draw_offset, vector![3 + 2, 0]);
    }

    #[test]
    fn test_container_carrier_truncates_after_adjusting_frame_two() {
        let parts = [actor_data(0, 3, 1), actor_data(1, 2, 1)];
        let mut frames = concatenated(&parts);

        apply_tweaks(&mut frames, ActorId::ContainerCarrier, &parts, &NullGraphics);

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].draw_offset, vector![2, -2]);
    }

    #[test]
    fn test_player_nudge_skips_the_exempt_frames() {
        let parts = [actor_data(0, 39, 1), actor_data(1, 39, 1)];
        let mut frames = concatenated(&parts);

        apply_tweaks(&mut frames, ActorId::PilotLeft, &parts, &NullGraphics);

        assert_eq!(frames[0].draw_offset, vector![-1, 0]);
        assert_eq!(frames[34].draw_offset, vector![33, 0]);
        assert_eq!(frames[35].draw_offset, vector![35, 0]);
        assert_eq!(frames[36].draw_offset, vector![36, 0]);
        assert_eq!(frames[37].draw_offset, vector![36, 0]);
        // The second orientation block is left untouched.
        assert_eq!(frames[39].draw_offset, vector![100, 0]);
    }

    #[test]
    fn test_rules_for_other_actors_do_not_touch_the_table() {
        let parts = [actor_data(0, 3, 1)];
        let mut frames = concatenated(&parts);

        apply_tweaks(&mut frames, ActorId::Snake, &parts, &NullGraphics);

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1].draw_offset, vector![1, 0]);
    }

    #[test]
    #[should_panic]
    fn test_rule_targeting_a_missing_frame_panics() {
        let parts = [actor_data(0, 5, 1), actor_data(1, 5, 1)];
        let mut frames = concatenated(&parts);

        apply_tweaks(&mut frames, ActorId::PilotLeft, &parts, &NullGraphics);
    }
}

use skiff_core::ActorId;

/// Number of frames making up one orientation block for actors whose frame
/// table is laid out as repeated, equally-sized blocks per orientation.
/// Absent means virtual and real indices coincide.
pub fn orientation_offset(id: ActorId) -> Option<usize> {
    use ActorId::*;

    Some(match id {
        PilotLeft | PilotRight => 39,
        Snake => 9,
        EyeballThrowerLeft => 10,
        Skeleton => 4,
        Spider => 13,
        BoxTurkey => 2,
        OgreSoldier => 4,
        GreenBird => 3,
        GreenCatLeft | GreenCatRight => 3,
        SpikedCreatureLeft | SpikedCreatureRight => 6,
        UnicycleBot => 4,
        ShipLeft | ShipRight | ShipAfterExitLeft | ShipAfterExitRight => 6,
        _ => return None,
    })
}

// These actors' art interleaves or reuses frames across the orientation and
// animation axes, so a uniform block stride cannot describe them. The maps
// list the real frame index for every virtual index.

static SPIDER_FRAME_MAP: [usize; 26] = [
    3, 4, 5, 9, 10, 11, 6, 8, 9, 14, 15, 12, 13, // left
    0, 1, 2, 6, 7, 8, 6, 8, 9, 12, 13, 14, 15, // right
];

static UNICYCLE_BOT_FRAME_MAP: [usize; 8] = [
    0, 5, 1, 2, // left
    0, 5, 3, 4, // right
];

static SHIP_FRAME_MAP: [usize; 12] = [
    0, 1, 10, 11, 8, 9, // left
    2, 3, 6, 7, 4, 5, // right
];

/// Explicit virtual-to-real frame translation table, for actors that have
/// one. Takes precedence over [`orientation_offset`].
pub fn frame_map(id: ActorId) -> Option<&'static [usize]> {
    use ActorId::*;

    match id {
        Spider => Some(&SPIDER_FRAME_MAP),
        UnicycleBot => Some(&UNICYCLE_BOT_FRAME_MAP),
        ShipLeft | ShipRight | ShipAfterExitLeft | ShipAfterExitRight => Some(&SHIP_FRAME_MAP),
        _ => None,
    }
}

use skiff_core::ActorId;

/// One display slot of a sprite: the real frame index it shows, or `None`
/// when the slot intentionally renders nothing because a custom render
/// path draws it instead.
pub type RenderSlot = Option<usize>;

/// The render slots a freshly created sprite starts out with. Game logic
/// owns the returned vector and rewrites it every tick to animate.
pub fn initial_frames_to_render(id: ActorId) -> Vec<RenderSlot> {
    use ActorId::*;

    match id {
        BomberPlane => vec![Some(3), Some(0), Some(1)],

        SentryRobotGenerator => vec![Some(0), Some(4)],

        GrabberClaw => vec![Some(1)],

        Spider => vec![Some(6)],

        GuardLeft => vec![Some(6)],

        GuardUsingTerminal => vec![Some(12)],

        BossEpisode1 => vec![Some(0), Some(2)],

        BossEpisode3 => vec![None, Some(1), Some(0)],

        BossEpisode4 => vec![Some(0), Some(1)],

        RocketElevator => vec![Some(5), Some(0)],

        // Drawn entirely by a custom render function.
        LavaFountain => vec![],

        RadarComputerTerminal => vec![Some(0), Some(1), Some(2), Some(3)],

        Container => vec![Some(0), Some(1)],

        ContainerCarrier => vec![Some(0), Some(2)],

        SuperForceField => vec![Some(0), Some(3)],

        _ => vec![Some(0)],
    }
}

use skiff_core::ActorId;

/// The ordered list of parts whose frames make up the composed sprite for
/// `id`. Most actors are their own single part; composite actors pull in
/// auxiliary layers that were authored as separate image sets, and a few
/// ids are pure aliases for another actor's art.
pub fn actor_parts(id: ActorId) -> Vec<ActorId> {
    use ActorId::*;

    match id {
        Hoverbot => vec![Hoverbot, HoverbotTeleportFx],

        PilotLeft | PilotRight => vec![PilotLeft, PilotRight],

        BonusOrb1 | BonusOrb2 | BonusOrb3 | BonusOrb4 => vec![id, BonusOrbShell],

        Teleporter1 => vec![Teleporter2],

        SlimeBlob => vec![SlimeBlob, SlimeBlobOnCeiling],

        EyeballThrowerLeft => vec![EyeballThrowerLeft, EyeballThrowerRight],

        BomberPlane => vec![BomberPlane, ClusterBomb],

        BlowingFan => vec![BlowingFan, BlowingFanThreads],

        MissileIntact => vec![MissileIntact, MissileExhaustFlame],

        GuardLeft | GuardUsingTerminal => vec![GuardRight],

        EnemyLaserShotLeft | EnemyLaserShotRight => vec![EnemyLaserShotRight],

        BoxTurkey => vec![Turkey],

        MessengerDrone1 | MessengerDrone2 | MessengerDrone3 | MessengerDrone4
        | MessengerDrone5 => vec![
            MessengerDroneBody,
            MessengerDronePart1,
            MessengerDronePart2,
            MessengerDronePart3,
            MessengerDroneFlame1,
            MessengerDroneFlame2,
            MessengerDroneFlame3,
            id,
        ],

        GreenCatLeft | GreenCatRight => vec![GreenCatLeft, GreenCatRight],

        SpikedCreatureLeft | SpikedCreatureRight => {
            vec![SpikedCreatureLeft, SpikedCreatureRight]
        }

        ShipLeft | ShipRight | ShipAfterExitLeft | ShipAfterExitRight => {
            vec![ShipLeft, ShipRight, ShipExhaustFlames]
        }

        ContainerCarrier => vec![ContainerCarrier, Container],

        _ => vec![id],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_the_singleton_list() {
        assert_eq!(actor_parts(ActorId::Snake), vec![ActorId::Snake]);
    }

    #[test]
    fn test_composite_actors_list_parts_in_frame_order() {
        assert_eq!(
            actor_parts(ActorId::BomberPlane),
            vec![ActorId::BomberPlane, ActorId::ClusterBomb]
        );
        assert_eq!(
            actor_parts(ActorId::ShipAfterExitRight),
            vec![
                ActorId::ShipLeft,
                ActorId::ShipRight,
                ActorId::ShipExhaustFlames
            ]
        );
    }

    #[test]
    fn test_variant_keeps_its_own_part_in_the_list() {
        let parts = actor_parts(ActorId::MessengerDrone3);
        assert_eq!(parts.len(), 8);
        assert_eq!(parts[0], ActorId::MessengerDroneBody);
        assert_eq!(parts[7], ActorId::MessengerDrone3);

        assert_eq!(
            actor_parts(ActorId::BonusOrb2),
            vec![ActorId::BonusOrb2, ActorId::BonusOrbShell]
        );
    }

    #[test]
    fn test_alias_actors_resolve_to_the_aliased_art() {
        assert_eq!(actor_parts(ActorId::Teleporter1), vec![ActorId::Teleporter2]);
        assert_eq!(actor_parts(ActorId::BoxTurkey), vec![ActorId::Turkey]);
    }
}

use skiff_core::ActorId;

// Coarse layering buckets, independent of the draw-order values declared
// in the asset files.
pub const PLAYER_PROJECTILE_DRAW_ORDER: i32 = 5;
pub const MUZZLE_FLASH_DRAW_ORDER: i32 = 6;
pub const EFFECT_DRAW_ORDER: i32 = 7;

/// Asset-declared draw orders are scaled up so that every declared value
/// owns a sub-range of the final key space, leaving room for fine
/// adjustments between actors sharing a declared value.
const SCALE_FACTOR: i32 = 10;

fn scale(draw_order: i32) -> i32 {
    draw_order * SCALE_FACTOR
}

/// The final render-layer sort key for an actor, given the base draw-order
/// value declared by its last loaded part.
pub fn adjusted_draw_order(id: ActorId, base_draw_order: i32) -> i32 {
    use ActorId::*;

    match id {
        RocketUp | RocketDown | RocketLeft | RocketRight | LaserShotHorizontal
        | LaserShotVertical | RegularShotHorizontal | RegularShotVertical | FlameShotUp
        | FlameShotDown | FlameShotLeft | FlameShotRight | ReactorFireLeft | ReactorFireRight => {
            scale(PLAYER_PROJECTILE_DRAW_ORDER)
        }

        MuzzleFlashUp | MuzzleFlashDown | MuzzleFlashLeft | MuzzleFlashRight => {
            scale(MUZZLE_FLASH_DRAW_ORDER)
        }

        Explosion1 | Explosion2 | ShotImpactFx | SmokePuffFx | SmokeCloudFx
        | WhiteCircleFlashFx | NuclearExplosion | FireBombFire | FlameThrowerFireLeft
        | FlameThrowerFireRight | HoverbotDebris1 | HoverbotDebris2 | WasteCanDebris1
        | WasteCanDebris2 | WasteCanSlime | ContainerDebris1 | ContainerDebris2
        | BonusOrbDebris1 | BonusOrbDebris2 | PilotDeathParticles | BioDebris | MissileDebris
        | EyeballProjectile | EnemyLaserMuzzleFlash1 | EnemyLaserMuzzleFlash2
        | GrabberClawDebris1 | GrabberClawDebris2 | YellowFireballFx | GreenFireballFx
        | BlueFireballFx | SpikedCreatureEyeFxLeft | SpikedCreatureEyeFxRight | StoneDebris1
        | StoneDebris2 | StoneDebris3 | StoneDebris4 | SpiderShakenOff | SpiderDebris
        | SpiderBlowingInWind | WindblownSpiderGenerator | OgreSoldierProjectile => {
            scale(EFFECT_DRAW_ORDER)
        }

        ScoreNumber100 | ScoreNumber500 | ScoreNumber2000 | ScoreNumber5000
        | ScoreNumber10000 => scale(EFFECT_DRAW_ORDER),

        // Make the bomb appear behind the plane that drops it.
        ClusterBomb => scale(base_draw_order) - 1,

        _ => scale(base_draw_order),
    }
}

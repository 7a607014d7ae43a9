use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Identifies one actor or visual-effect kind. Level data refers to actors
/// by these raw values, and every per-actor rule table in the sprite engine
/// dispatches on them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive,
)]
#[repr(u16)]
pub enum ActorId {
    // Player
    PilotLeft = 1,
    PilotRight = 2,
    PilotDeathParticles = 3,

    // Player weapons
    RocketUp = 10,
    RocketDown = 11,
    RocketLeft = 12,
    RocketRight = 13,
    LaserShotHorizontal = 14,
    LaserShotVertical = 15,
    RegularShotHorizontal = 16,
    RegularShotVertical = 17,
    FlameShotUp = 18,
    FlameShotDown = 19,
    FlameShotLeft = 20,
    FlameShotRight = 21,
    MuzzleFlashUp = 22,
    MuzzleFlashDown = 23,
    MuzzleFlashLeft = 24,
    MuzzleFlashRight = 25,

    // Vehicles
    ShipLeft = 30,
    ShipRight = 31,
    ShipAfterExitLeft = 32,
    ShipAfterExitRight = 33,
    ShipExhaustFlames = 34,
    BomberPlane = 35,
    ClusterBomb = 36,
    MissileIntact = 37,
    MissileExhaustFlame = 38,
    MissileDebris = 39,
    RocketElevator = 40,

    // Enemies
    Hoverbot = 50,
    HoverbotTeleportFx = 51,
    HoverbotDebris1 = 52,
    HoverbotDebris2 = 53,
    SlimeBlob = 54,
    SlimeBlobOnCeiling = 55,
    EyeballThrowerLeft = 56,
    EyeballThrowerRight = 57,
    EyeballProjectile = 58,
    Snake = 59,
    Skeleton = 60,
    Spider = 61,
    SpiderShakenOff = 62,
    SpiderDebris = 63,
    SpiderBlowingInWind = 64,
    WindblownSpiderGenerator = 65,
    UnicycleBot = 66,
    BoxTurkey = 67,
    Turkey = 68,
    GreenBird = 69,
    GreenCatLeft = 70,
    GreenCatRight = 71,
    SpikedCreatureLeft = 72,
    SpikedCreatureRight = 73,
    SpikedCreatureEyeFxLeft = 74,
    SpikedCreatureEyeFxRight = 75,
    StoneDebris1 = 76,
    StoneDebris2 = 77,
    StoneDebris3 = 78,
    StoneDebris4 = 79,

    // Guards and machinery
    GuardLeft = 80,
    GuardRight = 81,
    GuardUsingTerminal = 82,
    EnemyLaserShotLeft = 83,
    EnemyLaserShotRight = 84,
    EnemyLaserMuzzleFlash1 = 85,
    EnemyLaserMuzzleFlash2 = 86,
    OgreSoldier = 87,
    OgreSoldierProjectile = 88,
    SentryRobotGenerator = 89,
    GrabberClaw = 90,
    GrabberClawDebris1 = 91,
    GrabberClawDebris2 = 92,
    ContainerCarrier = 93,
    Container = 94,
    ContainerDebris1 = 95,
    ContainerDebris2 = 96,
    BlowingFan = 97,
    BlowingFanThreads = 98,

    // Drones and pickups
    MessengerDrone1 = 100,
    MessengerDrone2 = 101,
    MessengerDrone3 = 102,
    MessengerDrone4 = 103,
    MessengerDrone5 = 104,
    MessengerDroneBody = 105,
    MessengerDronePart1 = 106,
    MessengerDronePart2 = 107,
    MessengerDronePart3 = 108,
    MessengerDroneFlame1 = 109,
    MessengerDroneFlame2 = 110,
    MessengerDroneFlame3 = 111,
    BonusOrb1 = 112,
    BonusOrb2 = 113,
    BonusOrb3 = 114,
    BonusOrb4 = 115,
    BonusOrbShell = 116,
    BonusOrbDebris1 = 117,
    BonusOrbDebris2 = 118,

    // Level fixtures and effects
    Teleporter1 = 120,
    Teleporter2 = 121,
    ReactorFireLeft = 122,
    ReactorFireRight = 123,
    RadarComputerTerminal = 124,
    SuperForceField = 125,
    LavaFountain = 126,
    Explosion1 = 130,
    Explosion2 = 131,
    ShotImpactFx = 132,
    SmokePuffFx = 133,
    SmokeCloudFx = 134,
    WhiteCircleFlashFx = 135,
    NuclearExplosion = 136,
    FireBombFire = 137,
    FlameThrowerFireLeft = 138,
    FlameThrowerFireRight = 139,
    WasteCanDebris1 = 140,
    WasteCanDebris2 = 141,
    WasteCanSlime = 142,
    BioDebris = 143,
    YellowFireballFx = 144,
    GreenFireballFx = 145,
    BlueFireballFx = 146,

    // Bosses
    BossEpisode1 = 150,
    BossEpisode2 = 151,
    BossEpisode3 = 152,
    BossEpisode4 = 153,

    // Score numbers
    ScoreNumber100 = 160,
    ScoreNumber500 = 161,
    ScoreNumber2000 = 162,
    ScoreNumber5000 = 163,
    ScoreNumber10000 = 164,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value_round_trip() {
        let id = ActorId::try_from(35u16).unwrap();
        assert_eq!(id, ActorId::BomberPlane);
        assert_eq!(u16::from(id), 35);
    }

    #[test]
    fn test_unknown_raw_value_is_rejected() {
        assert!(ActorId::try_from(999u16).is_err());
    }
}

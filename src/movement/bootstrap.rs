//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackTuning, AttackVolume, AttackVolumes, CardinalDirection};
use crate::movement::{Motor, MovementTuning, Player, PlayerSprite};
use crate::sprites::{AnimationManifest, SpriteAnimator};
use crate::states::CharacterMachine;
use crate::surface::{GameLayer, SurfaceContacts};

const CAPSULE_RADIUS: f32 = 0.4;
const CAPSULE_LENGTH: f32 = 0.8;
const SPAWN_POINT: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Spawn the player body, its sprite, and one disabled attack volume per
/// direction. Runs after config and manifest have loaded.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    manifest: Res<AnimationManifest>,
    attack_tuning: Res<AttackTuning>,
) {
    let player = commands
        .spawn((
            // Identity & state
            (
                Player,
                SurfaceContacts::default(),
                Motor::new(&tuning.profiles),
                CharacterMachine::new(),
                AttackVolumes::default(),
                SpriteAnimator::new(manifest.clips.clone(), &manifest.initial),
            ),
            Transform::from_translation(SPAWN_POINT),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(CAPSULE_RADIUS, CAPSULE_LENGTH),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // States apply their own gravity
                Friction::new(tuning.profiles.jump_standard.friction),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Terrain, GameLayer::Prop]),
            ),
        ))
        .id();

    commands.spawn((
        PlayerSprite,
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(
                CAPSULE_RADIUS * 2.0,
                CAPSULE_LENGTH + CAPSULE_RADIUS * 2.0,
            )),
            ..default()
        },
        Transform::default(),
        ChildOf(player),
    ));

    for direction in CardinalDirection::ALL {
        let size = direction.hitbox_size(attack_tuning.length, attack_tuning.width);
        let offset = direction.to_offset(attack_tuning.reach);

        commands.spawn((
            AttackVolume::new(player, direction, attack_tuning.hit_force),
            Transform::from_translation(offset.extend(0.0)),
            Collider::rectangle(size.x, size.y),
            Sensor,
            ColliderDisabled,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::PlayerHitbox, [GameLayer::Prop]),
            ChildOf(player),
        ));
    }

    info!(
        "Spawned player {:?} at {:?} with {} clips",
        player,
        SPAWN_POINT,
        manifest.clips.len()
    );
}

//! Combat domain: attack volume activation and knockback.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackVolume, AttackVolumes, knockback_impulse};

/// Enable exactly the volume its owner marked active; everything else stays
/// disabled. Each enable starts a fresh hit list.
pub(crate) fn sync_attack_volumes(
    mut commands: Commands,
    owners: Query<&AttackVolumes>,
    mut volumes: Query<(Entity, &mut AttackVolume, Has<ColliderDisabled>)>,
) {
    for (entity, mut volume, disabled) in &mut volumes {
        let should_be_active = owners
            .get(volume.owner)
            .is_ok_and(|owner| owner.is_active(volume.direction));

        if should_be_active && disabled {
            volume.reset_hits();
            commands.entity(entity).remove::<ColliderDisabled>();
            debug!("Attack volume {:?} enabled", volume.direction);
        } else if !should_be_active && !disabled {
            volume.reset_hits();
            commands.entity(entity).insert(ColliderDisabled);
        }
    }
}

/// Knock back every dynamic body an active volume starts touching, at the
/// point of the body's collider closest to the volume.
pub(crate) fn apply_attack_knockback(
    mut collision_events: MessageReader<CollisionStart>,
    mut volume_query: Query<(&mut AttackVolume, &GlobalTransform)>,
    owner_query: Query<&GlobalTransform>,
    collider_query: Query<(&Collider, &GlobalTransform)>,
    body_query: Query<(&RigidBody, &GlobalTransform)>,
    mut forces_query: Query<Forces>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2, event.body2),
            (event.collider2, event.collider1, event.body1),
        ];

        for (volume_entity, target_collider, target_body) in pairs {
            let Ok((mut volume, volume_transform)) = volume_query.get_mut(volume_entity) else {
                continue;
            };

            let target = target_body.unwrap_or(target_collider);
            let Ok((rigid_body, target_transform)) = body_query.get(target) else {
                continue;
            };
            if !rigid_body.is_dynamic() {
                continue;
            }
            if !volume.register_hit(target) {
                continue;
            }

            let Ok(owner_transform) = owner_query.get(volume.owner) else {
                continue;
            };

            let impulse = knockback_impulse(
                owner_transform.translation().truncate(),
                target_transform.translation().truncate(),
                volume.hit_force,
                volume.direction.to_vec2(),
            );

            let volume_center = volume_transform.translation().truncate();
            let point = collider_query
                .get(target_collider)
                .map(|(collider, transform)| {
                    let (_, rotation, translation) = transform.to_scale_rotation_translation();
                    let angle = rotation.to_euler(EulerRot::XYZ).2;
                    let (closest, _) = collider.project_point(
                        translation.truncate(),
                        Rotation::radians(angle),
                        volume_center,
                        true,
                    );
                    closest
                })
                .unwrap_or(target_transform.translation().truncate());

            if let Ok(mut forces) = forces_query.get_mut(target) {
                forces.apply_linear_impulse_at_point(impulse, point);
                debug!(
                    "Attack {:?} hit {:?}: impulse={:?} at {:?}",
                    volume.direction, target, impulse, point
                );
            }
        }
    }
}

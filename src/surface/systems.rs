//! Surface domain: feeding physics contacts into the aggregator.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementTuning, Player};
use crate::surface::{Surface, SurfaceContacts};

/// Report every touching contact point from the last physics step.
pub(crate) fn report_contacts(
    collisions: Collisions,
    tuning: Res<MovementTuning>,
    surfaces: Query<&Surface>,
    mut players: Query<(Entity, &mut SurfaceContacts), With<Player>>,
) {
    for (entity, mut contacts) in &mut players {
        for pair in collisions.collisions_with(entity) {
            if !pair.is_touching() {
                continue;
            }

            // Manifold normals point from collider1 into collider2; we want
            // them pointing out of the surface toward the player.
            let (other, sign) = if pair.collider1 == entity {
                (pair.collider2, -1.0)
            } else {
                (pair.collider1, 1.0)
            };

            let surface = surfaces.get(other).copied().unwrap_or_default();

            for manifold in &pair.manifolds {
                let normal = manifold.normal * sign;
                for _point in manifold.points.iter() {
                    contacts.report(normal, &surface, &tuning.slopes.grips);
                }
            }
        }
    }
}

pub(crate) fn prime_contacts(mut players: Query<&mut SurfaceContacts, With<Player>>) {
    for mut contacts in &mut players {
        contacts.prime();
    }
}

pub(crate) fn release_contacts(mut players: Query<&mut SurfaceContacts, With<Player>>) {
    for mut contacts in &mut players {
        contacts.release();
    }
}

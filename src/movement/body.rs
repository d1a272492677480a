//! Movement domain: the narrow contract between the character core and the
//! physics engine, plus its avian2d implementation.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::movement::PhysicsProfile;
use crate::surface::{GameLayer, Surface};

/// First collider hit by a ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub distance: f32,
    pub normal: Vec2,
    /// Metadata of the collider that was hit, or the default if it has none.
    pub surface: Surface,
}

/// Everything the character core needs from the controlled rigid body.
///
/// Impulses are expressed as velocity changes, independent of the body's mass.
pub trait CharacterBody {
    fn position(&self) -> Vec2;

    fn velocity(&self) -> Vec2;

    fn apply_impulse(&mut self, impulse: Vec2);

    /// Cast a ray against level geometry. `direction` need not be normalized.
    fn cast_ray(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<SurfaceHit>;

    /// Swap the body's material to match the given profile.
    fn set_physics_profile(&mut self, profile: &PhysicsProfile);
}

/// Ray queries against terrain, resolving the surface metadata of each hit.
#[derive(SystemParam)]
pub struct TerrainProbe<'w, 's> {
    spatial: SpatialQuery<'w, 's>,
    surfaces: Query<'w, 's, &'static Surface>,
}

impl TerrainProbe<'_, '_> {
    pub fn cast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<SurfaceHit> {
        let direction = Dir2::new(direction).ok()?;
        let filter = SpatialQueryFilter::from_mask(GameLayer::Terrain);

        let hit = self
            .spatial
            .cast_ray(origin, direction, max_distance, true, &filter)?;

        Some(SurfaceHit {
            distance: hit.distance,
            normal: hit.normal,
            surface: self.surfaces.get(hit.entity).copied().unwrap_or_default(),
        })
    }
}

/// [`CharacterBody`] backed by avian2d components for a single tick.
pub struct AvianBody<'a, 'w, 's> {
    pub position: Vec2,
    pub velocity: &'a mut LinearVelocity,
    pub friction: &'a mut Friction,
    pub probe: &'a TerrainProbe<'w, 's>,
}

impl CharacterBody for AvianBody<'_, '_, '_> {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse;
    }

    fn cast_ray(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<SurfaceHit> {
        self.probe.cast(origin, direction, max_distance)
    }

    fn set_physics_profile(&mut self, profile: &PhysicsProfile) {
        *self.friction = Friction::new(profile.friction);
    }
}

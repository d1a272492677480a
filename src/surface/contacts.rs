//! Surface domain: per-tick aggregation of collision contacts.

use bevy::prelude::*;

use crate::surface::{GripAngles, Surface};

/// Contacts with a normal.y above this are floors.
pub const FLOOR_THRESHOLD: f32 = 0.1;
/// Contacts with a normal.y below this are ceilings and are ignored.
pub const CEIL_THRESHOLD: f32 = -0.1;

/// Accumulated floor contacts of one stability class.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct GroundBucket {
    count: u32,
    normal: Vec2,
    slope_angle_threshold: f32,
    surface_angle: f32,
}

impl GroundBucket {
    fn accumulate(&mut self, normal: Vec2, grip_angle: f32) {
        self.count += 1;
        self.normal += normal;
        self.slope_angle_threshold += grip_angle;
    }

    fn prime(&mut self) {
        self.normal = self.normal.try_normalize().unwrap_or(Vec2::Y);
        self.slope_angle_threshold = if self.count > 0 {
            self.slope_angle_threshold / self.count as f32
        } else {
            0.0
        };
        self.surface_angle = self.normal.angle_to(Vec2::Y).abs().to_degrees();
    }
}

/// Classifies every contact reported during a physics step into stable
/// ground, unstable ground, and walls.
///
/// Lifecycle per fixed tick: `report*` during/after the physics step, then
/// [`prime`](Self::prime), then the state machine reads it, then
/// [`release`](Self::release).
#[derive(Component, Debug, Clone, Default)]
pub struct SurfaceContacts {
    stable: GroundBucket,
    unstable: GroundBucket,
    wall_count: u32,
    wall_normal: Vec2,
}

impl SurfaceContacts {
    /// Report one contact against a surface. Surfaces flagged
    /// `ignore_contacts` are skipped entirely.
    pub fn report(&mut self, normal: Vec2, surface: &Surface, grips: &GripAngles) {
        if surface.ignore_contacts {
            return;
        }

        self.report_contact(normal, grips.fall_angle(surface.grip));
    }

    /// Classify a contact normal given the grip angle (degrees) of its surface.
    pub fn report_contact(&mut self, normal: Vec2, grip_angle: f32) {
        if normal.y > FLOOR_THRESHOLD {
            let threshold = grip_angle.to_radians().cos();

            if normal.y >= threshold {
                self.stable.accumulate(normal, grip_angle);
            } else {
                self.unstable.accumulate(normal, grip_angle);
            }
        } else if normal.y >= CEIL_THRESHOLD {
            self.wall_count += 1;
            self.wall_normal += normal;
        }
        // Ceilings fall through untouched
    }

    /// Average everything reported since the last release.
    pub fn prime(&mut self) {
        self.stable.prime();
        self.unstable.prime();
        self.wall_normal = self.wall_normal.try_normalize().unwrap_or(Vec2::Y);
    }

    /// Clear all accumulators for the next physics step.
    pub fn release(&mut self) {
        *self = Self::default();
    }

    /// At least one contact with ground we can stand on.
    pub fn grounded(&self) -> bool {
        self.stable.count > 0
    }

    /// Only ground that is too steep to stand on.
    pub fn unstable(&self) -> bool {
        !self.grounded() && self.unstable.count > 0
    }

    /// Any ground contact, stable or not.
    pub fn contacting_surface(&self) -> bool {
        self.grounded() || self.unstable()
    }

    pub fn airborne(&self) -> bool {
        !self.grounded() && !self.unstable()
    }

    pub fn contacting_wall(&self) -> bool {
        self.wall_count > 0
    }

    pub fn wall_normal(&self) -> Vec2 {
        self.wall_normal
    }

    /// Normal of the ground we are on, preferring stable contacts. World up
    /// when airborne.
    pub fn surface_normal(&self) -> Vec2 {
        if self.grounded() {
            self.stable.normal
        } else {
            self.unstable.normal
        }
    }

    /// Angle (degrees) between the current surface normal and world up.
    pub fn surface_angle(&self) -> f32 {
        if self.grounded() {
            self.stable.surface_angle
        } else {
            self.unstable.surface_angle
        }
    }

    /// Grip angle (degrees) of the current surface.
    pub fn slope_angle_threshold(&self) -> f32 {
        if self.grounded() {
            self.stable.slope_angle_threshold
        } else {
            self.unstable.slope_angle_threshold
        }
    }

    pub fn stable_count(&self) -> u32 {
        self.stable.count
    }

    pub fn unstable_count(&self) -> u32 {
        self.unstable.count
    }

    pub fn wall_count(&self) -> u32 {
        self.wall_count
    }

    /// Project a vector onto the current surface. Not renormalized.
    pub fn project(&self, vector: Vec2) -> Vec2 {
        project_on_plane(self.surface_normal(), vector)
    }

    /// Project a vector onto the current surface, keeping its original length.
    pub fn align(&self, vector: Vec2) -> Vec2 {
        project_on_plane_rescaled(self.surface_normal(), vector)
    }
}

/// Remove the component of `vector` along `normal` (assumed unit length).
pub fn project_on_plane(normal: Vec2, vector: Vec2) -> Vec2 {
    vector - normal * vector.dot(normal)
}

/// [`project_on_plane`], rescaled to the input's magnitude.
pub fn project_on_plane_rescaled(normal: Vec2, vector: Vec2) -> Vec2 {
    project_on_plane(normal, vector).normalize_or_zero() * vector.length()
}

//! Surface domain: tests for contact classification and priming.

use bevy::prelude::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Grip, GripAngles, Surface, SurfaceContacts, project_on_plane_rescaled};

fn slope_normal(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.sin(), radians.cos())
}

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-5
}

// -----------------------------------------------------------------------------
// Classification tests
// -----------------------------------------------------------------------------

#[test]
fn test_flat_floor_is_stable() {
    let mut contacts = SurfaceContacts::default();
    contacts.report(Vec2::Y, &Surface::default(), &GripAngles::default());
    contacts.prime();

    assert!(contacts.grounded());
    assert!(!contacts.unstable());
    assert!(!contacts.airborne());
    assert_eq!(contacts.surface_normal(), Vec2::Y);
    assert_eq!(contacts.surface_angle(), 0.0);
    assert_eq!(contacts.slope_angle_threshold(), 30.0);
}

#[test]
fn test_slope_steeper_than_grip_is_unstable() {
    let grips = GripAngles::default();
    let mut contacts = SurfaceContacts::default();
    contacts.report(slope_normal(40.0), &Surface::default(), &grips);
    contacts.prime();

    assert!(!contacts.grounded());
    assert!(contacts.unstable());
    assert!(contacts.contacting_surface());
    assert!((contacts.surface_angle() - 40.0).abs() < 1e-3);
    assert_eq!(contacts.slope_angle_threshold(), 30.0);
}

#[test]
fn test_grip_changes_classification() {
    let grips = GripAngles::default();
    let normal = slope_normal(40.0);

    let mut grippy = SurfaceContacts::default();
    grippy.report(normal, &Surface::with_grip(Grip::Grippy), &grips);
    assert_eq!(grippy.stable_count(), 1);

    let mut slippery = SurfaceContacts::default();
    slippery.report(slope_normal(25.0), &Surface::with_grip(Grip::Slippery), &grips);
    assert_eq!(slippery.unstable_count(), 1);

    let mut instant = SurfaceContacts::default();
    instant.report(slope_normal(5.0), &Surface::with_grip(Grip::InstantSlide), &grips);
    assert_eq!(instant.stable_count(), 1, "90 degree grip accepts any floor");
}

#[test]
fn test_wall_and_ceiling_bands() {
    let mut contacts = SurfaceContacts::default();
    contacts.report_contact(Vec2::X, 30.0);
    contacts.report_contact(Vec2::new(0.995, 0.0998).normalize(), 30.0);
    contacts.report_contact(Vec2::NEG_Y, 30.0);
    contacts.prime();

    assert_eq!(contacts.wall_count(), 2);
    assert!(contacts.contacting_wall());
    assert!(contacts.airborne(), "ceilings never count as ground");
    assert!(contacts.wall_normal().x > 0.99);
}

#[test]
fn test_ignored_surface_never_changes_buckets() {
    let grips = GripAngles::default();
    let ignored = Surface {
        ignore_contacts: true,
        ..Surface::default()
    };

    let mut contacts = SurfaceContacts::default();
    for normal in [Vec2::Y, Vec2::X, slope_normal(60.0), Vec2::NEG_Y] {
        contacts.report(normal, &ignored, &grips);
    }
    contacts.prime();

    assert_eq!(contacts.stable_count(), 0);
    assert_eq!(contacts.unstable_count(), 0);
    assert_eq!(contacts.wall_count(), 0);
    assert!(contacts.airborne());
}

// -----------------------------------------------------------------------------
// Priming and release tests
// -----------------------------------------------------------------------------

#[test]
fn test_prime_averages_stable_normals() {
    let normals = [slope_normal(10.0), slope_normal(-5.0), Vec2::Y];
    let mut contacts = SurfaceContacts::default();
    for normal in normals {
        contacts.report_contact(normal, 30.0);
    }
    contacts.prime();

    let expected = normals.iter().copied().sum::<Vec2>().normalize();
    assert_eq!(contacts.stable_count(), 3);
    assert!(approx(contacts.surface_normal(), expected));
}

#[test]
fn test_prime_averages_grip_angles() {
    let grips = GripAngles::default();
    let mut contacts = SurfaceContacts::default();
    contacts.report(Vec2::Y, &Surface::with_grip(Grip::Slippery), &grips);
    contacts.report(Vec2::Y, &Surface::with_grip(Grip::Grippy), &grips);
    contacts.prime();

    assert!((contacts.slope_angle_threshold() - 32.5).abs() < 1e-5);
}

#[test]
fn test_empty_buckets_prime_to_up_and_zero() {
    let mut contacts = SurfaceContacts::default();
    contacts.prime();

    assert_eq!(contacts.surface_normal(), Vec2::Y);
    assert_eq!(contacts.surface_angle(), 0.0);
    assert_eq!(contacts.slope_angle_threshold(), 0.0);
    assert!(!contacts.slope_angle_threshold().is_nan());
}

#[test]
fn test_release_clears_everything() {
    let mut contacts = SurfaceContacts::default();
    contacts.report_contact(Vec2::Y, 30.0);
    contacts.report_contact(Vec2::X, 30.0);
    contacts.prime();
    contacts.release();
    contacts.prime();

    assert!(contacts.airborne());
    assert!(!contacts.contacting_wall());
    assert_eq!(contacts.surface_normal(), Vec2::Y);
}

#[test]
fn test_stable_contact_wins_over_unstable() {
    let mut contacts = SurfaceContacts::default();
    contacts.report_contact(slope_normal(50.0), 30.0);
    contacts.report_contact(Vec2::Y, 30.0);
    contacts.prime();

    assert!(contacts.grounded());
    assert!(!contacts.unstable());
    assert_eq!(contacts.surface_normal(), Vec2::Y);
}

#[test]
fn test_ground_states_are_exclusive_and_exhaustive() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..500 {
        let mut contacts = SurfaceContacts::default();
        for _ in 0..rng.random_range(0..6) {
            let angle: f32 = rng.random_range(-180.0..180.0);
            let normal = Vec2::from_angle(angle.to_radians());
            contacts.report_contact(normal, rng.random_range(0.0..90.0));
        }
        contacts.prime();

        let states = [contacts.grounded(), contacts.unstable(), contacts.airborne()];
        assert_eq!(states.iter().filter(|s| **s).count(), 1, "{contacts:?}");
        assert!(contacts.surface_normal().is_finite());
        assert!(contacts.slope_angle_threshold().is_finite());
    }
}

// -----------------------------------------------------------------------------
// Projection helpers
// -----------------------------------------------------------------------------

#[test]
fn test_rescaled_projection_keeps_magnitude() {
    let normal = slope_normal(30.0);
    let aligned = project_on_plane_rescaled(normal, Vec2::X);

    assert!((aligned.length() - 1.0).abs() < 1e-5);
    assert!(aligned.dot(normal).abs() < 1e-5);
    assert!(aligned.x > 0.0 && aligned.y < 0.0);
}

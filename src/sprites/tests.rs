//! Sprites domain: tests for clip playback and the manifest.

use bevy::prelude::Vec2;

use super::{AnimationError, AnimationManifest, LocomotionParams, ManifestError, SpriteAnimator};

fn animator() -> SpriteAnimator {
    let manifest = AnimationManifest::default();
    SpriteAnimator::new(manifest.clips, &manifest.initial)
}

// -----------------------------------------------------------------------------
// Playback tests
// -----------------------------------------------------------------------------

#[test]
fn test_unknown_clip_is_rejected_and_ignored() {
    let mut animator = animator();
    animator.set_animation("Fall");

    assert_eq!(
        animator.try_play("Moonwalk"),
        Err(AnimationError::UnknownClip("Moonwalk".to_string()))
    );
    animator.set_animation("Moonwalk");
    assert_eq!(animator.current(), "Fall");
}

#[test]
fn test_replaying_current_clip_keeps_progress() {
    let mut animator = animator();
    animator.set_animation("Fall");
    animator.advance(0.1);
    animator.set_animation("Fall");

    assert!((animator.elapsed() - 0.1).abs() < 1e-6);
}

#[test]
fn test_one_shot_clip_follows_up() {
    let mut animator = animator();
    animator.set_animation("LandStationary");
    animator.advance(0.1);
    assert!(animator.is_playing("LandStationary"));

    animator.advance(0.15);
    assert!(animator.is_playing("Stand"));
    assert_eq!(animator.elapsed(), 0.0);
}

#[test]
fn test_one_shot_without_follow_up_holds_last_frame() {
    let mut animator = animator();
    animator.set_animation("Jump");
    animator.advance(1.0);

    assert!(animator.is_playing("Jump"));
    assert_eq!(animator.elapsed(), animator.clip_length("Jump").unwrap());
}

#[test]
fn test_playback_speed_scales_time() {
    let mut animator = animator();
    animator.set_animation("Run");
    animator.set_speed(0.5);
    animator.advance(0.2);

    assert!((animator.elapsed() - 0.1).abs() < 1e-6);
}

#[test]
fn test_zero_speed_freezes_playback() {
    let mut animator = animator();
    animator.set_animation("LandMoving");
    animator.set_speed(0.0);
    animator.advance(5.0);

    assert!(animator.is_playing("LandMoving"));
}

// -----------------------------------------------------------------------------
// Locomotion resolution
// -----------------------------------------------------------------------------

#[test]
fn test_locomotion_follows_params() {
    let mut animator = animator();
    animator.set_animation("Stand");

    animator.set_params(LocomotionParams {
        moving_intentionally: true,
        pushing: false,
    });
    animator.resolve_locomotion();
    assert!(animator.is_playing("Run"));

    animator.set_params(LocomotionParams {
        moving_intentionally: true,
        pushing: true,
    });
    animator.resolve_locomotion();
    assert!(animator.is_playing("Push"));

    animator.set_params(LocomotionParams::default());
    animator.resolve_locomotion();
    assert!(animator.is_playing("Stand"));
}

#[test]
fn test_locomotion_leaves_other_clips_alone() {
    let mut animator = animator();
    animator.set_animation("Slide");
    animator.set_params(LocomotionParams {
        moving_intentionally: true,
        pushing: false,
    });
    animator.resolve_locomotion();

    assert!(animator.is_playing("Slide"));
}

// -----------------------------------------------------------------------------
// Facing and alignment
// -----------------------------------------------------------------------------

#[test]
fn test_face_towards_flips_only_for_left() {
    let mut animator = animator();
    animator.face_towards(Vec2::NEG_X);
    assert!(animator.flip_x());

    animator.face_towards(Vec2::Y);
    assert!(!animator.flip_x(), "vertical directions face right");

    animator.face_towards(Vec2::new(-0.9, 0.1).normalize());
    assert!(animator.flip_x());
}

#[test]
fn test_align_with_surface_normal() {
    let mut animator = animator();
    animator.align_with(Vec2::Y);
    assert_eq!(animator.alignment(), 0.0);

    let normal = Vec2::new(-1.0, 1.0).normalize();
    animator.align_with(normal);
    assert!((animator.alignment() - 45f32.to_radians()).abs() < 1e-5);

    animator.reset_alignment();
    assert_eq!(animator.alignment(), 0.0);
}

// -----------------------------------------------------------------------------
// Manifest tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_manifest_matches_builtin() {
    let shipped = AnimationManifest::from_json_str(
        include_str!("../../assets/sprites/animations.json"),
        "animations.json",
    )
    .expect("shipped manifest parses");

    assert_eq!(shipped, AnimationManifest::default());
    assert!(shipped.dangling_follow_ups().is_empty());
}

#[test]
fn test_manifest_requires_initial_clip() {
    let json = r#"{ "version": 1, "initial": "Idle", "clips": { "Run": { "length": 0.5 } } }"#;
    let result = AnimationManifest::from_json_str(json, "inline");

    assert!(matches!(result, Err(ManifestError::MissingInitial(name)) if name == "Idle"));
}

#[test]
fn test_manifest_parse_error_names_file() {
    let err = AnimationManifest::from_json_str("{ nope", "broken.json").unwrap_err();

    assert!(matches!(err, ManifestError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_dangling_follow_up_is_reported() {
    let json = r#"{
        "version": 2,
        "initial": "Stand",
        "clips": {
            "Stand": { "length": 1.0, "looping": true },
            "Land": { "length": 0.2, "next": "Idle" }
        }
    }"#;
    let manifest = AnimationManifest::from_json_str(json, "inline").unwrap();

    assert_eq!(manifest.dangling_follow_ups(), vec![("Land", "Idle")]);
}

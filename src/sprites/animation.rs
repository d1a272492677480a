//! Sprites domain: clip playback for the character's sprite.
//!
//! The character states drive [`SpriteAnimator`] by clip name. The animator
//! owns the clip table, advances time, follows up finished one-shot clips, and
//! resolves the locomotion family (Stand/Run/Push) from its parameters.

use std::collections::HashMap;
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::PlayerSprite;

pub const CLIP_STAND: &str = "Stand";
pub const CLIP_RUN: &str = "Run";
pub const CLIP_PUSH: &str = "Push";

/// Definition of a single animation clip.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClipDef {
    /// Length in seconds at playback speed 1.
    pub length: f32,
    #[serde(default)]
    pub looping: bool,
    /// Clip to switch to when a one-shot clip finishes.
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    UnknownClip(String),
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::UnknownClip(name) => {
                write!(f, "animator does not contain clip '{}'", name)
            }
        }
    }
}

impl std::error::Error for AnimationError {}

/// Parameters read by locomotion resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocomotionParams {
    pub moving_intentionally: bool,
    pub pushing: bool,
}

/// Playback state of the character sprite.
#[derive(Component, Debug, Clone)]
pub struct SpriteAnimator {
    clips: HashMap<String, ClipDef>,
    current: String,
    elapsed: f32,
    speed: f32,
    flip_x: bool,
    /// Sprite rotation around Z, in radians.
    alignment: f32,
    params: LocomotionParams,
}

impl SpriteAnimator {
    /// Build an animator over `clips`, starting on `initial`. An unknown
    /// initial clip leaves the animator on it anyway; every later `play`
    /// still validates names.
    pub fn new(clips: HashMap<String, ClipDef>, initial: &str) -> Self {
        Self {
            clips,
            current: initial.to_string(),
            elapsed: 0.0,
            speed: 1.0,
            flip_x: false,
            alignment: 0.0,
            params: LocomotionParams::default(),
        }
    }

    /// Switch to a named clip. Switching to the clip already playing keeps its
    /// progress.
    pub fn try_play(&mut self, name: &str) -> Result<(), AnimationError> {
        if !self.clips.contains_key(name) {
            return Err(AnimationError::UnknownClip(name.to_string()));
        }

        if self.current != name {
            self.current = name.to_string();
            self.elapsed = 0.0;
        }
        Ok(())
    }

    /// [`try_play`](Self::try_play), logging unknown clips instead of failing.
    pub fn set_animation(&mut self, name: &str) {
        if let Err(err) = self.try_play(name) {
            error!("{}", err);
        }
    }

    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    pub fn clip_length(&self, name: &str) -> Option<f32> {
        self.clips.get(name).map(|clip| clip.length)
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_playing(&self, name: &str) -> bool {
        self.current == name
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn flip_x(&self) -> bool {
        self.flip_x
    }

    /// Flip the sprite to face along `direction`. Sprites face right unflipped.
    pub fn face_towards(&mut self, direction: Vec2) {
        self.flip_x = Vec2::X.dot(direction) < 0.0;
    }

    pub fn alignment(&self) -> f32 {
        self.alignment
    }

    /// Rotate the sprite so its up axis follows `normal`.
    pub fn align_with(&mut self, normal: Vec2) {
        self.alignment = (-normal.x).atan2(normal.y);
    }

    pub fn reset_alignment(&mut self) {
        self.alignment = 0.0;
    }

    pub fn params(&self) -> LocomotionParams {
        self.params
    }

    pub fn set_params(&mut self, params: LocomotionParams) {
        self.params = params;
    }

    /// Advance playback by `dt` seconds, following up finished one-shot clips.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt * self.speed;

        let Some(clip) = self.clips.get(&self.current) else {
            return;
        };

        if clip.looping {
            if clip.length > 0.0 {
                self.elapsed %= clip.length;
            }
            return;
        }

        if self.elapsed >= clip.length {
            if let Some(next) = clip.next.clone() {
                self.set_animation(&next);
            } else {
                self.elapsed = clip.length;
            }
        }
    }

    /// Pick the locomotion clip matching the current parameters, if a
    /// locomotion clip is playing.
    pub fn resolve_locomotion(&mut self) {
        if !is_locomotion(&self.current) {
            return;
        }

        let target = if self.params.pushing {
            CLIP_PUSH
        } else if self.params.moving_intentionally {
            CLIP_RUN
        } else {
            CLIP_STAND
        };

        if self.current != target && self.has_clip(target) {
            self.set_animation(target);
        }
    }
}

fn is_locomotion(name: &str) -> bool {
    matches!(name, CLIP_STAND | CLIP_RUN | CLIP_PUSH)
}

pub(crate) fn advance_animations(time: Res<Time>, mut animators: Query<&mut SpriteAnimator>) {
    let dt = time.delta_secs();

    for mut animator in &mut animators {
        animator.advance(dt);
        animator.resolve_locomotion();
    }
}

/// Copy flip and alignment onto the visible sprite child.
pub(crate) fn sync_sprite_visuals(
    animators: Query<(&SpriteAnimator, &Children)>,
    mut sprites: Query<(&mut Sprite, &mut Transform), With<PlayerSprite>>,
) {
    for (animator, children) in &animators {
        for child in children.iter() {
            let Ok((mut sprite, mut transform)) = sprites.get_mut(child) else {
                continue;
            };

            sprite.flip_x = animator.flip_x();
            transform.rotation = Quat::from_rotation_z(animator.alignment());
        }
    }
}

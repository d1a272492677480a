//! Sprites domain: the animation clip manifest.
//!
//! Loaded from `assets/sprites/animations.json`. The built-in table mirrors
//! the shipped file so the game runs without assets.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use super::ClipDef;

pub const MANIFEST_PATH: &str = "assets/sprites/animations.json";

/// Resource containing the character's clip table.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AnimationManifest {
    pub version: u32,
    /// Clip the animator starts on.
    pub initial: String,
    pub clips: HashMap<String, ClipDef>,
}

#[derive(Debug)]
pub enum ManifestError {
    Io { path: String, source: std::io::Error },
    Parse { path: String, source: serde_json::Error },
    MissingInitial(String),
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Io { path, source } => {
                write!(f, "failed to read animation manifest {}: {}", path, source)
            }
            ManifestError::Parse { path, source } => {
                write!(f, "failed to parse animation manifest {}: {}", path, source)
            }
            ManifestError::MissingInitial(name) => {
                write!(f, "initial clip '{}' is not in the manifest", name)
            }
        }
    }
}

impl std::error::Error for ManifestError {}

/// Raw manifest JSON structure.
#[derive(Deserialize)]
struct ManifestJson {
    version: u32,
    initial: String,
    clips: HashMap<String, ClipDef>,
}

impl Default for AnimationManifest {
    fn default() -> Self {
        let clip = |length: f32, looping: bool, next: Option<&str>| ClipDef {
            length,
            looping,
            next: next.map(str::to_string),
        };

        let clips = [
            ("Stand", clip(0.8, true, None)),
            ("Run", clip(0.6, true, None)),
            ("RunDifficult", clip(0.6, true, None)),
            ("Push", clip(0.8, true, None)),
            ("Jump", clip(0.3, false, None)),
            ("WallJump", clip(0.3, false, None)),
            ("Fall", clip(0.4, true, None)),
            ("LandMoving", clip(0.15, false, Some("Run"))),
            ("LandStationary", clip(0.2, false, Some("Stand"))),
            ("Slide", clip(0.4, true, None)),
            ("Getup", clip(0.35, false, Some("Stand"))),
            ("WallSlide", clip(0.4, true, None)),
            ("AttackUp", clip(0.25, false, None)),
            ("AttackUpAir", clip(0.25, false, None)),
            ("AttackSide", clip(0.25, false, None)),
            ("AttackSideAir", clip(0.25, false, None)),
            ("AttackDown", clip(0.25, false, None)),
            ("AttackDownAir", clip(0.3, false, None)),
        ]
        .into_iter()
        .map(|(name, def)| (name.to_string(), def))
        .collect();

        Self {
            version: 1,
            initial: "Stand".to_string(),
            clips,
        }
    }
}

impl AnimationManifest {
    pub fn from_json_str(contents: &str, path: &str) -> Result<Self, ManifestError> {
        let json: ManifestJson =
            serde_json::from_str(contents).map_err(|source| ManifestError::Parse {
                path: path.to_string(),
                source,
            })?;

        if !json.clips.contains_key(&json.initial) {
            return Err(ManifestError::MissingInitial(json.initial));
        }

        Ok(Self {
            version: json.version,
            initial: json.initial,
            clips: json.clips,
        })
    }

    pub fn load_from_file(path: &str) -> Result<Self, ManifestError> {
        let contents = fs::read_to_string(Path::new(path)).map_err(|source| ManifestError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json_str(&contents, path)
    }

    /// Clips whose follow-up names a clip that does not exist.
    pub fn dangling_follow_ups(&self) -> Vec<(&str, &str)> {
        self.clips
            .iter()
            .filter_map(|(name, clip)| {
                let next = clip.next.as_deref()?;
                (!self.clips.contains_key(next)).then_some((name.as_str(), next))
            })
            .collect()
    }
}

/// System to load the animation manifest at startup.
pub(crate) fn load_animation_manifest(mut manifest: ResMut<AnimationManifest>) {
    if !Path::new(MANIFEST_PATH).exists() {
        warn!(
            "Animation manifest not found at {:?}, using built-in clips",
            MANIFEST_PATH
        );
        return;
    }

    match AnimationManifest::load_from_file(MANIFEST_PATH) {
        Ok(loaded) => {
            for (clip, next) in loaded.dangling_follow_ups() {
                warn!("Clip '{}' follows up into unknown clip '{}'", clip, next);
            }
            info!(
                "Loaded animation manifest v{} with {} clips",
                loaded.version,
                loaded.clips.len()
            );
            *manifest = loaded;
        }
        Err(err) => error!("{}", err),
    }
}

//! Input domain: device sampling, deadzone filtering, and the action buffer.

mod buffer;
mod filter;
pub(crate) mod systems;

pub use buffer::{InputAction, InputBuffer, LockedEvent, Pending};
pub use filter::{apply_deadzone, apply_deadzone_circularized};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tunables for the input source and buffer.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InputTuning {
    /// How long (seconds) an unconsumed action stays buffered.
    pub buffer_window: f32,
    pub inner_deadzone: f32,
    pub outer_deadzone: f32,
    /// Use the circularized deadzone for the 2D movement axis.
    #[serde(default)]
    pub circularize: bool,
}

impl Default for InputTuning {
    fn default() -> Self {
        Self {
            buffer_window: 0.2,
            inner_deadzone: 0.15,
            outer_deadzone: 0.85,
            circularize: false,
        }
    }
}

/// Filtered movement axes, refreshed every frame from the raw device sample.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MovementAxes {
    /// Last raw sample, before any filtering.
    pub raw: Vec2,
    /// Filtered 2D direction (unit length or zero).
    pub movement: Vec2,
    /// Filtered horizontal-only direction (unit length or zero).
    pub movement_horizontal: Vec2,
}

impl MovementAxes {
    /// Build axes from a raw sample using the configured deadzones.
    pub fn from_raw(raw: Vec2, tuning: &InputTuning) -> Self {
        let filter: fn(Vec2, f32, f32) -> Vec2 = if tuning.circularize {
            apply_deadzone_circularized
        } else {
            apply_deadzone
        };

        let movement = filter(raw, tuning.inner_deadzone, tuning.outer_deadzone);
        let horizontal = apply_deadzone(
            Vec2::new(raw.x, 0.0),
            tuning.inner_deadzone,
            tuning.outer_deadzone,
        );

        Self {
            raw,
            movement: movement.normalize_or_zero(),
            movement_horizontal: horizontal.normalize_or_zero(),
        }
    }
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputTuning>()
            .init_resource::<MovementAxes>()
            .init_resource::<InputBuffer>()
            .add_systems(Update, systems::read_device_input);
    }
}

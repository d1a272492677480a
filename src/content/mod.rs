//! Content domain: data-driven controller configuration.
//!
//! `assets/data/controller.ron` overrides the built-in movement, input and
//! attack tuning at startup. A missing or broken file keeps the defaults.

mod loader;

use std::path::Path;

use bevy::prelude::*;

pub use loader::{
    ContentLoadError, ControllerConfig, load_controller_config, parse_controller_config,
};

use crate::combat::AttackTuning;
use crate::input::InputTuning;
use crate::movement::MovementTuning;

pub const CONTROLLER_CONFIG_PATH: &str = "assets/data/controller.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_controller_config);
    }
}

/// Load the controller config and overwrite the tuning resources with it.
fn apply_controller_config(mut commands: Commands) {
    let path = Path::new(CONTROLLER_CONFIG_PATH);
    if !path.exists() {
        warn!(
            "Controller config not found at {:?}, using defaults",
            path
        );
        return;
    }

    match load_controller_config(path) {
        Ok(config) => {
            info!(
                "Loaded controller config: jump force {}, coyote time {}s, buffer window {}s",
                config.movement.jump_force,
                config.movement.coyote_time,
                config.input.buffer_window
            );
            commands.insert_resource::<MovementTuning>(config.movement);
            commands.insert_resource::<InputTuning>(config.input);
            commands.insert_resource::<AttackTuning>(config.attack);
        }
        Err(e) => {
            error!("{}", e);
            warn!("Keeping default controller tuning");
        }
    }
}

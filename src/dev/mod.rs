//! Dev domain: a test level and state-change logging.

mod level;

use bevy::prelude::*;

use crate::states::CharacterStateChanged;

pub struct DevToolsPlugin;

impl Plugin for DevToolsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, level::spawn_test_level)
            .add_systems(Update, log_state_changes);
    }
}

fn log_state_changes(mut changes: MessageReader<CharacterStateChanged>) {
    for change in changes.read() {
        match change.from {
            Some(from) => info!("[{:?}] {} -> {}", change.entity, from, change.to),
            None => info!("[{:?}] -> {}", change.entity, change.to),
        }
    }
}

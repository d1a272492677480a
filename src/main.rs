mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod dev;
mod input;
mod movement;
mod sprites;
mod states;
mod surface;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Slipstep".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        input::InputPlugin,
        surface::SurfacePlugin,
        movement::MovementPlugin,
        states::StatesPlugin,
        sprites::SpritesPlugin,
        combat::CombatPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(dev::DevToolsPlugin);

    app.run();
}

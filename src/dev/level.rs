//! Dev domain: a test level covering every surface kind.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::surface::{GameLayer, Grip, Surface};

const GROUND_COLOR: Color = Color::srgb(0.4, 0.5, 0.4);
const WALL_COLOR: Color = Color::srgb(0.3, 0.3, 0.4);
const NO_SLIDE_COLOR: Color = Color::srgb(0.6, 0.3, 0.3);
const GHOST_COLOR: Color = Color::srgba(0.7, 0.7, 0.9, 0.4);
const PROP_COLOR: Color = Color::srgb(0.8, 0.6, 0.2);

/// One static block of level geometry.
struct Block {
    center: Vec2,
    size: Vec2,
    /// Counter-clockwise rotation in degrees.
    angle: f32,
    surface: Surface,
    color: Color,
}

impl Block {
    fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            size,
            angle: 0.0,
            surface: Surface::default(),
            color: GROUND_COLOR,
        }
    }

    fn rotated(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    fn surface(mut self, surface: Surface, color: Color) -> Self {
        self.surface = surface;
        self.color = color;
        self
    }
}

fn grip_color(grip: Grip) -> Color {
    match grip {
        Grip::Default => GROUND_COLOR,
        Grip::Slippery => Color::srgb(0.6, 0.8, 0.9),
        Grip::Grippy => Color::srgb(0.5, 0.35, 0.2),
        Grip::InstantSlide => Color::srgb(0.9, 0.9, 1.0),
    }
}

pub(crate) fn spawn_test_level(mut commands: Commands) {
    let mut blocks = vec![
        // Ground
        Block::new(Vec2::new(0.0, -1.0), Vec2::new(60.0, 1.0)),
        // Boundary walls
        Block::new(Vec2::new(-30.0, 6.0), Vec2::new(1.0, 14.0))
            .surface(Surface::default(), WALL_COLOR),
        Block::new(Vec2::new(30.0, 6.0), Vec2::new(1.0, 14.0))
            .surface(Surface::default(), WALL_COLOR),
        // Wall-jump pillar
        Block::new(Vec2::new(-6.0, 2.5), Vec2::new(1.0, 6.0))
            .surface(Surface::default(), WALL_COLOR),
        // Pillar that can't be slid on or wall-jumped off
        Block::new(Vec2::new(-10.0, 2.5), Vec2::new(1.0, 6.0)).surface(
            Surface {
                disallow_wall_slide: true,
                ..default()
            },
            NO_SLIDE_COLOR,
        ),
        // Pillar whose contacts never count as ground or wall
        Block::new(Vec2::new(-14.0, 2.5), Vec2::new(1.0, 6.0)).surface(
            Surface {
                ignore_contacts: true,
                ..default()
            },
            GHOST_COLOR,
        ),
        // Gentle slope
        Block::new(Vec2::new(-20.0, 0.0), Vec2::new(6.0, 0.5)).rotated(15.0),
    ];

    // A 35 degree slope per grip class
    let grips = [Grip::Slippery, Grip::Default, Grip::Grippy, Grip::InstantSlide];
    for (i, grip) in grips.into_iter().enumerate() {
        let x = 5.0 + 6.0 * i as f32;
        blocks.push(
            Block::new(Vec2::new(x, 1.0), Vec2::new(5.0, 0.5))
                .rotated(35.0)
                .surface(Surface::with_grip(grip), grip_color(grip)),
        );
    }

    let terrain_layers =
        CollisionLayers::new(GameLayer::Terrain, [GameLayer::Player, GameLayer::Prop]);
    for block in &blocks {
        commands.spawn((
            block.surface,
            Sprite {
                color: block.color,
                custom_size: Some(block.size),
                ..default()
            },
            Transform::from_translation(block.center.extend(0.0))
                .with_rotation(Quat::from_rotation_z(block.angle.to_radians())),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            terrain_layers,
        ));
    }

    // Loose props to knock around
    let prop_layers = CollisionLayers::new(
        GameLayer::Prop,
        [
            GameLayer::Terrain,
            GameLayer::Player,
            GameLayer::Prop,
            GameLayer::PlayerHitbox,
        ],
    );
    for i in 0..3 {
        let size = 0.6 + 0.2 * i as f32;
        commands.spawn((
            Sprite {
                color: PROP_COLOR,
                custom_size: Some(Vec2::splat(size)),
                ..default()
            },
            Transform::from_xyz(2.0 + 1.5 * i as f32, 1.0, 0.0),
            RigidBody::Dynamic,
            Collider::rectangle(size, size),
            CollisionEventsEnabled,
            prop_layers,
        ));
    }

    info!("Spawned test level with {} blocks", blocks.len());
}

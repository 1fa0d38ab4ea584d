use bevy::prelude::*;

mod animation;
mod core;
mod level;
mod npc;
mod player;
mod ui;
mod world;

use crate::world::components::{VIEW_HEIGHT, VIEW_WIDTH};
use crate::{
    animation::AnimationPlugin, core::CorePlugin, level::LevelPlugin, npc::NpcPlugin,
    player::PlayerPlugin, ui::UiPlugin, world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Stroll".to_string(),
                        resolution: (VIEW_WIDTH, VIEW_HEIGHT).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
            CorePlugin::default(),
            WorldPlugin,
            AnimationPlugin,
            LevelPlugin,
            PlayerPlugin,
            NpcPlugin,
            UiPlugin, // After NpcPlugin to receive NpcGreetingEvent
        ))
        .run();
}

//! Level plugin wiring the registry and the load lifecycle.
use bevy::prelude::*;

use crate::level::{
    components::{CurrentLevel, LoadLevelRequest},
    config::LevelCatalog,
    systems::{
        begin_level_load, finish_level_load, handle_level_advance_key, request_initial_level,
    },
};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        let catalog = LevelCatalog::load_or_default();
        info!(
            "Level catalog loaded: {} level(s), sheets {} / {}",
            catalog.len(),
            catalog.player_sheet,
            catalog.npc_sheet
        );

        app.insert_resource(catalog)
            .init_resource::<CurrentLevel>()
            .add_event::<LoadLevelRequest>()
            .add_systems(Startup, request_initial_level)
            .add_systems(
                Update,
                (
                    handle_level_advance_key,
                    begin_level_load.after(handle_level_advance_key),
                    finish_level_load.after(begin_level_load),
                ),
            );
    }
}

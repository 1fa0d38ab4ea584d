//! Systems driving level loading and transitions.
use bevy::prelude::*;

use crate::animation::components::{
    CharacterAnimation, Facing, FRAME_SIZE_PX, SHEET_COLUMNS, SHEET_ROWS,
};
use crate::level::{
    components::{CurrentLevel, LevelEntity, LoadLevelRequest, PendingLevelSpawn},
    config::LevelCatalog,
};
use crate::npc::components::Npc;
use crate::player::components::{Player, Velocity};
use crate::ui::notice::events::NoticeEvent;
use crate::world::components::{Position, ViewportBounds};
use crate::world::systems::position_to_translation;

// Z layers for level entities.
const BACKGROUND_Z: f32 = 0.0;
const CHARACTER_Z: f32 = 1.0;

/// Requests the first level at startup.
pub fn request_initial_level(mut requests: MessageWriter<LoadLevelRequest>) {
    requests.write(LoadLevelRequest { index: 0 });
}

/// Advances the level pointer on N. Past the last level it wraps to zero
/// and raises a one-time user-visible notice.
pub fn handle_level_advance_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    current: Res<CurrentLevel>,
    catalog: Res<LevelCatalog>,
    mut requests: MessageWriter<LoadLevelRequest>,
    mut notices: MessageWriter<NoticeEvent>,
) {
    if !keyboard.just_pressed(KeyCode::KeyN) {
        return;
    }

    let (index, wrapped) = next_level_index(current.index, catalog.len());
    if wrapped {
        info!("No more levels; restarting from the first one");
        notices.write(NoticeEvent::new("No more levels! Back to the start."));
    }
    requests.write(LoadLevelRequest { index });
}

/// Next index in rotation; reports whether the pointer wrapped.
fn next_level_index(current: usize, len: usize) -> (usize, bool) {
    let next = current + 1;
    if next >= len {
        (0, true)
    } else {
        (next, false)
    }
}

/// Validates a load request, tears down the current level, and starts the
/// asynchronous image loads. Entity construction is deferred to
/// `finish_level_load`, which waits for the images.
///
/// An out-of-range index is non-fatal: it is logged and the load aborts
/// with the current level left untouched.
pub fn begin_level_load(
    mut commands: Commands,
    mut requests: MessageReader<LoadLevelRequest>,
    catalog: Res<LevelCatalog>,
    mut current: ResMut<CurrentLevel>,
    asset_server: Res<AssetServer>,
    level_entities: Query<Entity, With<LevelEntity>>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    let Some(level) = catalog.get(request.index) else {
        error!(
            "Level index out of range: {} (catalog holds {})",
            request.index,
            catalog.len()
        );
        return;
    };

    for entity in level_entities.iter() {
        commands.entity(entity).despawn();
    }

    current.index = request.index;
    current.generation += 1;
    info!("Loading level {} ({})", request.index, level.name);

    commands.insert_resource(PendingLevelSpawn {
        generation: current.generation,
        index: request.index,
        background: asset_server.load(level.background.clone()),
        player_sheet: asset_server.load(catalog.player_sheet.clone()),
        npc_sheet: asset_server.load(catalog.npc_sheet.clone()),
    });
}

/// Completes a pending load once every image is available, rebuilding the
/// background and recreating the player/NPC pair at the level's start
/// positions. Pending work whose generation was superseded by a newer load
/// is discarded unspawned.
pub fn finish_level_load(
    mut commands: Commands,
    pending: Option<Res<PendingLevelSpawn>>,
    current: Res<CurrentLevel>,
    catalog: Res<LevelCatalog>,
    viewport: Res<ViewportBounds>,
    images: Res<Assets<Image>>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let Some(pending) = pending else {
        return;
    };

    if pending.generation != current.generation {
        debug!(
            "Discarding stale level load (generation {} superseded)",
            pending.generation
        );
        commands.remove_resource::<PendingLevelSpawn>();
        return;
    }

    let ready = images.contains(&pending.background)
        && images.contains(&pending.player_sheet)
        && images.contains(&pending.npc_sheet);
    if !ready {
        return;
    }

    let Some(level) = catalog.get(pending.index) else {
        error!(
            "Level index out of range: {} (catalog holds {})",
            pending.index,
            catalog.len()
        );
        commands.remove_resource::<PendingLevelSpawn>();
        return;
    };

    let mut background = Sprite::from_image(pending.background.clone());
    background.custom_size = Some(Vec2::new(viewport.width, viewport.height));
    commands.spawn((
        background,
        Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
        LevelEntity,
        Name::new("Background"),
    ));

    let layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(FRAME_SIZE_PX),
        SHEET_COLUMNS as u32,
        SHEET_ROWS as u32,
        None,
        None,
    ));
    let idle_index = Facing::Down.atlas_row() * SHEET_COLUMNS;

    let player_start = Position(level.player_start);
    commands.spawn((
        Player,
        Velocity::default(),
        player_start,
        CharacterAnimation::new(Facing::Down),
        Sprite::from_atlas_image(
            pending.player_sheet.clone(),
            TextureAtlas {
                layout: layout.clone(),
                index: idle_index,
            },
        ),
        Transform::from_translation(position_to_translation(
            player_start.0,
            &viewport,
            CHARACTER_Z,
        )),
        LevelEntity,
        Name::new("Player"),
    ));

    let npc_start = Position(level.npc_start);
    commands.spawn((
        Npc::default(),
        npc_start,
        CharacterAnimation::new(Facing::Down),
        Sprite::from_atlas_image(
            pending.npc_sheet.clone(),
            TextureAtlas {
                layout,
                index: idle_index,
            },
        ),
        Transform::from_translation(position_to_translation(
            npc_start.0,
            &viewport,
            CHARACTER_Z,
        )),
        LevelEntity,
        Name::new("Npc"),
    ));

    commands.remove_resource::<PendingLevelSpawn>();
    info!("Level {} ({}) ready", pending.index, level.name);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_through_the_catalog_in_order() {
        assert_eq!(next_level_index(0, 3), (1, false));
        assert_eq!(next_level_index(1, 3), (2, false));
    }

    #[test]
    fn wraps_past_the_last_level() {
        assert_eq!(next_level_index(2, 3), (0, true));
        assert_eq!(next_level_index(0, 1), (0, true));
    }
}

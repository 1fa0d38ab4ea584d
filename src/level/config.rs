//! Level registry loaded from `config/levels.toml`.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use crate::animation::components::SPRITE_SIZE;
use crate::world::components::{VIEW_HEIGHT, VIEW_WIDTH};

const CONFIG_PATH: &str = "config/levels.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawLevelsConfig {
    #[serde(default)]
    sheets: RawSheetsSection,
    #[serde(default)]
    level: Vec<RawLevelEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSheetsSection {
    player: String,
    npc: String,
}

impl Default for RawSheetsSection {
    fn default() -> Self {
        Self {
            player: "sheets/fox.png".to_string(),
            npc: "sheets/female_warrior.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawLevelEntry {
    name: String,
    background: String,
    player_start: [f32; 2],
    npc_start: [f32; 2],
}

/// A single scene: background art plus the start positions for the pair of
/// characters recreated on every load.
#[derive(Debug, Clone)]
pub struct LevelDef {
    pub name: String,
    pub background: String,
    pub player_start: Vec2,
    pub npc_start: Vec2,
}

/// Ordered, read-only registry of levels plus the shared sheet paths.
#[derive(Resource, Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<LevelDef>,
    pub player_sheet: String,
    pub npc_sheet: String,
}

impl LevelCatalog {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<RawLevelsConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to the built-in levels.",
                        CONFIG_PATH, err
                    );
                    RawLevelsConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to the built-in levels.",
                    CONFIG_PATH, err
                );
                RawLevelsConfig::default().into()
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&LevelDef> {
        self.levels.get(index)
    }

    /// Number of levels. Always at least one: an empty registry falls back
    /// to the built-in set so the active-index invariant holds.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl From<RawLevelsConfig> for LevelCatalog {
    fn from(value: RawLevelsConfig) -> Self {
        let mut levels: Vec<LevelDef> = value
            .level
            .into_iter()
            .map(|entry| LevelDef {
                name: entry.name,
                background: entry.background,
                player_start: clamp_start(entry.player_start),
                npc_start: clamp_start(entry.npc_start),
            })
            .collect();

        if levels.is_empty() {
            levels = built_in_levels();
        }

        Self {
            levels,
            player_sheet: value.sheets.player,
            npc_sheet: value.sheets.npc,
        }
    }
}

/// Keeps a configured start position inside the viewport.
fn clamp_start(start: [f32; 2]) -> Vec2 {
    Vec2::new(
        start[0].clamp(0.0, VIEW_WIDTH - SPRITE_SIZE),
        start[1].clamp(0.0, VIEW_HEIGHT - SPRITE_SIZE),
    )
}

fn built_in_levels() -> Vec<LevelDef> {
    vec![
        LevelDef {
            name: "Meadow".to_string(),
            background: "backgrounds/meadow.png".to_string(),
            player_start: Vec2::new(100.0, 100.0),
            npc_start: Vec2::new(400.0, 300.0),
        },
        LevelDef {
            name: "Village Square".to_string(),
            background: "backgrounds/village.png".to_string(),
            player_start: Vec2::new(80.0, 450.0),
            npc_start: Vec2::new(600.0, 150.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_falls_back_to_built_in_levels() {
        let catalog = LevelCatalog::from(RawLevelsConfig::default());
        assert!(catalog.len() >= 1);
        assert!(!catalog.is_empty());
        assert!(catalog.get(0).is_some());
        assert!(catalog.get(catalog.len()).is_none());
    }

    #[test]
    fn parses_configured_levels() {
        let raw: RawLevelsConfig = toml::from_str(
            r#"
            [sheets]
            player = "sheets/warrior.png"
            npc = "sheets/elder.png"

            [[level]]
            name = "Cove"
            background = "backgrounds/cove.png"
            player_start = [50.0, 60.0]
            npc_start = [300.0, 200.0]
            "#,
        )
        .expect("valid config");

        let catalog = LevelCatalog::from(raw);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.player_sheet, "sheets/warrior.png");

        let level = catalog.get(0).expect("level present");
        assert_eq!(level.name, "Cove");
        assert_eq!(level.player_start, Vec2::new(50.0, 60.0));
    }

    #[test]
    fn start_positions_are_clamped_into_the_viewport() {
        let raw: RawLevelsConfig = toml::from_str(
            r#"
            [[level]]
            name = "Edge"
            background = "backgrounds/edge.png"
            player_start = [-20.0, 10000.0]
            npc_start = [900.0, -5.0]
            "#,
        )
        .expect("valid config");

        let catalog = LevelCatalog::from(raw);
        let level = catalog.get(0).expect("level present");
        assert_eq!(
            level.player_start,
            Vec2::new(0.0, VIEW_HEIGHT - SPRITE_SIZE)
        );
        assert_eq!(level.npc_start, Vec2::new(VIEW_WIDTH - SPRITE_SIZE, 0.0));
    }
}

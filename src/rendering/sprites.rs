//! Sprite sheet loading and frame lookup.

use bevy::prelude::*;
use std::collections::HashMap;

use super::scene::SheetId;
use crate::core::GameConfig;

/// Side of one animation frame in the sheets, in pixels.
pub const FRAME_SIZE: u32 = 32;

/// Image and atlas layout of a sheet.
#[derive(Debug, Clone)]
struct Sheet {
    image: Handle<Image>,
    layout: Handle<TextureAtlasLayout>,
}

/// Resolves a sheet id and frame index into something drawable.
#[derive(Resource, Default)]
pub struct SpriteSheets {
    sheets: HashMap<SheetId, Sheet>,
}

impl SpriteSheets {
    /// A fresh sprite showing `frame` of `sheet`.
    pub fn sprite(&self, sheet: SheetId, frame: usize) -> Option<Sprite> {
        let entry = self.sheets.get(&sheet)?;
        Some(Sprite::from_atlas_image(
            entry.image.clone(),
            TextureAtlas {
                layout: entry.layout.clone(),
                index: frame,
            },
        ))
    }

    /// Point an existing sprite at `frame` of `sheet`. Returns false for unknown sheets.
    pub fn apply(&self, sheet: SheetId, frame: usize, sprite: &mut Sprite) -> bool {
        let Some(entry) = self.sheets.get(&sheet) else {
            return false;
        };
        if sprite.image != entry.image {
            sprite.image = entry.image.clone();
        }
        match &mut sprite.texture_atlas {
            Some(atlas) => {
                atlas.layout = entry.layout.clone();
                atlas.index = frame;
            }
            None => {
                sprite.texture_atlas = Some(TextureAtlas {
                    layout: entry.layout.clone(),
                    index: frame,
                });
            }
        }
        true
    }
}

/// Load every sheet as a single row of 32x32 frames.
pub fn load_sprite_sheets(
    mut commands: Commands,
    config: Res<GameConfig>,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let timing = config.frame_timing();
    let mut sheets = SpriteSheets::default();

    for id in SheetId::ALL {
        let columns = timing.frame_count(id.clip()) as u32;
        let layout = TextureAtlasLayout::from_grid(UVec2::splat(FRAME_SIZE), columns, 1, None, None);
        sheets.sheets.insert(
            id,
            Sheet {
                image: asset_server.load(format!("images/{}.png", id.image_name())),
                layout: layouts.add(layout),
            },
        );
    }

    info!("Loaded {} sprite sheets", sheets.sheets.len());
    commands.insert_resource(sheets);
}

// Level: the tile map, its textures and its collision geometry

pub mod platformer;
pub mod tile_map;

pub use platformer::{PhysicsStep, PlatformPhysics, RapierPlatformer};
pub use tile_map::{MapError, TileKind, TileMap};

use crate::core::math::Rect;
use crate::engine::assets::{AssetError, AssetLoader, FrameStore};
use crate::engine::renderer::SpriteDraw;

/// Level loading errors
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
}

/// A loaded level ready to draw
#[derive(Debug)]
pub struct Level {
    tiles: Vec<SpriteDraw>,
}

impl Level {
    /// Resolve a texture for every placed tile from `images/map/<code>.png`
    pub fn load(
        map: &TileMap,
        tile_size: f32,
        loader: &AssetLoader,
        store: &mut FrameStore,
    ) -> Result<Self, LevelError> {
        let mut tiles = Vec::new();
        for placement in map.placements(tile_size) {
            let path = loader.resolve_path(format!("images/map/{}.png", placement.code));
            let frame = store.load_frame(loader, &path, false)?;
            log::trace!(
                "Tile {:?} at row {}, column {}",
                TileKind::from_code(placement.code),
                placement.row,
                placement.column
            );
            tiles.push(SpriteDraw::new(frame, placement.bounds));
        }

        log::info!("Level has {} tiles", tiles.len());

        Ok(Self { tiles })
    }

    /// Tiles overlapping `visible`
    pub fn visible_tiles(&self, visible: Rect) -> impl Iterator<Item = &SpriteDraw> + '_ {
        self.tiles
            .iter()
            .filter(move |tile| tile.bounds.intersects(&visible))
    }
}

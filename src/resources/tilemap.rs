//! Tile map data and storage.
//!
//! Provides serializable structs for tile map data and a store for loaded
//! maps. Tiles carry world-space positions; tile size and parallax scroll
//! factor live on the map, which is what the camera's tilemap cull reads.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Single tile placement, world-space top-left corner.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Tile {
    pub x: f32,
    pub y: f32,
    /// Tile identifier (tileset-local).
    pub id: u32,
}

/// Tilemap metadata and tiles.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilemap {
    /// Width of a tile in pixels.
    pub tile_width: f32,
    /// Height of a tile in pixels.
    pub tile_height: f32,
    /// Parallax multiplier applied to camera scroll for the whole map.
    #[serde(default = "one")]
    pub scroll_factor_x: f32,
    #[serde(default = "one")]
    pub scroll_factor_y: f32,
    pub tiles: Vec<Tile>,
}

fn one() -> f32 {
    1.0
}

impl Tilemap {
    /// Create an empty map with the given tile size.
    pub fn new(tile_width: f32, tile_height: f32) -> Self {
        Tilemap {
            tile_width,
            tile_height,
            scroll_factor_x: 1.0,
            scroll_factor_y: 1.0,
            tiles: Vec::new(),
        }
    }

    /// Parse a map from its JSON representation.
    pub fn from_json(data: &str) -> Result<Self, String> {
        serde_json::from_str(data).map_err(|e| format!("Failed to parse tilemap JSON: {}", e))
    }

    /// Append a tile at a world-space position.
    pub fn push(&mut self, x: f32, y: f32, id: u32) {
        self.tiles.push(Tile { x, y, id });
    }
}

/// Registry of loaded tilemaps by key.
#[derive(Resource, Debug, Default)]
pub struct TilemapStore {
    pub map: FxHashMap<String, Tilemap>,
}

impl TilemapStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TilemapStore {
            map: FxHashMap::default(),
        }
    }

    /// Get a tilemap by its key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Tilemap> {
        self.map.get(key.as_ref())
    }

    /// Insert a tilemap with a specific key.
    pub fn insert(&mut self, key: impl Into<String>, tilemap: Tilemap) {
        self.map.insert(key.into(), tilemap);
    }

    /// Parse a JSON map and insert it under the given key.
    pub fn load_json(&mut self, key: impl Into<String>, data: &str) -> Result<(), String> {
        let tilemap = Tilemap::from_json(data)?;
        self.insert(key, tilemap);
        Ok(())
    }

    /// Clear all loaded tilemaps.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

//! TileMap - dense row-major tile storage for one level
//!
//! The map doubles as the world-collision oracle: it implements
//! `CollisionResolver` by converting a probed world coordinate into a tile
//! column/row and scanning the spanned cells for a solid tile.

use crate::domain::constants::TILE_SIZE;
use crate::domain::tiles::{is_solid, TileId, TILE_EMPTY};
use crate::physics::{
    CollisionInfo, CollisionResolver, Direction, PERF_EDGE_HITS, PERF_EDGE_PROBES,
};

/// One level's worth of tiles
pub struct TileMap {
    width: u32,
    height: u32,
    tile_size: f32,
    tiles: Vec<TileId>,
}

impl TileMap {
    /// Create an empty map with the default tile size
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_tile_size(width, height, TILE_SIZE)
    }

    pub fn with_tile_size(width: u32, height: u32, tile_size: f32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            tile_size,
            tiles: vec![TILE_EMPTY; size],
        }
    }

    /// Build a map from pre-filled row-major tile data (level loading).
    pub fn from_tiles(
        width: u32,
        height: u32,
        tile_size: f32,
        tiles: Vec<TileId>,
    ) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!("level dimensions must be nonzero, got {}x{}", width, height));
        }
        if !(tile_size > 0.0) {
            return Err(format!("tile_size must be positive, got {}", tile_size));
        }
        let expected = (width * height) as usize;
        if tiles.len() != expected {
            return Err(format!(
                "tile data length {} does not match {}x{} = {}",
                tiles.len(),
                width,
                height,
                expected
            ));
        }
        Ok(Self { width, height, tile_size, tiles })
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.tiles.len() }

    #[inline]
    pub fn tile_size(&self) -> f32 { self.tile_size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Tile at grid coordinates; out-of-bounds reads as empty (the map is
    /// open at its borders).
    #[inline]
    pub fn get_tile(&self, x: i32, y: i32) -> TileId {
        if !self.in_bounds(x, y) {
            return TILE_EMPTY;
        }
        self.tiles[self.index(x as u32, y as u32)]
    }

    /// Place a tile; returns false when out of bounds.
    pub fn set_tile(&mut self, x: u32, y: u32, tile: TileId) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = self.index(x, y);
        self.tiles[idx] = tile;
        true
    }

    /// Fill a tile rectangle, clamped to the map (level building / tests).
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, tile: TileId) {
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);
        for ty in y..y1 {
            for tx in x..x1 {
                let idx = self.index(tx, ty);
                self.tiles[idx] = tile;
            }
        }
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        self.tiles.fill(TILE_EMPTY);
    }

    /// World coordinate -> tile coordinate (floored, so negatives map to
    /// cells left of / above the map and read as empty).
    #[inline]
    fn to_tile(&self, world: f32) -> i32 {
        (world / self.tile_size).floor() as i32
    }
}

impl CollisionResolver for TileMap {
    fn check_horizontal_edge(
        &self,
        probe_x: f32,
        top_y: f32,
        bottom_y: f32,
        direction: Direction,
        info: &mut CollisionInfo,
    ) {
        PERF_EDGE_PROBES.with(|c| *c.borrow_mut() += 1);

        let tx = self.to_tile(probe_x);
        let ty0 = self.to_tile(top_y);
        let ty1 = self.to_tile(bottom_y);

        for ty in ty0..=ty1 {
            let tile = self.get_tile(tx, ty);
            if !is_solid(tile) {
                continue;
            }

            info.is_collision_x = true;
            info.tile_x = tx;
            info.tile_y = ty;
            info.tile_type = tile;
            info.corrected_x = match direction {
                // Stop against the right face of the obstruction
                Direction::Left => (tx + 1) as f32 * self.tile_size,
                // Stop against the left face; the body subtracts its width
                _ => tx as f32 * self.tile_size,
            };

            PERF_EDGE_HITS.with(|c| *c.borrow_mut() += 1);
            return;
        }
    }

    fn check_vertical_edge(
        &self,
        probe_y: f32,
        left_x: f32,
        right_x: f32,
        direction: Direction,
        info: &mut CollisionInfo,
    ) {
        PERF_EDGE_PROBES.with(|c| *c.borrow_mut() += 1);

        let ty = self.to_tile(probe_y);
        let tx0 = self.to_tile(left_x);
        let tx1 = self.to_tile(right_x);

        for tx in tx0..=tx1 {
            let tile = self.get_tile(tx, ty);
            if !is_solid(tile) {
                continue;
            }

            info.is_collision_y = true;
            info.tile_x = tx;
            info.tile_y = ty;
            info.tile_type = tile;
            info.corrected_y = match direction {
                // Stop against the underside of the obstruction
                Direction::Up => (ty + 1) as f32 * self.tile_size,
                // Stop on top; the body subtracts its height
                _ => ty as f32 * self.tile_size,
            };

            PERF_EDGE_HITS.with(|c| *c.borrow_mut() += 1);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tiles::{TILE_BRICK, TILE_DIRT, TILE_LADDER, TILE_STONE};

    fn probe_info() -> CollisionInfo {
        CollisionInfo::new()
    }

    #[test]
    fn left_probe_resolves_to_the_tile_right_face() {
        let mut map = TileMap::new(16, 12);
        map.set_tile(6, 2, TILE_STONE);
        let mut info = probe_info();

        // Edge at x=98 spans rows y=[36, 44] -> tile column 6, rows 2..=2
        map.check_horizontal_edge(98.0, 36.0, 44.0, Direction::Left, &mut info);

        assert!(info.is_collision_x);
        assert_eq!((info.tile_x, info.tile_y), (6, 2));
        assert_eq!(info.tile_type, TILE_STONE);
        assert_eq!(info.corrected_x, 112.0);
    }

    #[test]
    fn right_probe_resolves_to_the_tile_left_face() {
        let mut map = TileMap::new(16, 12);
        map.set_tile(6, 2, TILE_DIRT);
        let mut info = probe_info();

        map.check_horizontal_edge(98.0, 36.0, 44.0, Direction::Right, &mut info);

        assert!(info.is_collision_x);
        assert_eq!(info.corrected_x, 96.0);
    }

    #[test]
    fn up_probe_resolves_to_the_tile_underside() {
        let mut map = TileMap::new(16, 12);
        map.set_tile(3, 4, TILE_BRICK);
        let mut info = probe_info();

        map.check_vertical_edge(70.0, 50.0, 60.0, Direction::Up, &mut info);

        assert!(info.is_collision_y);
        assert_eq!((info.tile_x, info.tile_y), (3, 4));
        assert_eq!(info.corrected_y, 80.0);
    }

    #[test]
    fn down_probe_resolves_to_the_tile_top() {
        let mut map = TileMap::new(16, 12);
        map.set_tile(3, 6, TILE_DIRT);
        let mut info = probe_info();

        map.check_vertical_edge(97.0, 50.0, 60.0, Direction::Down, &mut info);

        assert!(info.is_collision_y);
        assert_eq!(info.corrected_y, 96.0);
    }

    #[test]
    fn edge_span_is_inclusive_on_both_ends() {
        let mut map = TileMap::new(16, 12);
        // Solid only in the last spanned row
        map.set_tile(6, 2, TILE_STONE);
        let mut info = probe_info();

        map.check_horizontal_edge(98.0, 20.0, 47.0, Direction::Left, &mut info);

        assert!(info.is_collision_x);
        assert_eq!(info.tile_y, 2);
    }

    #[test]
    fn probes_outside_the_map_miss() {
        let map = TileMap::new(8, 8);
        let mut info = probe_info();

        map.check_horizontal_edge(-5.0, 0.0, 15.0, Direction::Left, &mut info);
        map.check_vertical_edge(4000.0, 0.0, 15.0, Direction::Down, &mut info);

        assert!(!info.is_collision_x);
        assert!(!info.is_collision_y);
        assert_eq!(info, CollisionInfo::default());
    }

    #[test]
    fn ladders_do_not_block() {
        let mut map = TileMap::new(8, 8);
        map.set_tile(2, 2, TILE_LADDER);
        let mut info = probe_info();

        map.check_vertical_edge(34.0, 32.0, 40.0, Direction::Down, &mut info);

        assert!(!info.is_collision_y);
    }

    #[test]
    fn fill_rect_clamps_to_the_map() {
        let mut map = TileMap::new(8, 8);
        map.fill_rect(6, 6, 5, 5, TILE_DIRT);

        assert_eq!(map.get_tile(7, 7), TILE_DIRT);
        assert_eq!(map.get_tile(6, 7), TILE_DIRT);
        // Nothing outside
        assert_eq!(map.get_tile(5, 5), TILE_EMPTY);
    }

    #[test]
    fn from_tiles_validates_dimensions() {
        assert!(TileMap::from_tiles(0, 4, 16.0, vec![]).is_err());
        assert!(TileMap::from_tiles(2, 2, 0.0, vec![0; 4]).is_err());
        assert!(TileMap::from_tiles(2, 2, 16.0, vec![0; 3]).is_err());

        let map = TileMap::from_tiles(2, 2, 16.0, vec![0, 1, 0, 2]).unwrap();
        assert_eq!(map.get_tile(1, 0), TILE_DIRT);
        assert_eq!(map.get_tile(1, 1), TILE_STONE);
    }
}

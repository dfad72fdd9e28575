//! Endless ground streaming
//!
//! The ground is cut into fixed-width chunks. Chunks are generated ahead of
//! the camera, each exactly once, and only past the highest index generated
//! so far: walking back never fills gaps left by a jump forward.
//!
//! Generated layers are kept for the whole session. There is no eviction, so
//! memory grows with distance travelled.

use std::collections::BTreeSet;

use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::tuning::GroundTuning;

/// Sprite cell in the ground tile sheet
pub const GROUND_TILE: UVec2 = UVec2::new(1, 1);

/// Per-cell tile data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCell {
    pub tile: UVec2,
}

/// A rectangular tile surface with per-cell render and collision data
///
/// Writes outside the layer are ignored. Collision queries only see the layer
/// after `redraw` commits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayer {
    /// Chunk index this layer was generated for
    pub chunk: i64,
    /// World position of cell (0, 0)'s bottom-left corner
    pub origin: Vec2,
    /// Size in cells
    pub size: UVec2,
    cells: Vec<Option<TileCell>>,
    collision: Vec<bool>,
    committed: bool,
}

impl TileLayer {
    /// A layer too large to address is created empty (zero cells)
    pub fn new(chunk: i64, origin: Vec2, size: UVec2) -> Self {
        let (size, len) = match (size.x as usize).checked_mul(size.y as usize) {
            Some(len) => (size, len),
            None => {
                log::warn!("Tile layer {} of {} cells can't be addressed", chunk, size);
                (UVec2::ZERO, 0)
            }
        };
        Self {
            chunk,
            origin,
            size,
            cells: vec![None; len],
            collision: vec![false; len],
            committed: false,
        }
    }

    fn index(&self, cell: UVec2) -> Option<usize> {
        (cell.x < self.size.x && cell.y < self.size.y)
            .then(|| cell.y as usize * self.size.x as usize + cell.x as usize)
    }

    pub fn set_data(&mut self, cell: UVec2, data: TileCell) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = Some(data);
        }
    }

    pub fn set_collision(&mut self, cell: UVec2) {
        if let Some(i) = self.index(cell) {
            self.collision[i] = true;
        }
    }

    pub fn data(&self, cell: UVec2) -> Option<TileCell> {
        self.index(cell).and_then(|i| self.cells[i])
    }

    pub fn is_solid(&self, cell: UVec2) -> bool {
        self.index(cell).is_some_and(|i| self.collision[i])
    }

    /// Commit the layer so the host can draw it and collide against it
    pub fn redraw(&mut self) {
        self.committed = true;
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    pub fn solid_count(&self) -> usize {
        self.collision.iter().filter(|&&solid| solid).count()
    }

    /// Top of the highest solid cell in the column under `x`
    pub fn surface_y(&self, x: f32) -> Option<f32> {
        if !self.committed {
            return None;
        }
        let local = x - self.origin.x;
        if local < 0.0 || local >= self.size.x as f32 {
            return None;
        }
        let column = local.floor() as u32;
        (0..self.size.y)
            .rev()
            .find(|&row| self.is_solid(UVec2::new(column, row)))
            .map(|row| self.origin.y + row as f32 + 1.0)
    }
}

/// Generates ground chunks ahead of a moving viewpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkStreamer {
    tuning: GroundTuning,
    generated: BTreeSet<i64>,
    /// Highest chunk index generated so far
    high_water: Option<i64>,
    /// Generated layers in ascending chunk order
    layers: Vec<TileLayer>,
}

impl ChunkStreamer {
    pub fn new(tuning: GroundTuning) -> Self {
        Self {
            tuning,
            generated: BTreeSet::new(),
            high_water: None,
            layers: Vec::new(),
        }
    }

    /// Chunk containing world x
    pub fn chunk_index(&self, x: f32) -> i64 {
        (x / self.tuning.chunk_width).floor() as i64
    }

    pub fn high_water_mark(&self) -> Option<i64> {
        self.high_water
    }

    pub fn is_generated(&self, index: i64) -> bool {
        self.generated.contains(&index)
    }

    pub fn generated(&self) -> impl Iterator<Item = i64> + '_ {
        self.generated.iter().copied()
    }

    pub fn layers(&self) -> &[TileLayer] {
        &self.layers
    }

    /// Generate any missing chunks in the look-ahead window starting at the
    /// viewpoint's chunk. Returns the indices generated this call, ascending.
    pub fn update(&mut self, viewpoint_x: f32) -> Vec<i64> {
        let current = self.chunk_index(viewpoint_x);
        let mut fresh = Vec::new();

        for i in 0..self.tuning.lookahead as i64 {
            let candidate = current + i;
            let past_mark = self.high_water.is_none_or(|mark| candidate > mark);
            if past_mark && !self.generated.contains(&candidate) {
                let layer = self.generate_chunk(candidate);
                self.layers.push(layer);
                self.generated.insert(candidate);
                self.high_water = Some(candidate);
                fresh.push(candidate);
            }
        }

        if !fresh.is_empty() {
            log::debug!(
                "Ground chunks {:?} generated (viewpoint x={:.2}, {} retained)",
                fresh,
                viewpoint_x,
                self.layers.len()
            );
        }
        fresh
    }

    /// Build a flat strip of solid ground for one chunk
    pub fn generate_chunk(&self, index: i64) -> TileLayer {
        let width = self.tuning.chunk_width.ceil() as u32;
        let rows = self.tuning.ground_rows;
        let origin = Vec2::new(index as f32 * self.tuning.chunk_width, self.tuning.origin_y);
        let mut layer = TileLayer::new(index, origin, UVec2::new(width, rows));

        for x in 0..width {
            for y in 0..rows {
                let cell = UVec2::new(x, y);
                layer.set_data(cell, TileCell { tile: GROUND_TILE });
                layer.set_collision(cell);
            }
        }
        layer.redraw();
        layer
    }

    /// Ground height under world x, if that chunk exists
    pub fn surface_y(&self, x: f32) -> Option<f32> {
        let index = self.chunk_index(x);
        self.layers
            .binary_search_by_key(&index, |layer| layer.chunk)
            .ok()
            .and_then(|i| self.layers[i].surface_y(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn streamer() -> ChunkStreamer {
        ChunkStreamer::new(GroundTuning::default())
    }

    #[test]
    fn test_initial_window() {
        let mut ground = streamer();
        assert_eq!(ground.update(0.0), vec![0, 1, 2]);
        assert_eq!(ground.high_water_mark(), Some(2));
        // Same viewpoint again generates nothing
        assert!(ground.update(50.0).is_empty());
    }

    #[test]
    fn test_jump_forward_generates_each_once() {
        let mut ground = streamer();
        ground.update(0.0);
        assert_eq!(ground.update(250.0), vec![3, 4]);
        assert_eq!(ground.generated().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(ground.high_water_mark(), Some(4));
        assert_eq!(ground.layers().len(), 5);
    }

    #[test]
    fn test_moving_backward_never_regenerates() {
        let mut ground = streamer();
        ground.update(1000.0);
        assert_eq!(ground.generated().collect::<Vec<_>>(), vec![10, 11, 12]);
        // Behind the high-water mark: nothing happens, gaps stay empty
        assert!(ground.update(0.0).is_empty());
        assert!(!ground.is_generated(0));
        assert_eq!(ground.high_water_mark(), Some(12));
    }

    #[test]
    fn test_negative_viewpoint() {
        let mut ground = streamer();
        assert_eq!(ground.update(-0.5), vec![-1, 0, 1]);
    }

    #[test]
    fn test_chunk_is_flat_solid_strip() {
        let ground = streamer();
        let layer = ground.generate_chunk(3);
        assert!(layer.is_committed());
        assert_eq!(layer.origin, Vec2::new(300.0, -1.0));
        assert_eq!(layer.size, UVec2::new(100, 5));
        assert_eq!(layer.solid_count(), 500);
        assert_eq!(
            layer.data(UVec2::new(99, 4)),
            Some(TileCell { tile: GROUND_TILE })
        );
        assert_eq!(layer.surface_y(350.5), Some(4.0));
        assert_eq!(layer.surface_y(400.0), None);
    }

    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut layer = TileLayer::new(0, Vec2::ZERO, UVec2::new(2, 2));
        layer.set_collision(UVec2::new(5, 0));
        layer.set_data(UVec2::new(0, 9), TileCell { tile: GROUND_TILE });
        assert_eq!(layer.solid_count(), 0);
        assert_eq!(layer.data(UVec2::new(0, 9)), None);
    }

    #[test]
    fn test_uncommitted_layer_has_no_surface() {
        let mut layer = TileLayer::new(0, Vec2::ZERO, UVec2::new(4, 1));
        layer.set_collision(UVec2::new(1, 0));
        assert_eq!(layer.surface_y(1.5), None);
        layer.redraw();
        assert_eq!(layer.surface_y(1.5), Some(1.0));
        assert_eq!(layer.surface_y(0.5), None);
    }

    #[test]
    fn test_surface_lookup_across_chunks() {
        let mut ground = streamer();
        ground.update(1000.0);
        assert_eq!(ground.surface_y(1050.0), Some(4.0));
        assert_eq!(ground.surface_y(1299.9), Some(4.0));
        assert_eq!(ground.surface_y(50.0), None);
    }

    proptest! {
        #[test]
        fn prop_chunks_generated_once_and_in_order(
            viewpoints in proptest::collection::vec(-2_000.0f32..20_000.0, 1..40)
        ) {
            let mut ground = streamer();
            let mut emitted = Vec::new();
            let mut mark: Option<i64> = None;

            for &x in &viewpoints {
                let current = ground.chunk_index(x);
                let expected: Vec<i64> = (current..current + 3)
                    .filter(|&c| mark.is_none_or(|m| c > m))
                    .collect();
                let fresh = ground.update(x);
                // Exactly the window indices past the previous mark
                prop_assert_eq!(&fresh, &expected);
                if let Some(&last) = fresh.last() {
                    mark = Some(last);
                }
                prop_assert_eq!(ground.high_water_mark(), mark);
                prop_assert!(mark.unwrap() >= current + 2);
                emitted.extend(fresh);
            }

            // Strictly increasing emission means no index was generated twice
            prop_assert!(emitted.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(emitted.len(), ground.layers().len());
            prop_assert_eq!(ground.high_water_mark(), emitted.last().copied());
        }
    }
}

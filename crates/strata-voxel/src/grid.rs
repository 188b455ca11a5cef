//! Dense chunk storage: one [`BlockId`] per cell in a flat contiguous buffer.
//!
//! Cells are addressed by `x + width * (y + height * z)`, so X varies fastest
//! and a vertical column is strided by `width`. Generation stages mutate the
//! grid in place; the finished grid is moved to the caller.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::{IVec3, UVec3};
use rustc_hash::FxHashMap;

use crate::block::BlockId;
use crate::size::WorldSize;

/// A `width × height × width` grid of block identifiers for one chunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkGrid {
    size: WorldSize,
    cells: Vec<BlockId>,
}

impl ChunkGrid {
    /// Allocates a grid of the given size with every cell set to Air.
    pub fn new(size: WorldSize) -> Self {
        Self {
            size,
            cells: vec![BlockId::Air; size.volume()],
        }
    }

    /// Returns the dimensions this grid was allocated with.
    #[inline]
    pub fn size(&self) -> WorldSize {
        self.size
    }

    /// Returns the block at `(x, y, z)`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.cells[self.linear_index(x, y, z)]
    }

    /// Sets the block at `(x, y, z)`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is outside the grid.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, block: BlockId) {
        let index = self.linear_index(x, y, z);
        self.cells[index] = block;
    }

    /// Returns the block at a signed coordinate, or `None` outside the grid.
    pub fn get_signed(&self, pos: IVec3) -> Option<BlockId> {
        if !self.size.contains(pos) {
            return None;
        }
        Some(self.get(pos.x as usize, pos.y as usize, pos.z as usize))
    }

    /// Sets the block at a signed coordinate.
    ///
    /// Returns `false` and leaves the grid untouched if the coordinate is
    /// outside the grid.
    pub fn set_signed(&mut self, pos: IVec3, block: BlockId) -> bool {
        if !self.size.contains(pos) {
            tracing::trace!("ChunkGrid::set_signed out of bounds: {pos}");
            return false;
        }
        self.set(pos.x as usize, pos.y as usize, pos.z as usize, block);
        true
    }

    /// Iterates the column at `(x, z)` from `y = 0` upwards.
    pub fn column(&self, x: usize, z: usize) -> impl Iterator<Item = BlockId> + '_ {
        (0..self.size.height()).map(move |y| self.get(x, y, z))
    }

    /// Iterates every cell with its local coordinate, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (UVec3, BlockId)> + '_ {
        let width = self.size.width();
        let height = self.size.height();
        self.cells.iter().enumerate().map(move |(i, &block)| {
            let x = i % width;
            let y = (i / width) % height;
            let z = i / (width * height);
            (UVec3::new(x as u32, y as u32, z as u32), block)
        })
    }

    /// Number of cells holding `block`.
    pub fn count(&self, block: BlockId) -> usize {
        self.cells.iter().filter(|&&b| b == block).count()
    }

    /// Number of cells per block type present in the grid.
    pub fn census(&self) -> FxHashMap<BlockId, usize> {
        let mut counts = FxHashMap::default();
        for &block in &self.cells {
            *counts.entry(block).or_insert(0) += 1;
        }
        counts
    }

    /// Raw cell storage in `x + width * (y + height * z)` order.
    pub fn as_slice(&self) -> &[BlockId] {
        &self.cells
    }

    fn linear_index(&self, x: usize, y: usize, z: usize) -> usize {
        let width = self.size.width();
        let height = self.size.height();
        assert!(
            x < width && y < height && z < width,
            "cell ({x}, {y}, {z}) outside {width}x{height}x{width} grid"
        );
        x + width * (y + height * z)
    }
}

/// Hash the contents of a grid for determinism comparison.
pub fn hash_grid(grid: &ChunkGrid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.size.width().hash(&mut hasher);
    grid.size.height().hash(&mut hasher);
    grid.cells.hash(&mut hasher);
    hasher.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Terrain layer: heightmap columns stratified into bedrock, stone, dirt, and grass.
//!
//! Each column gets a surface height from world-space 2D noise, plus dirt and
//! bedrock thicknesses from the same field sampled at local coordinates.
//! Ore placed by the resource stage survives only where the column is stone.

use rand_chacha::ChaCha8Rng;
use strata_voxel::{BlockId, ChunkGrid, WorldSize};

use crate::generator::ChunkOrigin;
use crate::noise_field::NoiseField;
use crate::params::WorldParams;

/// The numbers that decide one column's strata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnProfile {
    /// Index of the grass cell; everything above is air.
    pub height: usize,
    /// Dirt band depth below the grass cell.
    pub surface_blocks: f64,
    /// Bedrock thickness from `y = 0`.
    pub bedrock_blocks: f64,
}

impl ColumnProfile {
    /// Lowest `y` of the dirt band (cells at or above this and below
    /// `height` are dirt unless bedrock).
    pub fn surface_line(&self) -> f64 {
        self.height as f64 - self.surface_blocks
    }

    /// Block the terrain stage leaves at `y`, given the cell's current block.
    fn block_at(&self, y: usize, existing: BlockId) -> BlockId {
        let yf = y as f64;
        if y > self.height {
            BlockId::Air
        } else if y == self.height {
            BlockId::Grass
        } else if yf < self.bedrock_blocks {
            BlockId::Bedrock
        } else if yf < self.surface_line() {
            if existing.is_air() {
                BlockId::Stone
            } else {
                existing
            }
        } else {
            BlockId::Dirt
        }
    }
}

/// Compute the strata of column `(x, z)`.
pub fn column_profile(
    noise: &NoiseField,
    size: &WorldSize,
    params: &WorldParams,
    origin: ChunkOrigin,
    x: usize,
    z: usize,
) -> ColumnProfile {
    let terrain = &params.terrain;
    let world_height = size.height() as f64;

    let raw = noise.sample_2d(
        (f64::from(origin.x) + x as f64) / terrain.scale,
        (f64::from(origin.z) + z as f64) / terrain.scale,
    );
    let scaled = terrain.offset + terrain.magnitude * raw;
    let height = (world_height * scaled)
        .floor()
        .clamp(0.0, world_height - 1.0) as usize;

    // Band thicknesses sample local, not world, coordinates.
    let local = noise.sample_2d(x as f64, z as f64);
    let surface_blocks = params.surface.offset + (local * params.surface.magnitude).abs();
    let bedrock_blocks = params.bedrock.offset + (local * params.bedrock.magnitude).abs();

    ColumnProfile {
        height,
        surface_blocks,
        bedrock_blocks,
    }
}

/// Stratify every column of the grid.
///
/// Bedrock, dirt, grass, and air overwrite unconditionally. Stone fills only
/// air cells, so ore in the stone band is preserved.
pub fn generate_terrain<'a>(
    rng: &mut ChaCha8Rng,
    grid: &'a mut ChunkGrid,
    size: &WorldSize,
    params: &WorldParams,
    origin: ChunkOrigin,
) -> &'a mut ChunkGrid {
    debug_assert_eq!(grid.size(), *size);
    let noise = NoiseField::from_rng(rng);

    for z in 0..size.width() {
        for x in 0..size.width() {
            let profile = column_profile(&noise, size, params, origin, x, z);
            for y in 0..size.height() {
                let block = profile.block_at(y, grid.get(x, y, z));
                grid.set(x, y, z, block);
            }
        }
    }

    tracing::trace!("stratified terrain for chunk at ({}, {})", origin.x, origin.z);
    grid
}

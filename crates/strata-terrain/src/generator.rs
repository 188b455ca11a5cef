//! Chunk orchestration: validate once, then run resource, terrain, and tree
//! stages over a fresh grid.

use std::fmt;
use std::time::Instant;

use strata_voxel::{ChunkGrid, WorldSize};

use crate::error::GenerationError;
use crate::params::{ResourceConfig, WorldParams, validate_resources};
use crate::resources::generate_resources;
use crate::seed::world_rng;
use crate::terrain::generate_terrain;
use crate::trees::generate_trees_with_stats;

/// World block coordinates of a chunk's local `(0, 0, 0)` cell.
///
/// Chunks span the full world height, so there is no `y` component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkOrigin {
    /// World X of the chunk's first column.
    pub x: i32,
    /// World Z of the chunk's first column.
    pub z: i32,
}

impl ChunkOrigin {
    /// Origin at world block `(x, z)`.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Origin of the chunk at chunk coordinates `(cx, cz)` for chunks
    /// `width` blocks wide.
    pub fn from_chunk_coords(cx: i32, cz: i32, width: usize) -> Self {
        let width = width as i32;
        Self::new(cx * width, cz * width)
    }
}

impl fmt::Display for ChunkOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Validated generation inputs shared by every chunk of one world.
///
/// Construction rejects bad parameters up front; [`ChunkGenerator::generate`]
/// is then total and may be called from many threads at once, since each call
/// builds its own RNG and noise fields.
#[derive(Clone, Debug)]
pub struct ChunkGenerator {
    size: WorldSize,
    params: WorldParams,
    resources: Vec<ResourceConfig>,
}

impl ChunkGenerator {
    /// Validate `params` and `resources` and bundle them with the chunk size.
    ///
    /// # Errors
    ///
    /// Returns the first [`GenerationError`] found in the parameters or the
    /// resource table.
    pub fn new(
        size: WorldSize,
        params: WorldParams,
        resources: Vec<ResourceConfig>,
    ) -> Result<Self, GenerationError> {
        params.validate()?;
        validate_resources(&resources)?;
        Ok(Self {
            size,
            params,
            resources,
        })
    }

    /// Dimensions of every generated chunk.
    pub fn size(&self) -> WorldSize {
        self.size
    }

    /// The validated world parameters, seed included.
    pub fn params(&self) -> &WorldParams {
        &self.params
    }

    /// The validated resource table, in overwrite order.
    pub fn resources(&self) -> &[ResourceConfig] {
        &self.resources
    }

    /// Generate the chunk whose local origin sits at `origin`.
    pub fn generate(&self, origin: ChunkOrigin) -> ChunkGrid {
        let _span = tracing::debug_span!("generate_chunk", x = origin.x, z = origin.z).entered();
        let start = Instant::now();

        let mut rng = world_rng(self.params.seed);
        let mut grid = ChunkGrid::new(self.size);

        generate_resources(&mut rng, &mut grid, &self.size, origin, &self.resources);
        generate_terrain(&mut rng, &mut grid, &self.size, &self.params, origin);
        let trees =
            generate_trees_with_stats(&mut rng, &mut grid, &self.size, &self.params, origin);

        tracing::debug!(
            trees = trees.trees,
            elapsed_us = start.elapsed().as_micros() as u64,
            "generated chunk at {origin}"
        );
        grid
    }
}

/// Generate one chunk from unvalidated inputs.
///
/// # Errors
///
/// Returns a [`GenerationError`] if `params` or `resources` fail validation.
/// No cell is generated in that case.
pub fn generate_chunk(
    size: WorldSize,
    params: &WorldParams,
    resources: &[ResourceConfig],
    origin_x: i32,
    origin_z: i32,
) -> Result<ChunkGrid, GenerationError> {
    let generator = ChunkGenerator::new(size, params.clone(), resources.to_vec())?;
    Ok(generator.generate(ChunkOrigin::new(origin_x, origin_z)))
}

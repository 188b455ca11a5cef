//! Procedural chunk generation: resource veins, stratified terrain, and trees.
//!
//! A chunk is produced by [`generate_chunk`] (or a validated
//! [`ChunkGenerator`]) which allocates an all-air [`ChunkGrid`](strata_voxel::ChunkGrid)
//! and runs the resource, terrain, and tree stages over it in that order.

mod async_generation;
mod error;
mod generator;
mod noise_field;
mod params;
mod resources;
mod seed;
mod terrain;
mod trees;

pub use async_generation::{AsyncChunkGenerator, GeneratedChunk};
pub use error::GenerationError;
pub use generator::{ChunkGenerator, ChunkOrigin, generate_chunk};
pub use noise_field::NoiseField;
pub use params::{
    CanopyParams, LayerParams, MAX_TREE_EXTENT, ResourceConfig, SizeRange, TerrainParams,
    TreeParams, WorldParams, default_resources, validate_resources,
};
pub use resources::generate_resources;
pub use seed::{round_range, uniform01, world_rng};
pub use terrain::{ColumnProfile, column_profile, generate_terrain};
pub use trees::{TreeStats, generate_trees, generate_trees_with_stats};

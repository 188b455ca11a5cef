//! Block identifiers, world dimensions, and dense chunk grid storage.

pub mod block;
pub mod grid;
pub mod size;

pub use block::BlockId;
pub use grid::{ChunkGrid, hash_grid};
pub use size::{MAX_EXTENT, WorldSize, WorldSizeError};

//! Resource layer: ore veins from per-resource 3D noise thresholds.
//!
//! Runs first, on an empty grid. The terrain stage later keeps ore only inside
//! the deep stone band of each column.

use rand_chacha::ChaCha8Rng;
use strata_voxel::{ChunkGrid, WorldSize};

use crate::generator::ChunkOrigin;
use crate::noise_field::NoiseField;
use crate::params::ResourceConfig;

/// Stamp every configured resource into the grid.
///
/// Resources are applied in table order over the full grid volume. A cell
/// whose sample at `((origin + local) / scale)` strictly exceeds the
/// resource's scarcity is overwritten unconditionally, so a later resource
/// replaces an earlier one where both pass.
pub fn generate_resources<'a>(
    rng: &mut ChaCha8Rng,
    grid: &'a mut ChunkGrid,
    size: &WorldSize,
    origin: ChunkOrigin,
    resources: &[ResourceConfig],
) -> &'a mut ChunkGrid {
    debug_assert_eq!(grid.size(), *size);
    let noise = NoiseField::from_rng(rng);

    for resource in resources {
        let [sx, sy, sz] = resource.scale;
        let mut placed = 0usize;

        for z in 0..size.width() {
            let nz = (f64::from(origin.z) + z as f64) / sz;
            for y in 0..size.height() {
                let ny = y as f64 / sy;
                for x in 0..size.width() {
                    let nx = (f64::from(origin.x) + x as f64) / sx;
                    if noise.sample_3d(nx, ny, nz) > resource.scarcity {
                        grid.set(x, y, z, resource.block);
                        placed += 1;
                    }
                }
            }
        }

        tracing::trace!(
            resource = %resource.name,
            placed,
            "stamped resource into chunk at ({}, {})",
            origin.x,
            origin.z
        );
    }

    grid
}

//! Structure layer: oak trees planted on grass.
//!
//! Candidate columns keep a margin of the largest canopy radius from the chunk
//! edges, so trees never span chunk borders. Trunk and canopy writes go through
//! bounds-checked grid access; cells that would land outside the grid (a tall
//! tree in a short world) are skipped.

use glam::IVec3;
use rand_chacha::ChaCha8Rng;
use strata_voxel::{BlockId, ChunkGrid, WorldSize};

use crate::generator::ChunkOrigin;
use crate::noise_field::NoiseField;
use crate::params::{MAX_TREE_EXTENT, WorldParams};
use crate::seed::{round_range, uniform01};

/// Counters reported by [`generate_trees_with_stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Trees planted.
    pub trees: usize,
    /// Trunk cells written.
    pub logs: usize,
    /// Leaf cells written.
    pub leaves: usize,
    /// Trunk or canopy cells skipped because they fell outside the grid.
    pub clipped: usize,
}

/// Plant trees on the grass tops of the grid.
pub fn generate_trees<'a>(
    rng: &mut ChaCha8Rng,
    grid: &'a mut ChunkGrid,
    size: &WorldSize,
    params: &WorldParams,
    origin: ChunkOrigin,
) -> &'a mut ChunkGrid {
    generate_trees_with_stats(rng, grid, size, params, origin);
    grid
}

/// Plant trees and report what was written.
///
/// For each candidate column the noise value remapped to `[0, 1]` must reach
/// `1 - frequency`. The trunk grows from the cell above the topmost grass and
/// a spherical canopy centred on the cell above the trunk fills air cells with
/// probability `1 - canopy.density`.
pub fn generate_trees_with_stats(
    rng: &mut ChaCha8Rng,
    grid: &mut ChunkGrid,
    size: &WorldSize,
    params: &WorldParams,
    origin: ChunkOrigin,
) -> TreeStats {
    debug_assert_eq!(grid.size(), *size);
    let noise = NoiseField::from_rng(rng);
    let trees = &params.trees;
    let mut stats = TreeStats::default();

    if trees.frequency <= 0.0 {
        return stats;
    }

    let margin = trees.canopy.size.max as usize;
    let candidates = margin..size.width().saturating_sub(margin);
    let threshold = 1.0 - trees.frequency;

    for base_x in candidates.clone() {
        for base_z in candidates.clone() {
            let n = noise.sample_2d(
                f64::from(origin.x) + base_x as f64,
                f64::from(origin.z) + base_z as f64,
            ) * 0.5
                + 0.5;
            if n < threshold {
                continue;
            }

            let Some(grass_y) = topmost_grass(grid, base_x, base_z) else {
                continue;
            };
            let base = IVec3::new(base_x as i32, grass_y as i32 + 1, base_z as i32);

            // Clamped so unvalidated params cannot wrap the i32 offsets.
            let trunk_height = round_range(rng, trees.trunk_height.min, trees.trunk_height.max)
                .min(MAX_TREE_EXTENT) as i32;
            for dy in 0..trunk_height {
                if grid.set_signed(base + IVec3::Y * dy, BlockId::OakLog) {
                    stats.logs += 1;
                } else {
                    stats.clipped += 1;
                }
            }

            let radius = round_range(rng, trees.canopy.size.min, trees.canopy.size.max)
                .min(MAX_TREE_EXTENT) as i32;
            let top = base + IVec3::Y * trunk_height;
            place_canopy(rng, grid, top, radius, trees.canopy.density, &mut stats);

            stats.trees += 1;
        }
    }

    tracing::trace!(
        trees = stats.trees,
        leaves = stats.leaves,
        clipped = stats.clipped,
        "planted trees for chunk at ({}, {})",
        origin.x,
        origin.z
    );
    stats
}

/// Scan down from the top of the column for the first grass cell.
fn topmost_grass(grid: &ChunkGrid, x: usize, z: usize) -> Option<usize> {
    (0..grid.size().height())
        .rev()
        .find(|&y| grid.get(x, y, z) == BlockId::Grass)
}

fn place_canopy(
    rng: &mut ChaCha8Rng,
    grid: &mut ChunkGrid,
    center: IVec3,
    radius: i32,
    density: f64,
    stats: &mut TreeStats,
) {
    let radius_sq = i64::from(radius).pow(2);
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            for dz in -radius..=radius {
                let distance_sq = [dx, dy, dz].map(|d| i64::from(d).pow(2)).iter().sum::<i64>();
                if distance_sq > radius_sq {
                    continue;
                }
                let target = center + IVec3::new(dx, dy, dz);
                match grid.get_signed(target) {
                    Some(BlockId::Air) => {}
                    Some(_) => continue,
                    None => {
                        stats.clipped += 1;
                        continue;
                    }
                }
                if uniform01(rng) > density {
                    grid.set_signed(target, BlockId::Leaves);
                    stats.leaves += 1;
                }
            }
        }
    }
}

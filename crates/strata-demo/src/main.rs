//! Demo binary that generates a square of chunks on the worker pool.
//!
//! Configuration is loaded from `worldgen.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p strata-demo -- --seed 7 --radius 3` to generate a 7x7 area.

use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use rustc_hash::FxHashMap;
use strata_config::{CliArgs, Config, default_config_dir};
use strata_terrain::{AsyncChunkGenerator, ChunkOrigin, GeneratedChunk};
use strata_voxel::{BlockId, hash_grid};
use tracing::{debug, error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .ok_or("failed to resolve config directory; pass --config")?;

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    strata_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let generator = match config.chunk_generator() {
        Ok(generator) => Arc::new(generator),
        Err(e) => {
            error!("Refusing to generate: {e}");
            return Err(e.into());
        }
    };
    let size = generator.size();
    info!(
        seed = generator.params().seed,
        width = size.width(),
        height = size.height(),
        resources = generator.resources().len(),
        "World generator ready"
    );

    let pool = if config.workers.threads == 0 {
        AsyncChunkGenerator::with_defaults(Arc::clone(&generator))?
    } else {
        AsyncChunkGenerator::new(Arc::clone(&generator), config.workers.threads, 64, 128)?
    };

    let radius = config.workers.radius as i32;
    let origins: Vec<_> = (-radius..=radius)
        .flat_map(|cx| (-radius..=radius).map(move |cz| (cx, cz)))
        .map(|(cx, cz)| ChunkOrigin::from_chunk_coords(cx, cz, size.width()))
        .collect();

    let start = Instant::now();
    let mut finished = Vec::with_capacity(origins.len());
    for origin in &origins {
        // A full queue hands the origin back; make room and retry.
        while pool.submit(*origin).is_err() {
            finished.extend(pool.drain_results());
            std::thread::sleep(Duration::from_millis(1));
        }
    }
    while finished.len() < origins.len() {
        finished.extend(pool.drain_results());
        std::thread::sleep(Duration::from_millis(2));
    }
    let elapsed = start.elapsed();

    report(&config, &finished, elapsed);
    Ok(())
}

fn report(config: &Config, chunks: &[GeneratedChunk], elapsed: Duration) {
    let mut totals: FxHashMap<BlockId, usize> = FxHashMap::default();
    let mut busy_us = 0u64;

    for chunk in chunks {
        busy_us += chunk.generation_time_us;
        let census = chunk.grid.census();
        debug!(
            origin = %chunk.origin,
            time_us = chunk.generation_time_us,
            hash = format_args!("{:016x}", hash_grid(&chunk.grid)),
            "Chunk generated"
        );
        if config.debug.chunk_census {
            for block in BlockId::ALL {
                if let Some(count) = census.get(&block) {
                    info!("  {} {block}: {count}", chunk.origin);
                }
            }
        }
        for (block, count) in census {
            *totals.entry(block).or_default() += count;
        }
    }

    let chunk_count = chunks.len().max(1) as u64;
    info!(
        chunks = chunks.len(),
        wall_ms = elapsed.as_millis() as u64,
        avg_chunk_us = busy_us / chunk_count,
        "Generation finished"
    );
    for block in BlockId::ALL {
        let count = totals.get(&block).copied().unwrap_or(0);
        info!("{block:>12}: {count}");
    }
}

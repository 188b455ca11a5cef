//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Strata command-line arguments.
///
/// CLI values override settings loaded from `worldgen.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "strata", about = "Procedural voxel chunk generator")]
pub struct CliArgs {
    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chunk width (X and Z) in blocks.
    #[arg(long)]
    pub width: Option<usize>,

    /// Chunk height in blocks.
    #[arg(long)]
    pub height: Option<usize>,

    /// Chunks generated in each direction around the origin chunk.
    #[arg(long)]
    pub radius: Option<u32>,

    /// Worker threads (0 = one per spare core).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.generation.seed = seed;
        }
        if let Some(w) = args.width {
            self.world.width = w;
        }
        if let Some(h) = args.height {
            self.world.height = h;
        }
        if let Some(r) = args.radius {
            self.workers.radius = r;
        }
        if let Some(t) = args.threads {
            self.workers.threads = t;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some(7),
            width: Some(32),
            threads: Some(3),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.generation.seed, 7);
        assert_eq!(config.world.width, 32);
        assert_eq!(config.workers.threads, 3);
        // Non-overridden fields retain defaults
        assert_eq!(config.world.height, 128);
        assert_eq!(config.workers.radius, 2);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "strata",
            "--seed",
            "12345",
            "--height",
            "64",
            "--radius",
            "0",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.seed, Some(12345));
        assert_eq!(args.height, Some(64));
        assert_eq!(args.radius, Some(0));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.width, None);
    }
}

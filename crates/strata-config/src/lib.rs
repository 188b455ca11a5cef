//! Configuration for world generation.
//!
//! Settings persist to disk as `worldgen.ron` and can be overridden from the
//! command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, WorkerConfig, WorldSizeConfig, default_config_dir,
};
pub use error::ConfigError;

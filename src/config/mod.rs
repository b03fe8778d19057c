//! Configuration management for imply

pub mod config;
pub mod target;


// Re-export main types for convenience
pub use config::Config;
pub use imply_generator::EmitConfig;
pub use target::TargetConfig;

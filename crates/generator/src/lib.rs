//! Go stub generation from resolved interface declarations
//!
//! This crate knows nothing about parsing. It takes an [`InterfaceDecl`] plus the
//! imports collected from the declaring file and renders Go source text for a
//! concrete type whose methods return zero values.

pub mod config;
pub mod emitter;
pub mod render;
pub mod types;
pub mod zero;

pub use config::EmitConfig;
pub use emitter::{StubEmitter, StubUnit};
pub use render::{render_params, render_results};
pub use types::{ImportEntry, ImportSet, InterfaceDecl, MethodSig, Param, TypeExpr};
pub use zero::zero_value;

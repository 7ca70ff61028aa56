//! Shared primitives for the Velella sequence store workspace.
//!
//! `velella-core` provides the foundation the other Velella crates build on:
//!
//! - **Error types** — [`VelellaError`] and [`Result`] for structured error handling
//! - **Traits** — Core abstractions like [`Sequence`], [`Compressible`], [`Summarizable`]
//! - **Compression** — gzip and zstd with algorithm auto-detection

pub mod compress;
pub mod error;
pub mod traits;

pub use error::{Result, VelellaError};
pub use traits::*;

//! EdgeGrid credential file management CLI.
//!
//! Reads and rewrites `.edgerc` credential sections, merges pasted blocks,
//! copies sections, and verifies a section against the client API.
//!
//! ## Modules
//! - `cli`: Command-line handlers
//! - `core`: Business logic (ini codec, config store, signer, verifier)
//! - `models`: Data structures
//! - `util`: Filesystem, path, and logging helpers

pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
pub mod util;

pub use error::{Error, Result};

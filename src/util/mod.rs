//! Utility modules for filesystem, paths, and logging.

pub mod fs;
pub mod logging;
pub mod path;

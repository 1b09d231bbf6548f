//! Data structures for credential files and verification results.

pub mod config_file;
pub mod credential;
pub mod profile;

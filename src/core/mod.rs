//! Core logic: file codec, credential store, signing, verification.

pub mod config_store;
pub mod ini;
pub mod paths;
pub mod signer;
pub mod verifier;

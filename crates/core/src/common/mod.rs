//! Infrastructure shared by all three simulators.
//!
//! 1. **Errors:** the crate-wide [`error::SimError`] type.
//! 2. **Randomness:** the file-backed deterministic stream in [`rng`].
//! 3. **Input:** the comment-skipping line reader in [`trace`].

/// Crate-wide error type.
pub mod error;
/// Deterministic file-backed random source.
pub mod rng;
/// Comment-skipping trace reader.
pub mod trace;

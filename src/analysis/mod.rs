//! Independent checks and statistics over generated levels

/// Flood fill and reference breadth-first distances
pub mod connectivity;
/// Per-level cell counts
pub mod summary;

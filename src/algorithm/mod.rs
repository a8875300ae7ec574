/// Room-and-corridor layout generation
pub mod layout;
/// Even partitioning into a room matrix
pub mod partition;
/// Sweep-based shortest path solver
pub mod solver;
/// Corridor stitching across partition boundaries
pub mod stitching;

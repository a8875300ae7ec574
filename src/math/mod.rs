//! Mathematical utilities shared by generation and solving

/// Structuring elements and neighborhood max/min filters
pub mod morphology;

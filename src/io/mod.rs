//! Input/output operations and error handling
//!
//! This module contains the outer shell around the library:
//! - Error types
//! - Configuration defaults
//! - Command-line processing and progress display
//! - Text and PNG rendering

/// Command-line interface and batch processing
pub mod cli;
/// Default constants
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export of levels
pub mod image;
/// Batch progress display
pub mod progress;
/// Text rendering with route overlay
pub mod render;

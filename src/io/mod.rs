/// Command-line host for play and simulation
pub mod cli;
/// Game constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Batch progress display
pub mod progress;
/// Text rendering of boards and summaries
pub mod render;

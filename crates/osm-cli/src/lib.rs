//! CLI library components for the OSM tag cleaner.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;

//! CLI library components for the telehealth toolkit.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;

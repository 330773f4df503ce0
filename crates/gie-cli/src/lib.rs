//! CLI library components for the GIE client.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

// Frameworks: process bootstrap, configuration and storage drivers.

pub mod autopilot;
pub mod config;
pub mod file_store;
pub mod server;

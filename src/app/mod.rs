//! Configuration loading and session start-up.
pub mod config;
pub mod runtime;

//! Ovalis Core
//!
//! Shared plumbing for the Ovalis crates: logging setup, runtime
//! configuration and (optionally) `puffin` profiling.

pub mod config;
pub mod logging;
pub mod profiling;

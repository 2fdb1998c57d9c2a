//! Probes for the Linux `/proc` filesystem.
//!
//! This module provides parsers and collectors for reading process and host
//! information from the `/proc` virtual filesystem.

pub mod parser;
pub mod process;
pub mod system;

pub use process::ProcessCollector;
pub use system::{CpuInfo, SystemCollector};

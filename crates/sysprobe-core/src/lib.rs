//! sysprobe-core: point-in-time process and host facts for Linux.
//!
//! Provides:
//! - `collector`: probes over `/proc`, `statfs(2)` and cgroup v1 files,
//!   the severity policy and the `Collector` that assembles a snapshot
//! - `model`: the serializable snapshot types
//! - `fmt`: formatting helpers and the tab-stop column aligner
//! - `render`: table and JSON output

pub mod collector;
pub mod fmt;
pub mod model;
pub mod render;

//! Process and host fact collector for Linux.
//!
//! This module reads the `/proc` filesystem, `statfs(2)` and the cgroup v1
//! control files, with support for mocking in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                            Collector                             │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────┐  │
//! │  │ ProcessCollector │ │ SystemCollector  │ │ CgroupCollector  │  │
//! │  │ - /proc/self/fd  │ │ - /proc/cpuinfo  │ │ - memory.limit_* │  │
//! │  │ - /proc/self/... │ │ - /proc/meminfo  │ │ - cpu.cfs_*      │  │
//! │  └────────┬─────────┘ │ - /proc/mounts   │ └────────┬─────────┘  │
//! │           │           └────────┬─────────┘          │            │
//! │           └────────────────────┼────────────────────┘            │
//! │                         ┌──────▼──────┐     SeverityPolicy       │
//! │                         │  FileSystem │ (trait)                  │
//! │                         └──────┬──────┘                          │
//! └────────────────────────────────┼─────────────────────────────────┘
//!                                  │
//!                  ┌───────────────┼───────────────┐
//!           ┌──────▼──────┐ ┌──────▼──────┐ ┌──────▼──────┐
//!           │   RealFs    │ │   MockFs    │ │  Scenarios  │
//!           │  (Linux)    │ │ (Testing)   │ │ (Fixtures)  │
//!           └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```ignore
//! use sysprobe_core::collector::{Collector, RealFs};
//!
//! let collector = Collector::new(RealFs::new());
//! let snapshot = collector.collect()?;
//! ```
//!
//! ## Testing (with MockFs)
//!
//! ```
//! use sysprobe_core::collector::{Collector, MockFs};
//!
//! let fs = MockFs::typical_host();
//! let collector = Collector::new(fs);
//! let snapshot = collector.collect().unwrap();
//! assert_eq!(snapshot.vmrss_kb, 4096);
//! ```

pub mod cgroup;
#[allow(clippy::module_inception)]
mod collector;
pub mod error;
pub mod mock;
pub mod policy;
pub mod procfs;
pub mod traits;

pub use cgroup::{CgroupCollector, LimitReading};
pub use collector::Collector;
pub use error::{CollectError, ProbeError};
pub use mock::MockFs;
pub use policy::{Probe, Severity, SeverityPolicy};
pub use procfs::{CpuInfo, ProcessCollector, SystemCollector};
pub use traits::{FileSystem, FsStats, RealFs};

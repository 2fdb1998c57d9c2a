//! Data models for the host snapshot.
//!
//! - [`snapshot`]: the aggregate report and per-mount disk entries
//! - [`cgroup`]: cgroup v1 resource ceilings

mod cgroup;
mod snapshot;

pub use cgroup::CgroupLimits;
pub use snapshot::{DiskInfo, SystemSnapshot};

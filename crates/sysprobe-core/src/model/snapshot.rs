//! Point-in-time report of process and host resource state.

use serde::{Deserialize, Serialize};

use super::cgroup::CgroupLimits;

/// One mounted filesystem with its capacity.
///
/// Source: a `/proc/mounts` line plus `statfs(2)` on its mountpoint.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct DiskInfo {
    #[serde(rename = "Mountpoint")]
    pub mountpoint: String,
    #[serde(rename = "FSType")]
    pub fs_type: String,
    /// Total capacity in bytes.
    #[serde(rename = "Total")]
    pub total: u64,
    /// Free capacity in bytes.
    #[serde(rename = "Free")]
    pub free: u64,
}

/// Aggregate report produced by one collection run.
///
/// Numeric fields are zero and strings empty when their (non-fatal) probe
/// failed.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct SystemSnapshot {
    /// Open file descriptors of the current process.
    pub fd_count: u64,
    /// Resident set size of the current process, as reported in
    /// `/proc/self/status` (kB).
    #[serde(rename = "vmrss_bytes")]
    pub vmrss_kb: u64,
    /// Absolute path of the running executable.
    pub exe_path: String,
    pub cpu_model: String,
    /// Logical CPU count.
    pub cpu_cores: u64,
    /// Total host memory in kB.
    pub mem_total_kb: u64,
    /// Mounted filesystems in `/proc/mounts` order.
    pub mounts: Vec<DiskInfo>,
    /// Cgroup v1 limits. `None` when no cgroup v1 hierarchy was readable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgroup_v1: Option<CgroupLimits>,
}

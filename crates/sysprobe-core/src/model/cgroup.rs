//! Cgroup v1 resource ceilings for the current process.
//!
//! Absent fields mean "unlimited" or "could not be read"; the two cases are
//! not distinguished in the serialized form.

use serde::{Deserialize, Serialize};

/// Memory and CPU limits from the cgroup v1 hierarchy.
///
/// Source files:
/// - `/sys/fs/cgroup/memory/memory.limit_in_bytes`
/// - `/sys/fs/cgroup/cpu/cpu.cfs_quota_us`, `/sys/fs/cgroup/cpu/cpu.cfs_period_us`
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct CgroupLimits {
    /// Memory limit in bytes. `None` when unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit_bytes: Option<u64>,
    /// CPU limit as a fractional core count (quota / period). `None` when unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_limit_cores: Option<f64>,
}

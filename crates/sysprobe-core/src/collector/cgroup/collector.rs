//! Cgroup v1 limits collector.

use std::path::{Path, PathBuf};

use crate::collector::error::ProbeError;
use crate::collector::traits::FileSystem;

use super::parser::{self, LimitReading};

/// Collector for cgroup v1 memory and CPU limits.
///
/// Reads the `memory` and `cpu` controller files under the cgroup mount
/// (usually `/sys/fs/cgroup`). On cgroup v2 hosts these files do not exist
/// and both probes fail with an I/O error.
pub struct CgroupCollector<F: FileSystem> {
    fs: F,
    cgroup_path: PathBuf,
}

impl<F: FileSystem> CgroupCollector<F> {
    /// Creates a new CgroupCollector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation
    /// * `cgroup_path` - Path to the cgroup mount (e.g., "/sys/fs/cgroup")
    pub fn new(fs: F, cgroup_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            cgroup_path: cgroup_path.into(),
        }
    }

    fn read_trimmed(&self, relative: &str) -> Result<String, ProbeError> {
        let content = self
            .fs
            .read_to_string(&self.cgroup_path.join(Path::new(relative)))?;
        Ok(content.trim().to_string())
    }

    /// Reads `memory/memory.limit_in_bytes`.
    pub fn memory_limit(&self) -> Result<LimitReading<u64>, ProbeError> {
        let content = self.read_trimmed("memory/memory.limit_in_bytes")?;
        parser::parse_memory_limit(&content)
    }

    /// Reads `cpu/cpu.cfs_quota_us` and `cpu/cpu.cfs_period_us`.
    ///
    /// Both files must be readable even when the quota is unlimited.
    pub fn cpu_limit(&self) -> Result<LimitReading<f64>, ProbeError> {
        let quota = self.read_trimmed("cpu/cpu.cfs_quota_us")?;
        let period = self.read_trimmed("cpu/cpu.cfs_period_us")?;
        parser::parse_cpu_limit(&quota, &period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockFs;

    fn create_mock_cgroup_fs(memory: &str, quota: &str, period: &str) -> MockFs {
        let mut fs = MockFs::new();
        fs.add_file("/sys/fs/cgroup/memory/memory.limit_in_bytes", memory);
        fs.add_file("/sys/fs/cgroup/cpu/cpu.cfs_quota_us", quota);
        fs.add_file("/sys/fs/cgroup/cpu/cpu.cfs_period_us", period);
        fs
    }

    #[test]
    fn test_limited() {
        let fs = create_mock_cgroup_fs("536870912\n", "50000\n", "100000\n");
        let collector = CgroupCollector::new(fs, "/sys/fs/cgroup");

        assert_eq!(
            collector.memory_limit().unwrap(),
            LimitReading::Limited(536870912)
        );
        assert_eq!(collector.cpu_limit().unwrap(), LimitReading::Limited(0.5));
    }

    #[test]
    fn test_unlimited() {
        let fs = create_mock_cgroup_fs("9223372036854771712\n", "-1\n", "100000\n");
        let collector = CgroupCollector::new(fs, "/sys/fs/cgroup");

        assert_eq!(collector.memory_limit().unwrap(), LimitReading::Unlimited);
        assert_eq!(collector.cpu_limit().unwrap(), LimitReading::Unlimited);
    }

    #[test]
    fn test_zero_period() {
        let fs = create_mock_cgroup_fs("1024\n", "50000\n", "0\n");
        let collector = CgroupCollector::new(fs, "/sys/fs/cgroup");

        assert!(matches!(collector.cpu_limit(), Err(ProbeError::ZeroPeriod)));
    }

    #[test]
    fn test_missing_period_file_fails_even_when_unlimited() {
        let mut fs = MockFs::new();
        fs.add_file("/sys/fs/cgroup/cpu/cpu.cfs_quota_us", "-1\n");
        let collector = CgroupCollector::new(fs, "/sys/fs/cgroup");

        assert!(matches!(collector.cpu_limit(), Err(ProbeError::Io(_))));
    }

    #[test]
    fn test_cgroup_v2_host() {
        let mut fs = MockFs::new();
        fs.add_file("/sys/fs/cgroup/memory.max", "max\n");
        fs.add_file("/sys/fs/cgroup/cpu.max", "max 100000\n");
        let collector = CgroupCollector::new(fs, "/sys/fs/cgroup");

        assert!(matches!(collector.memory_limit(), Err(ProbeError::Io(_))));
        assert!(matches!(collector.cpu_limit(), Err(ProbeError::Io(_))));
    }
}

//! Probes for the current process from `/proc/self/`.

use crate::collector::error::ProbeError;
use crate::collector::procfs::parser::parse_vmrss;
use crate::collector::traits::FileSystem;
use std::path::PathBuf;

/// Reads facts about the running process from `/proc/self/`.
pub struct ProcessCollector<F: FileSystem> {
    fs: F,
    self_dir: PathBuf,
}

impl<F: FileSystem> ProcessCollector<F> {
    /// Creates a new process collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            self_dir: proc_path.into().join("self"),
        }
    }

    /// Counts entries in `/proc/self/fd`.
    pub fn count_fds(&self) -> Result<u64, ProbeError> {
        let entries = self.fs.read_dir(&self.self_dir.join("fd"))?;
        Ok(entries.len() as u64)
    }

    /// Reads `VmRSS` (kB) from `/proc/self/status`.
    pub fn read_rss(&self) -> Result<u64, ProbeError> {
        let content = self.fs.read_to_string(&self.self_dir.join("status"))?;
        parse_vmrss(&content).ok_or(ProbeError::NotFound("VmRSS"))
    }

    /// Resolves `/proc/self/exe`.
    pub fn exe_path(&self) -> Result<String, ProbeError> {
        let path = self.fs.read_link(&self.self_dir.join("exe"))?;
        Ok(path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_count_fds() {
        let mut fs = MockFs::new();
        fs.add_fds("/proc/self/fd", 5);
        let collector = ProcessCollector::new(fs, "/proc");

        assert_eq!(collector.count_fds().unwrap(), 5);
    }

    #[test]
    fn test_count_fds_missing_dir() {
        let collector = ProcessCollector::new(MockFs::new(), "/proc");
        assert!(matches!(collector.count_fds(), Err(ProbeError::Io(_))));
    }

    #[test]
    fn test_read_rss() {
        let mut fs = MockFs::new();
        fs.add_file(
            "/proc/self/status",
            "Name:\tsysprobe\nVmPeak:\t 9000 kB\nVmRSS:\t    4096 kB\n",
        );
        let collector = ProcessCollector::new(fs, "/proc");

        assert_eq!(collector.read_rss().unwrap(), 4096);
    }

    #[test]
    fn test_read_rss_not_found() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/self/status", "Name:\tkworker\n");
        let collector = ProcessCollector::new(fs, "/proc");

        assert!(matches!(
            collector.read_rss(),
            Err(ProbeError::NotFound("VmRSS"))
        ));
    }

    #[test]
    fn test_read_rss_unreadable() {
        let collector = ProcessCollector::new(MockFs::new(), "/proc");
        assert!(matches!(collector.read_rss(), Err(ProbeError::Io(_))));
    }

    #[test]
    fn test_exe_path() {
        let mut fs = MockFs::new();
        fs.add_link("/proc/self/exe", "/usr/local/bin/sysprobe");
        let collector = ProcessCollector::new(fs, "/proc");

        assert_eq!(collector.exe_path().unwrap(), "/usr/local/bin/sysprobe");
    }

    #[test]
    fn test_exe_path_missing_link() {
        let collector = ProcessCollector::new(MockFs::new(), "/proc");
        assert!(matches!(collector.exe_path(), Err(ProbeError::Io(_))));
    }

    #[test]
    fn test_custom_proc_path() {
        let mut fs = MockFs::new();
        fs.add_fds("/host/proc/self/fd", 2);
        let collector = ProcessCollector::new(fs, "/host/proc");

        assert_eq!(collector.count_fds().unwrap(), 2);
    }
}

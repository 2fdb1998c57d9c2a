//! System collector for host-wide facts from `/proc/`.

use crate::collector::error::ProbeError;
use crate::collector::procfs::parser::{
    is_pseudo_fs, parse_cpu_model, parse_mem_total, parse_mounts,
};
use crate::collector::traits::FileSystem;
use crate::model::DiskInfo;
use std::path::{Path, PathBuf};

/// CPU identification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CpuInfo {
    /// First `model name` in `/proc/cpuinfo`, empty if none.
    pub model: String,
    /// Logical CPUs available to this process.
    pub cores: u64,
}

/// Collects host-wide facts from `/proc/`.
pub struct SystemCollector<F: FileSystem> {
    fs: F,
    proc_path: PathBuf,
}

impl<F: FileSystem> SystemCollector<F> {
    /// Creates a new system collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    /// Reads the CPU model from `/proc/cpuinfo`.
    ///
    /// The core count comes from the standard library, not from the file.
    pub fn collect_cpuinfo(&self) -> Result<CpuInfo, ProbeError> {
        let content = self.fs.read_to_string(&self.proc_path.join("cpuinfo"))?;
        Ok(CpuInfo {
            model: parse_cpu_model(&content),
            cores: logical_cpus(),
        })
    }

    /// Reads `MemTotal` (kB) from `/proc/meminfo`.
    pub fn collect_mem_total(&self) -> Result<u64, ProbeError> {
        let content = self.fs.read_to_string(&self.proc_path.join("meminfo"))?;
        Ok(parse_mem_total(&content))
    }

    /// Lists mounted filesystems with their capacity.
    ///
    /// Pseudo filesystems are skipped, and so is any mount whose `statfs`
    /// fails (it may have been unmounted since `/proc/mounts` was read).
    pub fn collect_disks(&self) -> Result<Vec<DiskInfo>, ProbeError> {
        let content = self.fs.read_to_string(&self.proc_path.join("mounts"))?;

        let disks = parse_mounts(&content)
            .into_iter()
            .filter(|entry| !is_pseudo_fs(&entry.fs_type))
            .filter_map(|entry| {
                let stats = self.fs.statfs(Path::new(&entry.mountpoint)).ok()?;
                Some(DiskInfo {
                    total: stats.total_bytes(),
                    free: stats.free_bytes(),
                    mountpoint: entry.mountpoint,
                    fs_type: entry.fs_type,
                })
            })
            .collect();

        Ok(disks)
    }
}

fn logical_cpus() -> u64 {
    std::thread::available_parallelism().map_or(1, |n| n.get() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;
    use crate::collector::traits::FsStats;

    fn stats(blocks: u64, free_blocks: u64) -> FsStats {
        FsStats {
            blocks,
            free_blocks,
            block_size: 4096,
        }
    }

    #[test]
    fn test_collect_cpuinfo() {
        let mut fs = MockFs::new();
        fs.add_file(
            "/proc/cpuinfo",
            "processor\t: 0\nmodel name\t: AMD EPYC 7B13\n",
        );
        let collector = SystemCollector::new(fs, "/proc");

        let info = collector.collect_cpuinfo().unwrap();
        assert_eq!(info.model, "AMD EPYC 7B13");
        assert!(info.cores >= 1);
    }

    #[test]
    fn test_collect_cpuinfo_without_model() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/cpuinfo", "processor\t: 0\nBogoMIPS\t: 50.00\n");
        let collector = SystemCollector::new(fs, "/proc");

        let info = collector.collect_cpuinfo().unwrap();
        assert_eq!(info.model, "");
        assert!(info.cores >= 1);
    }

    #[test]
    fn test_collect_cpuinfo_unreadable() {
        let collector = SystemCollector::new(MockFs::new(), "/proc");
        assert!(matches!(
            collector.collect_cpuinfo(),
            Err(ProbeError::Io(_))
        ));
    }

    #[test]
    fn test_collect_mem_total() {
        let mut fs = MockFs::new();
        fs.add_file(
            "/proc/meminfo",
            "MemTotal:       16384000 kB\nMemFree:         8192000 kB\n",
        );
        let collector = SystemCollector::new(fs, "/proc");

        assert_eq!(collector.collect_mem_total().unwrap(), 16384000);
    }

    #[test]
    fn test_collect_disks_single_mount() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/mounts", "/dev/sda1 / ext4 rw 0 0\n");
        fs.add_mount("/", stats(1_000_000, 250_000));
        let collector = SystemCollector::new(fs, "/proc");

        let disks = collector.collect_disks().unwrap();
        assert_eq!(
            disks,
            vec![DiskInfo {
                mountpoint: "/".to_string(),
                fs_type: "ext4".to_string(),
                total: 4_096_000_000,
                free: 1_024_000_000,
            }]
        );
    }

    #[test]
    fn test_collect_disks_filters_and_keeps_order() {
        let mut fs = MockFs::new();
        fs.add_file(
            "/proc/mounts",
            "\
/dev/sdb1 /data xfs rw 0 0
proc /proc proc rw 0 0
sysfs /sys sysfs rw 0 0
cgroup /sys/fs/cgroup/memory cgroup rw,memory 0 0
weird /weird sysfsx rw 0 0
short line
/dev/sda1 / ext4 rw 0 0
/dev/sdc1 /gone ext4 rw 0 0
",
        );
        fs.add_mount("/data", stats(100, 50));
        fs.add_mount("/proc", stats(0, 0));
        fs.add_mount("/sys", stats(0, 0));
        fs.add_mount("/sys/fs/cgroup/memory", stats(0, 0));
        fs.add_mount("/weird", stats(10, 10));
        fs.add_mount("/", stats(1000, 10));
        let collector = SystemCollector::new(fs, "/proc");

        let disks = collector.collect_disks().unwrap();
        let mountpoints: Vec<&str> = disks.iter().map(|d| d.mountpoint.as_str()).collect();
        assert_eq!(mountpoints, vec!["/data", "/weird", "/"]);
        assert_eq!(disks[1].fs_type, "sysfsx");
    }

    #[test]
    fn test_collect_disks_unreadable_mounts() {
        let collector = SystemCollector::new(MockFs::new(), "/proc");
        assert!(matches!(collector.collect_disks(), Err(ProbeError::Io(_))));
    }
}

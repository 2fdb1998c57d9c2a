//! Main collector that runs every probe and assembles the snapshot.
//!
//! The `Collector` struct provides a unified interface for gathering all
//! process and host facts into a `SystemSnapshot`.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, warn};

use crate::collector::cgroup::{CgroupCollector, LimitReading};
use crate::collector::error::{CollectError, ProbeError};
use crate::collector::policy::{Probe, SeverityPolicy};
use crate::collector::procfs::{CpuInfo, ProcessCollector, SystemCollector};
use crate::collector::traits::FileSystem;
use crate::model::{CgroupLimits, DiskInfo, SystemSnapshot};

/// Main collector that gathers a full snapshot.
///
/// Combines process, system and cgroup collectors and applies the
/// severity policy to every probe failure.
pub struct Collector<F: FileSystem + Clone> {
    fs: F,
    process_collector: ProcessCollector<F>,
    system_collector: SystemCollector<F>,
    cgroup_collector: CgroupCollector<F>,
    policy: SeverityPolicy,
}

impl<F: FileSystem + Clone> Collector<F> {
    /// Default proc filesystem path.
    pub const DEFAULT_PROC_PATH: &'static str = "/proc";
    /// Default cgroup mount path.
    pub const DEFAULT_CGROUP_PATH: &'static str = "/sys/fs/cgroup";

    /// Creates a new collector over `fs` (real or mock).
    ///
    /// Reads `/proc` and `/sys/fs/cgroup` unless overridden with
    /// [`Collector::with_proc_path`] and [`Collector::with_cgroup_path`].
    pub fn new(fs: F) -> Self {
        Self {
            process_collector: ProcessCollector::new(fs.clone(), Self::DEFAULT_PROC_PATH),
            system_collector: SystemCollector::new(fs.clone(), Self::DEFAULT_PROC_PATH),
            cgroup_collector: CgroupCollector::new(fs.clone(), Self::DEFAULT_CGROUP_PATH),
            policy: SeverityPolicy::default(),
            fs,
        }
    }

    /// Reads process and host facts from a custom proc mount.
    pub fn with_proc_path(mut self, proc_path: impl Into<PathBuf>) -> Self {
        let proc_path = proc_path.into();
        self.process_collector = ProcessCollector::new(self.fs.clone(), &proc_path);
        self.system_collector = SystemCollector::new(self.fs.clone(), &proc_path);
        self
    }

    /// Reads cgroup limits from a custom cgroup mount.
    pub fn with_cgroup_path(mut self, cgroup_path: impl Into<PathBuf>) -> Self {
        self.cgroup_collector = CgroupCollector::new(self.fs.clone(), cgroup_path);
        self
    }

    /// Replaces the severity policy.
    pub fn with_policy(mut self, policy: SeverityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &SeverityPolicy {
        &self.policy
    }

    /// Number of open file descriptors of the current process.
    pub fn count_fds(&self) -> Result<u64, ProbeError> {
        self.process_collector.count_fds()
    }

    /// Resident set size of the current process, in kB.
    pub fn read_rss(&self) -> Result<u64, ProbeError> {
        self.process_collector.read_rss()
    }

    pub fn exe_path(&self) -> Result<String, ProbeError> {
        self.process_collector.exe_path()
    }

    pub fn cpu_info(&self) -> Result<CpuInfo, ProbeError> {
        self.system_collector.collect_cpuinfo()
    }

    /// Total host memory, in kB.
    pub fn mem_total(&self) -> Result<u64, ProbeError> {
        self.system_collector.collect_mem_total()
    }

    pub fn disks(&self) -> Result<Vec<DiskInfo>, ProbeError> {
        self.system_collector.collect_disks()
    }

    pub fn cgroup_memory_limit(&self) -> Result<LimitReading<u64>, ProbeError> {
        self.cgroup_collector.memory_limit()
    }

    pub fn cgroup_cpu_limit(&self) -> Result<LimitReading<f64>, ProbeError> {
        self.cgroup_collector.cpu_limit()
    }

    /// Applies the severity policy to one probe result.
    ///
    /// Returns `Ok(None)` for a tolerated failure, after logging it.
    fn check<T: std::fmt::Debug>(
        &self,
        probe: Probe,
        result: Result<T, ProbeError>,
    ) -> Result<Option<T>, CollectError> {
        match result {
            Ok(value) => {
                debug!("{}: {:?}", probe, value);
                Ok(Some(value))
            }
            Err(source) if self.policy.is_fatal(probe) => {
                Err(CollectError::Fatal { probe, source })
            }
            Err(e) => {
                warn!("{} error: {}", probe, e);
                Ok(None)
            }
        }
    }

    /// Runs every probe in order and assembles the snapshot.
    ///
    /// Stops at the first failure of a probe the policy marks fatal. Other
    /// failures leave their field at the default value.
    pub fn collect(&self) -> Result<SystemSnapshot, CollectError> {
        let start = Instant::now();

        let fd_count = self.check(Probe::FdCount, self.count_fds())?;
        let vmrss_kb = self.check(Probe::Rss, self.read_rss())?;
        let exe_path = self.check(Probe::ExePath, self.exe_path())?;
        let cpu = self.check(Probe::CpuInfo, self.cpu_info())?;
        let mem_total_kb = self.check(Probe::MemTotal, self.mem_total())?;
        let mounts = self.check(Probe::Mounts, self.disks())?;
        let memory_limit = self.check(Probe::CgroupMemory, self.cgroup_memory_limit())?;
        let cpu_limit = self.check(Probe::CgroupCpu, self.cgroup_cpu_limit())?;

        // No cgroup v1 hierarchy at all: leave the section out.
        let cgroup_v1 = if memory_limit.is_none() && cpu_limit.is_none() {
            None
        } else {
            Some(CgroupLimits {
                memory_limit_bytes: memory_limit.and_then(LimitReading::limit),
                cpu_limit_cores: cpu_limit.and_then(LimitReading::limit),
            })
        };

        let cpu = cpu.unwrap_or_default();
        let snapshot = SystemSnapshot {
            fd_count: fd_count.unwrap_or_default(),
            vmrss_kb: vmrss_kb.unwrap_or_default(),
            exe_path: exe_path.unwrap_or_default(),
            cpu_model: cpu.model,
            cpu_cores: cpu.cores,
            mem_total_kb: mem_total_kb.unwrap_or_default(),
            mounts: mounts.unwrap_or_default(),
            cgroup_v1,
        };

        debug!(
            "snapshot collected in {:?}: {} mounts",
            start.elapsed(),
            snapshot.mounts.len()
        );
        Ok(snapshot)
    }
}

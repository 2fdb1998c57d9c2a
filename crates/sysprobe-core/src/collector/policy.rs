//! Per-probe failure severity.
//!
//! A failing probe either aborts the whole collection (`Fatal`) or is logged
//! and leaves its field at the default value (`Warn`).

use std::collections::HashMap;

/// Identifies one probe. Variants are listed in collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Probe {
    FdCount,
    Rss,
    ExePath,
    CpuInfo,
    MemTotal,
    Mounts,
    CgroupMemory,
    CgroupCpu,
}

impl Probe {
    /// All probes in collection order.
    pub const ALL: [Probe; 8] = [
        Probe::FdCount,
        Probe::Rss,
        Probe::ExePath,
        Probe::CpuInfo,
        Probe::MemTotal,
        Probe::Mounts,
        Probe::CgroupMemory,
        Probe::CgroupCpu,
    ];

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Probe::FdCount => "FDs counting",
            Probe::Rss => "VmRSS",
            Probe::ExePath => "Path",
            Probe::CpuInfo => "CPU info",
            Probe::MemTotal => "Mem info",
            Probe::Mounts => "Disk info",
            Probe::CgroupMemory => "cgroup memory limit",
            Probe::CgroupCpu => "cgroup CPU limit",
        }
    }
}

impl std::fmt::Display for Probe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How a probe failure affects the collection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Abort the run; no report is produced.
    Fatal,
    /// Log the failure and keep the field at its default.
    Warn,
}

/// Severity table consulted by the collector for every probe failure.
///
/// The default policy treats the FD-count and RSS probes as fatal and every
/// other probe as a warning.
#[derive(Debug, Clone)]
pub struct SeverityPolicy {
    overrides: HashMap<Probe, Severity>,
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self::new()
            .with(Probe::FdCount, Severity::Fatal)
            .with(Probe::Rss, Severity::Fatal)
    }
}

impl SeverityPolicy {
    /// Creates a policy where every probe is `Warn`.
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Sets the severity for one probe.
    pub fn with(mut self, probe: Probe, severity: Severity) -> Self {
        self.overrides.insert(probe, severity);
        self
    }

    /// Returns the severity for `probe`.
    pub fn severity(&self, probe: Probe) -> Severity {
        self.overrides
            .get(&probe)
            .copied()
            .unwrap_or(Severity::Warn)
    }

    pub fn is_fatal(&self, probe: Probe) -> bool {
        self.severity(probe) == Severity::Fatal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_fatal_split() {
        let policy = SeverityPolicy::default();
        let fatal: Vec<Probe> = Probe::ALL
            .into_iter()
            .filter(|p| policy.is_fatal(*p))
            .collect();
        assert_eq!(fatal, vec![Probe::FdCount, Probe::Rss]);
    }

    #[test]
    fn test_policy_override() {
        let policy = SeverityPolicy::default()
            .with(Probe::Rss, Severity::Warn)
            .with(Probe::Mounts, Severity::Fatal);
        assert_eq!(policy.severity(Probe::Rss), Severity::Warn);
        assert_eq!(policy.severity(Probe::Mounts), Severity::Fatal);
        assert_eq!(policy.severity(Probe::FdCount), Severity::Fatal);
    }

    #[test]
    fn test_empty_policy_is_lenient() {
        let policy = SeverityPolicy::new();
        assert!(Probe::ALL.iter().all(|p| !policy.is_fatal(*p)));
    }
}

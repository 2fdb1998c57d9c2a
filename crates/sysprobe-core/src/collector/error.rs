//! Error types for probe and collection failures.

use crate::collector::policy::Probe;

/// Error type for a single probe failure.
#[derive(Debug)]
pub enum ProbeError {
    /// I/O error reading a pseudo-file, directory or link.
    Io(std::io::Error),
    /// An expected entry was missing from an otherwise readable file.
    NotFound(&'static str),
    /// Parse error in file contents.
    Parse(String),
    /// CFS period is zero, so no quota ratio can be computed.
    ZeroPeriod,
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeError::Io(e) => write!(f, "I/O error: {}", e),
            ProbeError::NotFound(what) => write!(f, "{} not found", what),
            ProbeError::Parse(msg) => write!(f, "parse error: {}", msg),
            ProbeError::ZeroPeriod => write!(f, "cpu.cfs_period_us is zero"),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(e: std::io::Error) -> Self {
        ProbeError::Io(e)
    }
}

/// Error returned when a probe marked fatal fails and the run must stop.
#[derive(Debug)]
pub enum CollectError {
    Fatal { probe: Probe, source: ProbeError },
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Fatal { probe, source } => write!(f, "{} error: {}", probe, source),
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Fatal { source, .. } => Some(source),
        }
    }
}

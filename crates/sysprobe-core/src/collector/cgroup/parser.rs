//! Parsers for cgroup v1 limit files.

use crate::collector::error::ProbeError;

/// Smallest `memory.limit_in_bytes` value the kernel uses to mean "no limit".
///
/// The kernel reports `PAGE_COUNTER_MAX` rounded down to the page size, which
/// lands just below 2^63.
pub const MEMORY_UNLIMITED_THRESHOLD: u64 = (1 << 63) - 4096;

/// Quota value written to `cpu.cfs_quota_us` when no limit is set.
pub const CPU_QUOTA_UNLIMITED: &str = "-1";

/// A limit read from a cgroup control file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LimitReading<T> {
    Limited(T),
    Unlimited,
}

impl<T> LimitReading<T> {
    /// Returns the limit value, `None` when unlimited.
    pub fn limit(self) -> Option<T> {
        match self {
            LimitReading::Limited(v) => Some(v),
            LimitReading::Unlimited => None,
        }
    }
}

/// Parses `memory/memory.limit_in_bytes`.
/// Format: decimal byte count, "no limit" is a value near 2^63.
pub fn parse_memory_limit(content: &str) -> Result<LimitReading<u64>, ProbeError> {
    let trimmed = content.trim();
    let bytes: u64 = trimmed
        .parse()
        .map_err(|e| ProbeError::Parse(format!("memory.limit_in_bytes {:?}: {}", trimmed, e)))?;

    if bytes >= MEMORY_UNLIMITED_THRESHOLD {
        Ok(LimitReading::Unlimited)
    } else {
        Ok(LimitReading::Limited(bytes))
    }
}

/// Parses `cpu/cpu.cfs_quota_us` and `cpu/cpu.cfs_period_us` into a core count.
///
/// A quota of exactly `-1` means unlimited and is checked before anything
/// else is parsed, so the period may be garbage in that case.
pub fn parse_cpu_limit(quota: &str, period: &str) -> Result<LimitReading<f64>, ProbeError> {
    let quota = quota.trim();
    let period = period.trim();

    if quota == CPU_QUOTA_UNLIMITED {
        return Ok(LimitReading::Unlimited);
    }

    let quota = parse_finite("cpu.cfs_quota_us", quota)?;
    let period = parse_finite("cpu.cfs_period_us", period)?;

    if period == 0.0 {
        return Err(ProbeError::ZeroPeriod);
    }

    let cores = quota / period;
    if !cores.is_finite() {
        return Err(ProbeError::Parse(format!(
            "cpu limit {} / {} is not finite",
            quota, period
        )));
    }
    Ok(LimitReading::Limited(cores))
}

/// `f64::from_str` also accepts `inf` and `NaN`, which have no JSON form.
fn parse_finite(file: &str, value: &str) -> Result<f64, ProbeError> {
    let parsed: f64 = value
        .parse()
        .map_err(|e| ProbeError::Parse(format!("{} {:?}: {}", file, value, e)))?;
    if !parsed.is_finite() {
        return Err(ProbeError::Parse(format!("{} {:?}: not finite", file, value)));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_memory_limit() {
        assert_eq!(
            parse_memory_limit("536870912\n").unwrap(),
            LimitReading::Limited(536870912)
        );
        assert_eq!(parse_memory_limit("0").unwrap(), LimitReading::Limited(0));
    }

    #[test]
    fn test_parse_memory_limit_unlimited() {
        assert_eq!(
            parse_memory_limit("9223372036854771712\n").unwrap(),
            LimitReading::Unlimited
        );
        assert_eq!(
            parse_memory_limit(&u64::MAX.to_string()).unwrap(),
            LimitReading::Unlimited
        );
    }

    #[test]
    fn test_parse_memory_limit_threshold_boundary() {
        assert_eq!(
            parse_memory_limit(&(MEMORY_UNLIMITED_THRESHOLD - 1).to_string()).unwrap(),
            LimitReading::Limited(MEMORY_UNLIMITED_THRESHOLD - 1)
        );
        assert_eq!(
            parse_memory_limit(&MEMORY_UNLIMITED_THRESHOLD.to_string()).unwrap(),
            LimitReading::Unlimited
        );
    }

    #[test]
    fn test_parse_memory_limit_invalid() {
        assert!(matches!(
            parse_memory_limit("max\n"),
            Err(ProbeError::Parse(_))
        ));
        assert!(matches!(parse_memory_limit("-1"), Err(ProbeError::Parse(_))));
        assert!(matches!(parse_memory_limit(""), Err(ProbeError::Parse(_))));
    }

    #[test]
    fn test_parse_cpu_limit() {
        assert_eq!(
            parse_cpu_limit("50000\n", "100000\n").unwrap(),
            LimitReading::Limited(0.5)
        );
        assert_eq!(
            parse_cpu_limit("200000", "100000").unwrap(),
            LimitReading::Limited(2.0)
        );
    }

    #[test]
    fn test_parse_cpu_limit_unlimited_ignores_period() {
        assert_eq!(
            parse_cpu_limit("-1\n", "100000\n").unwrap(),
            LimitReading::Unlimited
        );
        assert_eq!(parse_cpu_limit("-1", "0").unwrap(), LimitReading::Unlimited);
        assert_eq!(
            parse_cpu_limit("-1", "garbage").unwrap(),
            LimitReading::Unlimited
        );
    }

    #[test]
    fn test_parse_cpu_limit_zero_period() {
        assert!(matches!(
            parse_cpu_limit("50000", "0"),
            Err(ProbeError::ZeroPeriod)
        ));
        assert!(matches!(
            parse_cpu_limit("-2", "0.0"),
            Err(ProbeError::ZeroPeriod)
        ));
    }

    #[test]
    fn test_parse_cpu_limit_invalid() {
        assert!(matches!(
            parse_cpu_limit("max", "100000"),
            Err(ProbeError::Parse(_))
        ));
        assert!(matches!(
            parse_cpu_limit("50000", "abc"),
            Err(ProbeError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_cpu_limit_rejects_non_finite() {
        for (quota, period) in [
            ("inf", "100000"),
            ("-infinity", "100000"),
            ("NaN", "100000"),
            ("50000", "nan"),
            ("50000", "inf"),
            ("1e308", "1e-300"),
        ] {
            assert!(
                matches!(parse_cpu_limit(quota, period), Err(ProbeError::Parse(_))),
                "{} / {} accepted",
                quota,
                period
            );
        }
    }

    #[test]
    fn test_limit_reading_limit() {
        assert_eq!(LimitReading::Limited(3u64).limit(), Some(3));
        assert_eq!(LimitReading::<u64>::Unlimited.limit(), None);
    }
}

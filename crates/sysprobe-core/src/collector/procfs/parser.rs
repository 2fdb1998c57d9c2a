//! Parsers for `/proc` filesystem files.
//!
//! These are pure functions that parse the content of various `/proc` files
//! into structured data. They are designed to be easily testable with string inputs.

/// Filesystem types that never show up in the disk report.
const PSEUDO_FS_TYPES: [&str; 3] = ["proc", "sysfs", "cgroup"];

/// One line of `/proc/mounts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountEntry {
    pub device: String,
    pub mountpoint: String,
    pub fs_type: String,
}

/// Reads the leading decimal digits of the first whitespace-delimited token.
///
/// Mirrors `scanf("%d")`: `"1234 kB"` gives 1234, `"12abc"` gives 12 and a
/// token without leading digits gives 0.
fn leading_int(s: &str) -> u64 {
    let Some(token) = s.split_whitespace().next() else {
        return 0;
    };
    let digits = token
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(token, |(idx, _)| &token[..idx]);
    digits.parse().unwrap_or(0)
}

/// Extracts the `VmRSS` value (kB) from `/proc/[pid]/status`.
///
/// Returns `None` when no line starts with `VmRSS:`. The first matching
/// line wins.
pub fn parse_vmrss(content: &str) -> Option<u64> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("VmRSS:"))
        .map(leading_int)
}

/// Extracts the CPU model name from `/proc/cpuinfo`.
///
/// Uses the first `model name` line that contains a colon. Returns an empty
/// string when there is none (e.g. on most ARM kernels).
pub fn parse_cpu_model(content: &str) -> String {
    content
        .lines()
        .filter(|line| line.starts_with("model name"))
        .find_map(|line| line.split_once(':'))
        .map(|(_, model)| model.trim().to_string())
        .unwrap_or_default()
}

/// Extracts `MemTotal` (kB) from `/proc/meminfo`.
///
/// Every `MemTotal:` line overwrites the previous one; 0 when absent.
pub fn parse_mem_total(content: &str) -> u64 {
    content
        .lines()
        .filter_map(|line| line.strip_prefix("MemTotal:"))
        .map(leading_int)
        .last()
        .unwrap_or(0)
}

/// Parses `/proc/mounts` into entries in file order.
///
/// Empty lines and lines with fewer than three fields are skipped.
pub fn parse_mounts(content: &str) -> Vec<MountEntry> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 3 {
                return None;
            }
            Some(MountEntry {
                device: fields[0].to_string(),
                mountpoint: fields[1].to_string(),
                fs_type: fields[2].to_string(),
            })
        })
        .collect()
}

/// Returns `true` for filesystem types excluded from the disk report.
///
/// Exact, case-sensitive match: `sysfsx` or `cgroup2` are real entries.
pub fn is_pseudo_fs(fs_type: &str) -> bool {
    PSEUDO_FS_TYPES.contains(&fs_type)
}

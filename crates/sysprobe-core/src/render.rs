//! Text and JSON rendering of a [`SystemSnapshot`].

use crate::fmt::{TabWriter, format_cores, human_mb};
use crate::model::SystemSnapshot;

/// Output mode of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab-aligned human-readable table.
    #[default]
    Table,
    /// Pretty-printed JSON with two-space indentation.
    Json,
}

/// Renders `snapshot` in the requested format, newline-terminated.
///
/// Only JSON serialization can fail.
pub fn render(snapshot: &SystemSnapshot, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(snapshot)),
        OutputFormat::Json => {
            let mut out = render_json(snapshot)?;
            out.push('\n');
            Ok(out)
        }
    }
}

pub fn render_json(snapshot: &SystemSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// Renders the fixed-layout table.
///
/// Sections: process and host facts, cgroup limits (only when a cgroup v1
/// hierarchy was found), mount count, then one row per mount.
pub fn render_table(snapshot: &SystemSnapshot) -> String {
    let mut w = TabWriter::new(2);
    write_table(&mut w, snapshot);
    w.into_string()
}

fn write_table(w: &mut TabWriter, s: &SystemSnapshot) {
    w.line(&format!("FDs count:\t {}", s.fd_count));
    w.line(&format!("VmRSS:\t {} B", s.vmrss_kb));
    w.line(&format!("EXE path:\t {}", s.exe_path));
    w.line(&format!("CPU model:\t {}", s.cpu_model));
    w.line(&format!("CPU cores:\t {}", s.cpu_cores));
    w.line(&format!("MemTotal:\t {} kB", s.mem_total_kb));

    if let Some(cgroup) = &s.cgroup_v1 {
        let mem_limit = cgroup
            .memory_limit_bytes
            .map_or_else(|| "unlimited".to_string(), human_mb);
        let cpu_limit = cgroup
            .cpu_limit_cores
            .map_or_else(|| "unlimited".to_string(), format_cores);
        w.line(&format!("Cgroup (v1) MemLimit:\t {}", mem_limit));
        w.line(&format!("Cgroup (v1) CPULimit:\t {}", cpu_limit));
        w.line("");
    }

    w.line(&format!("Mounts count:\t {}", s.mounts.len()));
    w.line("");

    w.line("Mount:\tFS:\tTotal:\tFree:");
    for d in &s.mounts {
        w.line(&format!(
            "{}\t{}\t{}\t{}",
            d.mountpoint,
            d.fs_type,
            human_mb(d.total),
            human_mb(d.free)
        ));
    }
}

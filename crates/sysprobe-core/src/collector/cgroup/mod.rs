//! Cgroup v1 limit probes.

mod collector;
pub mod parser;

pub use collector::CgroupCollector;
pub use parser::LimitReading;

//! Mock filesystem and fixtures for exercising probes without a real host.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;

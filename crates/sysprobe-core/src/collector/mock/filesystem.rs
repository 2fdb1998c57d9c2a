//! In-memory mock filesystem for testing probes without real `/proc`.
//!
//! This module provides `MockFs` which simulates a filesystem in memory,
//! allowing tests to run in CI environments and on hosts without cgroup v1.

use crate::collector::traits::{FileSystem, FsStats};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Stores files, directories, symlinks and per-mount `statfs` results in
/// memory, so tests can simulate various host states.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: HashMap<PathBuf, String>,
    /// Set of directories (for read_dir support).
    directories: HashSet<PathBuf>,
    /// Map from link path to link target.
    links: HashMap<PathBuf, PathBuf>,
    /// Map from mountpoint to filesystem statistics.
    mounts: HashMap<PathBuf, FsStats>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content.
    ///
    /// Parent directories are automatically created.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.files.insert(path, content.into());
    }

    /// Adds an empty directory.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.directories.insert(path);
    }

    /// Adds a symbolic link pointing at `target`.
    pub fn add_link(&mut self, path: impl AsRef<Path>, target: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.links.insert(path, target.as_ref().to_path_buf());
    }

    /// Registers `statfs` results for a mountpoint.
    pub fn add_mount(&mut self, mountpoint: impl AsRef<Path>, stats: FsStats) {
        self.mounts.insert(mountpoint.as_ref().to_path_buf(), stats);
    }

    /// Adds `count` entries to a process file-descriptor directory.
    ///
    /// Entries are symlinks named `0..count`, the way `/proc/self/fd` lists them.
    pub fn add_fds(&mut self, fd_dir: impl AsRef<Path>, count: usize) {
        let fd_dir = fd_dir.as_ref().to_path_buf();
        self.add_dir(&fd_dir);
        for fd in 0..count {
            self.add_link(fd_dir.join(fd.to_string()), "/dev/null");
        }
    }

    /// Checks if a file, directory or link exists at `path`.
    pub fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
            || self.directories.contains(path)
            || self.links.contains_key(path)
    }

    fn add_parents(&mut self, path: &Path) {
        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                self.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }
    }
}

fn not_found(what: &str, path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} not found: {:?}", what, path),
    )
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found("file", path))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.directories.contains(path) {
            return Err(not_found("directory", path));
        }

        let is_child = |p: &Path| p.parent().is_some_and(|parent| parent == path);

        // Direct children only
        let entries: HashSet<PathBuf> = self
            .files
            .keys()
            .chain(self.links.keys())
            .chain(self.directories.iter().filter(|d| d.as_path() != path))
            .filter(|p| is_child(p.as_path()))
            .cloned()
            .collect();

        Ok(entries.into_iter().collect())
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        if let Some(target) = self.links.get(path) {
            return Ok(target.clone());
        }
        if self.exists(path) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a symbolic link: {:?}", path),
            ));
        }
        Err(not_found("link", path))
    }

    fn statfs(&self, path: &Path) -> io::Result<FsStats> {
        self.mounts
            .get(path)
            .copied()
            .ok_or_else(|| not_found("mount", path))
    }
}

//! Abstractions for filesystem access to enable testing and mocking.
//!
//! The `FileSystem` trait allows the probes to work with both the real `/proc`
//! and `/sys/fs/cgroup` trees on Linux and mock implementations for tests.

use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Capacity figures for one mounted filesystem, as reported by `statfs(2)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsStats {
    /// Total data blocks in the filesystem.
    pub blocks: u64,
    /// Free blocks in the filesystem.
    pub free_blocks: u64,
    /// Block size in bytes.
    pub block_size: u64,
}

impl FsStats {
    /// Total capacity in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.blocks.saturating_mul(self.block_size)
    }

    /// Free capacity in bytes.
    pub fn free_bytes(&self) -> u64 {
        self.free_blocks.saturating_mul(self.block_size)
    }
}

/// Abstraction for filesystem operations.
///
/// This trait allows probes to read from the real filesystem or from
/// a mock implementation for testing purposes.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a string.
    ///
    /// # Arguments
    /// * `path` - Path to the file to read
    ///
    /// # Returns
    /// The file contents as a string, or an I/O error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Lists entries in a directory.
    ///
    /// # Returns
    /// A vector of paths to entries in the directory, or an I/O error.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Resolves a symbolic link one level.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Queries capacity of the filesystem mounted at `path`.
    fn statfs(&self, path: &Path) -> io::Result<FsStats>;
}

/// Real filesystem implementation that delegates to `std::fs` and libc.
///
/// Use this in production to read from the actual `/proc` filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    /// Creates a new `RealFs` instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path)?;
        let mut paths = Vec::new();
        for entry in entries {
            paths.push(entry?.path());
        }
        Ok(paths)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::read_link(path)
    }

    fn statfs(&self, path: &Path) -> io::Result<FsStats> {
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let mut buf = MaybeUninit::<libc::statfs>::uninit();

        // SAFETY: `c_path` is a valid NUL-terminated string and `buf` points to
        // writable memory large enough for a `statfs` struct.
        let rc = unsafe { libc::statfs(c_path.as_ptr(), buf.as_mut_ptr()) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: statfs returned 0, so the kernel filled the struct.
        let stat = unsafe { buf.assume_init() };

        Ok(FsStats {
            blocks: stat.f_blocks as u64,
            free_blocks: stat.f_bfree as u64,
            block_size: stat.f_bsize as u64,
        })
    }
}

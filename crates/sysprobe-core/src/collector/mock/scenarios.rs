//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc` and `/sys/fs/cgroup` states
//! for testing various host conditions.

use super::filesystem::MockFs;
use crate::collector::traits::FsStats;

impl MockFs {
    /// Creates a typical bare-metal host without a cgroup v1 hierarchy.
    ///
    /// Includes: 4 open fds, a 4 MiB RSS, an x86 CPU, 16 GB of RAM and a
    /// mount table with root, tmpfs, boot and the usual pseudo filesystems.
    pub fn typical_host() -> Self {
        let mut fs = Self::new();

        fs.add_fds("/proc/self/fd", 4);
        fs.add_link("/proc/self/exe", "/usr/local/bin/sysprobe");
        fs.add_file(
            "/proc/self/status",
            "\
Name:\tsysprobe
Umask:\t0022
State:\tR (running)
Tgid:\t4242
Pid:\t4242
PPid:\t4100
VmPeak:\t   10240 kB
VmSize:\t   10240 kB
VmHWM:\t    4096 kB
VmRSS:\t    4096 kB
RssAnon:\t    1024 kB
Threads:\t1
",
        );

        fs.add_file(
            "/proc/cpuinfo",
            "\
processor\t: 0
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 106
model name\t: Intel(R) Xeon(R) Platinum 8375C CPU @ 2.90GHz
stepping\t: 6

processor\t: 1
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 106
model name\t: Intel(R) Xeon(R) Platinum 8375C CPU @ 2.90GHz
stepping\t: 6
",
        );

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
",
        );

        fs.add_file(
            "/proc/mounts",
            "\
/dev/sda1 / ext4 rw,relatime 0 0
proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0
sysfs /sys sysfs rw,nosuid,nodev,noexec,relatime 0 0
tmpfs /run tmpfs rw,nosuid,nodev,size=1638400k,mode=755 0 0
cgroup2 /sys/fs/cgroup cgroup2 rw,nosuid,nodev,noexec,relatime 0 0
/dev/sda2 /boot vfat rw,relatime 0 0
",
        );
        fs.add_mount(
            "/",
            FsStats {
                blocks: 1_000_000,
                free_blocks: 250_000,
                block_size: 4096,
            },
        );
        fs.add_mount(
            "/proc",
            FsStats {
                blocks: 0,
                free_blocks: 0,
                block_size: 4096,
            },
        );
        fs.add_mount(
            "/run",
            FsStats {
                blocks: 409_600,
                free_blocks: 409_000,
                block_size: 4096,
            },
        );
        fs.add_mount(
            "/boot",
            FsStats {
                blocks: 262_144,
                free_blocks: 200_000,
                block_size: 2048,
            },
        );
        // /sys and /sys/fs/cgroup have no statfs entry: sysfs is filtered by
        // type and cgroup2 is dropped because statfs fails.

        fs
    }

    /// Typical host running inside a cgroup v1 container with a 512 MiB
    /// memory limit and half a CPU.
    pub fn cgroup_v1_limited() -> Self {
        let mut fs = Self::typical_host();
        fs.add_file(
            "/sys/fs/cgroup/memory/memory.limit_in_bytes",
            "536870912\n",
        );
        fs.add_file("/sys/fs/cgroup/cpu/cpu.cfs_quota_us", "50000\n");
        fs.add_file("/sys/fs/cgroup/cpu/cpu.cfs_period_us", "100000\n");
        fs
    }

    /// Typical host with a cgroup v1 hierarchy that sets no limits.
    pub fn cgroup_v1_unlimited() -> Self {
        let mut fs = Self::typical_host();
        fs.add_file(
            "/sys/fs/cgroup/memory/memory.limit_in_bytes",
            "9223372036854771712\n",
        );
        fs.add_file("/sys/fs/cgroup/cpu/cpu.cfs_quota_us", "-1\n");
        fs.add_file("/sys/fs/cgroup/cpu/cpu.cfs_period_us", "100000\n");
        fs
    }
}

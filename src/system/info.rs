use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SystemError;
use crate::filesize::{FileSize, Unit};

const MEMINFO_PATH: &str = "/proc/meminfo";
const OS_RELEASE_PATH: &str = "/etc/os-release";
const HOSTNAME_PATH: &str = "/proc/sys/kernel/hostname";

/// Fallback memory value when detection fails: 8 GiB.
const FALLBACK_MEMORY: u64 = 8 * 1024 * 1024 * 1024;

/// Fallback core count when detection fails.
const FALLBACK_CPU_CORES: usize = 4;

/// Coarse operating-system classification with a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsFamily {
    /// Linux, macOS, and the BSDs.
    Unix,
    Windows,
    Unknown,
}

impl OsFamily {
    /// Classify the compile-target OS.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    fn from_os_name(name: &str) -> Self {
        match name {
            "linux" | "macos" | "ios" | "android" | "freebsd" | "netbsd" | "openbsd"
            | "dragonfly" => OsFamily::Unix,
            "windows" => OsFamily::Windows,
            _ => OsFamily::Unknown,
        }
    }

    /// Human-readable label.
    pub fn display(&self) -> &'static str {
        match self {
            OsFamily::Unix => "Unix-like",
            OsFamily::Windows => "Windows",
            OsFamily::Unknown => "Unknown",
        }
    }
}

/// Detected operating-system and hardware properties.
///
/// A plain property bag: every field is filled in by [`SystemInfo::detect`]
/// and the remaining methods only map values to display labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Short OS name from the compile target, e.g. `"linux"`.
    pub os_name: String,
    /// Human-readable OS version or distribution name.
    pub os_version: String,
    /// Target architecture, e.g. `"x86_64"`.
    pub architecture: String,
    /// Machine hostname, `"unknown"` when undetectable.
    pub hostname: String,
    /// Number of logical CPU cores.
    pub cpu_cores: usize,
    /// Total system memory in bytes.
    pub total_memory: u64,
}

impl SystemInfo {
    /// Probe the running system.
    ///
    /// Each probe falls back to a conservative default when the platform
    /// query fails; failures are logged, never returned.
    pub fn detect() -> Self {
        Self {
            os_name: std::env::consts::OS.to_string(),
            os_version: detect_os_version(),
            architecture: std::env::consts::ARCH.to_string(),
            hostname: detect_hostname(),
            cpu_cores: detect_cpu_cores(),
            total_memory: detect_total_memory(),
        }
    }

    /// The coarse OS family for this machine.
    pub fn os_family(&self) -> OsFamily {
        OsFamily::from_os_name(&self.os_name)
    }

    /// Total memory as a binary-base [`FileSize`].
    pub fn memory_filesize(&self) -> FileSize {
        FileSize::from_bytes(self.total_memory)
    }

    /// Total memory formatted in gigabytes, e.g. `"8GB"`.
    pub fn memory_display(&self) -> String {
        self.memory_filesize().to_unit_string(Unit::GB)
    }

    /// Labeled one-line-per-property summary.
    pub fn summary(&self) -> String {
        format!(
            "OS: {} ({})\nVersion: {}\nArchitecture: {}\nHostname: {}\nCPU cores: {}\nMemory: {}",
            self.os_name,
            self.os_family().display(),
            self.os_version,
            self.architecture,
            self.hostname,
            self.cpu_cores,
            self.memory_display(),
        )
    }
}

impl fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Detect the number of logical CPU cores, falling back to 4.
pub fn detect_cpu_cores() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(FALLBACK_CPU_CORES)
}

/// Detect total system memory in bytes.
///
/// Parses `/proc/meminfo` on Linux; other platforms get the 8 GiB
/// fallback.
pub fn detect_total_memory() -> u64 {
    match read_meminfo_total() {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("memory detection failed, assuming 8GiB: {err}");
            FALLBACK_MEMORY
        }
    }
}

#[cfg(target_os = "linux")]
fn read_meminfo_total() -> Result<u64, SystemError> {
    let content = std::fs::read_to_string(MEMINFO_PATH).map_err(|source| SystemError::Read {
        path: MEMINFO_PATH.to_string(),
        source,
    })?;
    parse_meminfo_total(&content).ok_or_else(|| SystemError::MissingField {
        field: "MemTotal".to_string(),
        path: MEMINFO_PATH.to_string(),
    })
}

#[cfg(not(target_os = "linux"))]
fn read_meminfo_total() -> Result<u64, SystemError> {
    Err(SystemError::MissingField {
        field: "MemTotal".to_string(),
        path: MEMINFO_PATH.to_string(),
    })
}

// Lines look like "MemTotal:       16384000 kB".
fn parse_meminfo_total(content: &str) -> Option<u64> {
    content
        .lines()
        .find(|line| line.starts_with("MemTotal:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|kb| kb.parse::<u64>().ok())
        .map(|kb| kb * 1024)
}

fn detect_os_version() -> String {
    match std::fs::read_to_string(OS_RELEASE_PATH) {
        Ok(content) => parse_os_release_pretty_name(&content)
            .unwrap_or_else(|| std::env::consts::OS.to_string()),
        Err(err) => {
            log::debug!("no {OS_RELEASE_PATH} available: {err}");
            std::env::consts::OS.to_string()
        }
    }
}

// Lines look like `PRETTY_NAME="Debian GNU/Linux 12 (bookworm)"`.
fn parse_os_release_pretty_name(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

fn detect_hostname() -> String {
    if let Ok(name) = std::fs::read_to_string(HOSTNAME_PATH) {
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }
    match std::env::var("HOSTNAME") {
        Ok(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => "unknown".to_string(),
    }
}

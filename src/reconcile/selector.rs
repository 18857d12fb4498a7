//! Requirement list selection.

use crate::platform::Platform;
use std::fmt;

/// Which requirement list a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Packages built against a GPU runtime.
    Gpu,
    /// The default, CPU-only packages.
    Cpu,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Gpu => f.write_str("GPU"),
            ListKind::Cpu => f.write_str("CPU"),
        }
    }
}

/// Pick the GPU list only when a GPU is available and the host is not Apple.
pub fn select_list(platform: Platform, gpu_capable: bool) -> ListKind {
    if gpu_capable && !platform.is_apple() {
        ListKind::Gpu
    } else {
        ListKind::Cpu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpu_list_on_non_apple_with_gpu() {
        assert_eq!(select_list(Platform::Linux, true), ListKind::Gpu);
        assert_eq!(select_list(Platform::Windows, true), ListKind::Gpu);
    }

    #[test]
    fn cpu_list_without_gpu() {
        assert_eq!(select_list(Platform::Linux, false), ListKind::Cpu);
        assert_eq!(select_list(Platform::Windows, false), ListKind::Cpu);
    }

    #[test]
    fn apple_always_gets_cpu_list() {
        assert_eq!(select_list(Platform::MacOS, true), ListKind::Cpu);
        assert_eq!(select_list(Platform::MacOS, false), ListKind::Cpu);
    }

    #[test]
    fn display_names() {
        assert_eq!(ListKind::Gpu.to_string(), "GPU");
        assert_eq!(ListKind::Cpu.to_string(), "CPU");
    }
}

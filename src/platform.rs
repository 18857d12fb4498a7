//! Host platform and GPU capability.
//!
//! Both values are supplied from outside the reconciler: the platform is
//! detected at compile time unless overridden, and GPU capability comes
//! from configuration or a probe.

use crate::shell::execute_check;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Whether this is Apple's platform, which never gets GPU packages.
    pub fn is_apple(self) -> bool {
        self == Platform::MacOS
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::MacOS => "macos",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
        };
        f.write_str(name)
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "macos" | "darwin" | "apple" | "osx" => Ok(Platform::MacOS),
            "linux" => Ok(Platform::Linux),
            "windows" | "win32" => Ok(Platform::Windows),
            other => Err(format!(
                "unknown platform '{}' (expected macos, linux or windows)",
                other
            )),
        }
    }
}

/// How GPU capability is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuMode {
    /// Assume a GPU is available.
    #[default]
    Enabled,
    /// Assume no GPU.
    Disabled,
    /// Probe for an NVIDIA driver.
    Auto,
}

impl FromStr for GpuMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enabled" | "true" | "on" | "yes" => Ok(GpuMode::Enabled),
            "disabled" | "false" | "off" | "no" => Ok(GpuMode::Disabled),
            "auto" => Ok(GpuMode::Auto),
            other => Err(format!(
                "unknown gpu mode '{}' (expected true, false or auto)",
                other
            )),
        }
    }
}

// Accepts YAML booleans as well as the mode names.
impl<'de> Deserialize<'de> for GpuMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(GpuMode::Enabled),
            Raw::Flag(false) => Ok(GpuMode::Disabled),
            Raw::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}

impl GpuMode {
    /// Resolve the mode to a capability flag.
    pub fn resolve(self) -> bool {
        match self {
            GpuMode::Enabled => true,
            GpuMode::Disabled => false,
            GpuMode::Auto => detect_gpu(),
        }
    }
}

/// Whether an NVIDIA GPU is visible to the driver tools.
pub fn detect_gpu() -> bool {
    let found = execute_check("nvidia-smi", &["-L"]);
    tracing::debug!("GPU probe (nvidia-smi -L): {}", found);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_matches_target() {
        let platform = Platform::current();
        assert_eq!(platform.is_apple(), cfg!(target_os = "macos"));
    }

    #[test]
    fn only_macos_is_apple() {
        assert!(Platform::MacOS.is_apple());
        assert!(!Platform::Linux.is_apple());
        assert!(!Platform::Windows.is_apple());
    }

    #[test]
    fn parses_platform_aliases() {
        assert_eq!("darwin".parse::<Platform>().unwrap(), Platform::MacOS);
        assert_eq!("Apple".parse::<Platform>().unwrap(), Platform::MacOS);
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Linux);
        assert_eq!("win32".parse::<Platform>().unwrap(), Platform::Windows);
        assert!("beos".parse::<Platform>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for p in [Platform::MacOS, Platform::Linux, Platform::Windows] {
            assert_eq!(p.to_string().parse::<Platform>().unwrap(), p);
        }
    }

    #[test]
    fn fixed_modes_resolve_without_probe() {
        assert!(GpuMode::Enabled.resolve());
        assert!(!GpuMode::Disabled.resolve());
    }

    #[test]
    fn gpu_mode_defaults_to_enabled() {
        assert_eq!(GpuMode::default(), GpuMode::Enabled);
    }

    #[test]
    fn gpu_mode_deserializes_booleans_and_auto() {
        let mode: GpuMode = serde_yaml::from_str("auto").unwrap();
        assert_eq!(mode, GpuMode::Auto);
        let mode: GpuMode = serde_yaml::from_str("off").unwrap();
        assert_eq!(mode, GpuMode::Disabled);
        let mode: GpuMode = serde_yaml::from_str("true").unwrap();
        assert_eq!(mode, GpuMode::Enabled);
        let mode: GpuMode = serde_yaml::from_str("false").unwrap();
        assert_eq!(mode, GpuMode::Disabled);
        assert!(serde_yaml::from_str::<GpuMode>("sometimes").is_err());
    }
}

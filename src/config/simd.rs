//! SIMD kernel configuration.

use super::{parse_env_bool, Config};
use crate::error::{Result, Vec4iError};
use crate::simd::SimdImpl;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Kernel selection for batch operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimdConfig {
    /// Use the compiled native kernels; `false` forces the scalar kernels
    pub enable_simd: bool,
    /// Reject builds that only carry scalar kernels
    pub require_native: bool,
}

impl Default for SimdConfig {
    fn default() -> Self {
        Self {
            enable_simd: true,
            require_native: false,
        }
    }
}

impl Config for SimdConfig {
    fn validate(&self) -> Result<()> {
        if self.require_native && !self.enable_simd {
            return Err(Vec4iError::configuration(
                "require_native is set but enable_simd is off",
            ));
        }
        if self.require_native && !SimdImpl::ACTIVE.is_native() {
            return Err(Vec4iError::configuration(
                "native kernels required but this build only has scalar kernels",
            ));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.enable_simd = parse_env_bool(&format!("{}SIMD_ENABLE", prefix), config.enable_simd);
        config.require_native =
            parse_env_bool(&format!("{}SIMD_REQUIRE_NATIVE", prefix), config.require_native);
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            enable_simd: true,
            require_native: false,
        }
    }

    fn reference_preset() -> Self {
        Self {
            enable_simd: false,
            require_native: false,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            Vec4iError::configuration(format!("Failed to serialize SIMD config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            Vec4iError::configuration(format!("Failed to write SIMD config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            Vec4iError::configuration(format!("Failed to parse SIMD config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
